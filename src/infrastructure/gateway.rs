use crate::domain::order::Order;
use crate::domain::ports::PaymentGateway;
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Simulates a real payment provider: a uniform coin flip over
/// approve/decline, behind a configurable processing delay.
#[derive(Debug, Clone)]
pub struct RandomGateway {
    delay: Duration,
}

impl RandomGateway {
    /// Creates a gateway with the default 1 second processing delay.
    pub fn new() -> Self {
        Self::with_delay(Duration::from_secs(1))
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for RandomGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for RandomGateway {
    async fn authorize(&self, _order: &Order) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        rand::thread_rng().gen_bool(0.5)
    }
}

/// A gateway with a pinned outcome.
///
/// Used by tests that need deterministic settlement and by the CLI's
/// `--outcome` flag for reproducible runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedGateway {
    outcome: bool,
}

impl FixedGateway {
    pub fn new(outcome: bool) -> Self {
        Self { outcome }
    }
}

#[async_trait]
impl PaymentGateway for FixedGateway {
    async fn authorize(&self, _order: &Order) -> bool {
        self.outcome
    }
}
