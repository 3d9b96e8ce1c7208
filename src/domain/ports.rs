use super::order::{Order, OrderId};
use crate::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn store(&self, order: Order) -> Result<()>;
    async fn get(&self, id: OrderId) -> Result<Option<Order>>;
    async fn all_orders(&self) -> Result<Vec<Order>>;
}

/// The payment-outcome source. The engine never decides an outcome itself;
/// substituting this port is how tests force deterministic results.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn authorize(&self, order: &Order) -> bool;
}

pub type OrderStoreBox = Box<dyn OrderStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
