use crate::error::OrderError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Caller-assigned order identifier.
pub type OrderId = u32;

/// Represents a positive monetary amount for orders.
///
/// This is a wrapper around `rust_decimal::Decimal` to enforce domain-specific
/// rules and provide type safety for monetary values.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, OrderError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(OrderError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = OrderError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Failed,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Failed => "failed",
        }
    }
}

/// Human-readable label for a possibly missing status.
///
/// Lookup misses are a normal outcome, reported as "not found" rather than an
/// error.
pub fn status_label(status: Option<OrderStatus>) -> &'static str {
    match status {
        Some(status) => status.as_str(),
        None => "not found",
    }
}

/// Represents a single order.
///
/// An order starts out `Pending` and settles exactly once, to `Paid` or
/// `Failed`. Both settled states are terminal.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Order {
    /// The unique identifier for the order.
    pub id: OrderId,
    /// The order total. Always positive.
    pub amount: Amount,
    /// The settlement state of the order.
    pub status: OrderStatus,
}

impl Order {
    pub fn new(id: OrderId, amount: Amount) -> Self {
        Self {
            id,
            amount,
            status: OrderStatus::Pending,
        }
    }

    /// Settles the order with the payment outcome.
    pub fn settle(&mut self, approved: bool) -> Result<(), OrderError> {
        if self.status != OrderStatus::Pending {
            return Err(OrderError::AlreadySettled(self.id));
        }
        self.status = if approved {
            OrderStatus::Paid
        } else {
            OrderStatus::Failed
        };
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_validation() {
        let amount = Amount::new(dec!(50.0)).unwrap();
        assert_eq!(amount.value(), dec!(50.0));

        assert!(matches!(
            Amount::new(dec!(0.0)),
            Err(OrderError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::new(dec!(-50.0)),
            Err(OrderError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_new_order_is_pending() {
        let order = Order::new(101, Amount::new(dec!(50.0)).unwrap());
        assert_eq!(order.id, 101);
        assert_eq!(order.amount.value(), dec!(50.0));
        assert_eq!(order.status, OrderStatus::Pending);
    }

    #[test]
    fn test_settle_approved() {
        let mut order = Order::new(1, Amount::new(dec!(10.0)).unwrap());
        order.settle(true).unwrap();
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_settle_declined() {
        let mut order = Order::new(1, Amount::new(dec!(10.0)).unwrap());
        order.settle(false).unwrap();
        assert_eq!(order.status, OrderStatus::Failed);
    }

    #[test]
    fn test_settle_is_terminal() {
        let mut order = Order::new(7, Amount::new(dec!(10.0)).unwrap());
        order.settle(true).unwrap();

        let result = order.settle(false);
        assert!(matches!(result, Err(OrderError::AlreadySettled(7))));
        assert_eq!(order.status, OrderStatus::Paid);
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&OrderStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");

        let json = serde_json::to_string(&OrderStatus::Paid).unwrap();
        assert_eq!(json, "\"paid\"");

        let json = serde_json::to_string(&OrderStatus::Failed).unwrap();
        assert_eq!(json, "\"failed\"");
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(Some(OrderStatus::Pending)), "pending");
        assert_eq!(status_label(Some(OrderStatus::Paid)), "paid");
        assert_eq!(status_label(Some(OrderStatus::Failed)), "failed");
        assert_eq!(status_label(None), "not found");
    }
}
