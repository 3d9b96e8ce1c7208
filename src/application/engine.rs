use crate::domain::order::{Amount, Order, OrderId, OrderStatus};
use crate::domain::ports::{OrderStoreBox, PaymentGatewayBox};
use crate::error::{OrderError, Result};
use rust_decimal::Decimal;

/// The main entry point for the order processing application.
///
/// `OrderEngine` owns the storage backend and the payment gateway. All
/// settlement decisions come from the gateway port, never from the engine
/// itself.
pub struct OrderEngine {
    store: OrderStoreBox,
    gateway: PaymentGatewayBox,
}

impl OrderEngine {
    /// Creates a new `OrderEngine` instance.
    ///
    /// # Arguments
    ///
    /// * `store` - The store for orders.
    /// * `gateway` - The payment-outcome source.
    pub fn new(store: OrderStoreBox, gateway: PaymentGatewayBox) -> Self {
        Self { store, gateway }
    }

    /// Creates a new pending order.
    ///
    /// The amount must be strictly positive; order ids must be unique.
    pub async fn create_order(&self, id: OrderId, amount: Decimal) -> Result<Order> {
        let amount = Amount::new(amount)?;
        if self.store.get(id).await?.is_some() {
            return Err(OrderError::DuplicateOrder(id));
        }

        let order = Order::new(id, amount);
        self.store.store(order.clone()).await?;
        Ok(order)
    }

    /// Returns the status of an order, or `None` if no such order exists.
    ///
    /// A lookup miss is a normal outcome, not an error.
    pub async fn order_status(&self, id: OrderId) -> Result<Option<OrderStatus>> {
        Ok(self.store.get(id).await?.map(|order| order.status))
    }

    /// Settles a pending order with the gateway's outcome.
    ///
    /// Returns `true` if the payment was approved and the order marked paid,
    /// `false` if it was declined and the order marked failed. Settlement is
    /// terminal either way.
    pub async fn process_payment(&self, id: OrderId) -> Result<bool> {
        let mut order = self
            .store
            .get(id)
            .await?
            .ok_or(OrderError::OrderNotFound(id))?;

        if order.status != OrderStatus::Pending {
            return Err(OrderError::AlreadySettled(id));
        }

        let approved = self.gateway.authorize(&order).await;
        order.settle(approved)?;
        self.store.store(order).await?;
        Ok(approved)
    }

    /// Consumes the engine and returns the final state of all orders.
    pub async fn into_results(self) -> Result<Vec<Order>> {
        self.store.all_orders().await
    }
}
