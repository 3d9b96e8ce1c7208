use orderflow::application::engine::OrderEngine;
use orderflow::domain::order::OrderStatus;
use orderflow::infrastructure::gateway::RandomGateway;
use orderflow::infrastructure::in_memory::InMemoryOrderStore;
use rust_decimal_macros::dec;
use std::time::Instant;

// The simulated gateway sleeps for a second per payment, so these stay out
// of the fast suite. Run them with `cargo test -- --ignored`.

#[tokio::test]
#[ignore = "payment simulation sleeps for 1s per call"]
async fn test_payment_with_simulated_latency() {
    let engine = OrderEngine::new(
        Box::new(InMemoryOrderStore::new()),
        Box::new(RandomGateway::new()),
    );

    engine.create_order(105, dec!(150)).await.unwrap();

    let start = Instant::now();
    let outcome = engine.process_payment(105).await.unwrap();
    assert!(start.elapsed().as_millis() >= 1000);

    let status = engine.order_status(105).await.unwrap().unwrap();
    match status {
        OrderStatus::Paid => assert!(outcome),
        OrderStatus::Failed => assert!(!outcome),
        OrderStatus::Pending => panic!("order should have settled"),
    }
}
