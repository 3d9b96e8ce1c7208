use crate::domain::order::OrderId;
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrderError>;

#[derive(Error, Debug)]
pub enum OrderError {
    #[error("invalid amount {0}: amount must be positive")]
    InvalidAmount(Decimal),
    #[error("order {0} already exists")]
    DuplicateOrder(OrderId),
    #[error("order {0} not found")]
    OrderNotFound(OrderId),
    #[error("order {0} is already settled")]
    AlreadySettled(OrderId),
    #[error("command error: {0}")]
    CommandError(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
