use crate::domain::order::OrderId;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum CommandType {
    Create,
    Pay,
}

/// A single row of the batch command stream.
///
/// `create` rows carry an amount; `pay` rows do not.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct OrderCommand {
    pub op: CommandType,
    pub order: OrderId,
    pub amount: Option<Decimal>,
}
