use crate::domain::order::Order;
use crate::error::Result;
use std::io::Write;

/// Writes the final order table as CSV.
///
/// Orders are sorted by id so the report is deterministic regardless of the
/// store's iteration order.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a new `ReportWriter` over any `Write` sink (e.g., Stdout).
    pub fn new(sink: W) -> Self {
        let writer = csv::WriterBuilder::new().from_writer(sink);
        Self { writer }
    }

    pub fn write_orders(&mut self, mut orders: Vec<Order>) -> Result<()> {
        orders.sort_by_key(|order| order.id);
        for order in orders {
            self.writer.serialize(order)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::{Amount, OrderStatus};
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_format() {
        let mut order = Order::new(101, Amount::new(dec!(50.0)).unwrap());
        order.status = OrderStatus::Paid;

        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer);
        writer.write_orders(vec![order]).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "id,amount,status\n101,50.0,paid\n");
    }

    #[test]
    fn test_report_sorted_by_id() {
        let orders = vec![
            Order::new(20, Amount::new(dec!(2)).unwrap()),
            Order::new(10, Amount::new(dec!(1)).unwrap()),
        ];

        let mut buffer = Vec::new();
        let mut writer = ReportWriter::new(&mut buffer);
        writer.write_orders(orders).unwrap();
        drop(writer);

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, ["id,amount,status", "10,1,pending", "20,2,pending"]);
    }
}
