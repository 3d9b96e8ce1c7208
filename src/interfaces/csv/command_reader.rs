use crate::domain::command::OrderCommand;
use crate::error::{OrderError, Result};
use std::io::Read;

/// Reads order commands from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<OrderCommand>`. It handles whitespace trimming and flexible record
/// lengths automatically.
pub struct CommandReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> CommandReader<R> {
    /// Creates a new `CommandReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes commands.
    pub fn commands(self) -> impl Iterator<Item = Result<OrderCommand>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(OrderError::from))
    }
}
