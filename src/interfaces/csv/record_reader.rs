use crate::error::{Result, TransferError};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads typed records from a CSV source.
///
/// This reader wraps `csv::Reader` and yields `Result<T>` per row, so one bad
/// row does not stop the stream. Whitespace around fields is trimmed.
pub struct RecordReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RecordReader<R> {
    /// Creates a new `RecordReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes records.
    pub fn records<T: DeserializeOwned>(self) -> impl Iterator<Item = Result<T>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TransferError::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Account;
    use crate::domain::transfer::TransferRequest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_reader_valid_accounts() {
        let data = "id, balance\nId-1, 1000\nId-2, 0.5";
        let reader = RecordReader::new(data.as_bytes());
        let results: Vec<Result<Account>> = reader.records().collect();

        assert_eq!(results.len(), 2);
        let acc = results[1].as_ref().unwrap();
        assert_eq!(acc.id().as_str(), "Id-2");
        assert_eq!(acc.balance().value(), dec!(0.5));
    }

    #[test]
    fn test_reader_rejects_negative_and_empty_accounts() {
        let data = "id, balance\nId-1, -5\n, 10\nId-3, 3";
        let reader = RecordReader::new(data.as_bytes());
        let results: Vec<Result<Account>> = reader.records().collect();

        assert!(results[0].is_err());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_reader_valid_transfers() {
        let data = "from, to, amount\nA, B, 10\nB, A, 2.5";
        let reader = RecordReader::new(data.as_bytes());
        let results: Vec<Result<TransferRequest>> = reader.records().collect();

        assert_eq!(results.len(), 2);
        assert_eq!(
            results[1].as_ref().unwrap(),
            &TransferRequest::new("B", "A", dec!(2.5))
        );
    }

    #[test]
    fn test_reader_malformed_line() {
        let data = "from, to, amount\nA, B, lots";
        let reader = RecordReader::new(data.as_bytes());
        let results: Vec<Result<TransferRequest>> = reader.records().collect();

        assert!(matches!(results[0], Err(TransferError::Csv(_))));
    }
}
