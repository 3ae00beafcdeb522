use crate::domain::booking::{BookingRequest, Stay};
use crate::error::Result;
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;

/// One line of a booking requests file.
#[derive(Debug, Deserialize)]
struct BookingRow {
    id: String,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    prepaid: bool,
}

impl BookingRow {
    fn into_request(self) -> Result<BookingRequest> {
        let stay = Stay::new(self.check_in, self.check_out)?;
        BookingRequest::new(self.id, stay, self.guests, self.prepaid)
    }
}

/// Reads booking requests from a CSV source.
///
/// Expects the columns `id, check_in, check_out, guests, prepaid`, with ISO
/// dates. Rows that fail to parse or validate come out as errors without
/// stopping the stream.
pub struct BookingReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> BookingReader<R> {
    /// Creates a new `BookingReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and validates booking requests.
    pub fn requests(self) -> impl Iterator<Item = Result<BookingRequest>> {
        self.reader
            .into_deserialize::<BookingRow>()
            .map(|row| row?.into_request())
    }
}
