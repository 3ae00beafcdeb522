use crate::domain::booking::BookingId;
use crate::domain::price::Price;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Outcome of one successful booking, as written to the output CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub request: String,
    pub booking: BookingId,
    pub room: String,
    pub price: Price,
}

/// Writes booking receipts as CSV with the header `request,booking,room,price`.
pub struct ReceiptWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReceiptWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_receipt(&mut self, receipt: &Receipt) -> Result<()> {
        self.writer.serialize(receipt)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
