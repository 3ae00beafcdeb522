use crate::domain::booking::{BookingId, BookingRecord, BookingRequest};
use crate::domain::ports::BookingStore;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamilyDescriptor, DB, Options};
use std::path::Path;
use std::sync::Arc;

/// Column Family for storing booking records.
pub const CF_BOOKINGS: &str = "bookings";

/// A persistent booking store implementation using RocksDB.
///
/// Records are stored as JSON under the 16 raw bytes of their booking id.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBBookingStore {
    db: Arc<DB>,
}

impl RocksDBBookingStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "bookings" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_bookings = ColumnFamilyDescriptor::new(CF_BOOKINGS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_bookings])?;

        Ok(Self { db: Arc::new(db) })
    }

    fn bookings_cf(&self) -> Result<&rocksdb::ColumnFamily> {
        self.db.cf_handle(CF_BOOKINGS).ok_or_else(|| {
            BookingError::InternalError(Box::new(std::io::Error::other(
                "Bookings column family not found",
            )))
        })
    }
}

fn decode(bytes: &[u8]) -> Result<BookingRecord> {
    serde_json::from_slice(bytes).map_err(|e| {
        BookingError::InternalError(Box::new(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Deserialization error: {}", e),
        )))
    })
}

#[async_trait]
impl BookingStore for RocksDBBookingStore {
    async fn save(&self, request: BookingRequest) -> Result<BookingId> {
        let cf = self.bookings_cf()?;

        let booking_id = BookingId::generate();
        let record = BookingRecord {
            booking_id,
            request,
        };
        let value = serde_json::to_vec(&record).map_err(|e| {
            BookingError::InternalError(Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Serialization error: {}", e),
            )))
        })?;

        self.db.put_cf(cf, booking_id.as_bytes(), value)?;

        Ok(booking_id)
    }

    async fn get(&self, booking_id: &BookingId) -> Result<Option<BookingRecord>> {
        let cf = self.bookings_cf()?;

        match self.db.get_cf(cf, booking_id.as_bytes())? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, booking_id: &BookingId) -> Result<()> {
        let cf = self.bookings_cf()?;
        self.db.delete_cf(cf, booking_id.as_bytes())?;
        Ok(())
    }

    async fn all(&self) -> Result<Vec<BookingRecord>> {
        let cf = self.bookings_cf()?;

        let mut records = Vec::new();
        for item in self.db.iterator_cf(cf, rocksdb::IteratorMode::Start) {
            let (_key, value) = item?;
            records.push(decode(&value)?);
        }

        Ok(records)
    }
}
