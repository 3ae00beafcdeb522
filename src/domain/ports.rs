use super::booking::{BookingId, BookingRecord, BookingRequest};
use super::price::Price;
use super::room::Room;
use crate::error::Result;
use async_trait::async_trait;

/// Tracks which rooms exist and which of them are free.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    /// Snapshot of the rooms that are currently free.
    async fn available_rooms(&self) -> Result<Vec<Room>>;
    /// Picks a free room for the request, failing with `RoomUnavailable` when none fits.
    async fn find_available_room_id(&self, request: &BookingRequest) -> Result<String>;
    async fn book_room(&self, room_id: &str) -> Result<()>;
    async fn unbook_room(&self, room_id: &str) -> Result<()>;
}

/// Opaque reference to a successful charge.
pub type PaymentId = String;

#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Charges `amount` for the request, failing with `PaymentRejected` when declined.
    async fn pay(&self, request: &BookingRequest, amount: Price) -> Result<PaymentId>;
}

#[async_trait]
pub trait BookingStore: Send + Sync {
    async fn save(&self, request: BookingRequest) -> Result<BookingId>;
    async fn get(&self, booking_id: &BookingId) -> Result<Option<BookingRecord>>;
    async fn delete(&self, booking_id: &BookingId) -> Result<()>;
    async fn all(&self) -> Result<Vec<BookingRecord>>;
}

/// Message sent to the guest after a booking changes.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    BookingConfirmed { booking_id: BookingId },
    BookingCancelled { booking_id: BookingId },
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Fire-and-forget: delivery failures stay inside the notifier.
    async fn send(&self, notice: Notice);
}

pub type RoomDirectoryBox = Box<dyn RoomDirectory>;
pub type PaymentProcessorBox = Box<dyn PaymentProcessor>;
pub type BookingStoreBox = Box<dyn BookingStore>;
pub type NotifierBox = Box<dyn Notifier>;
