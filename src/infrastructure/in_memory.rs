use crate::domain::booking::{BookingId, BookingRecord, BookingRequest};
use crate::domain::ports::{BookingStore, RoomDirectory};
use crate::domain::room::Room;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct RoomSlot {
    room: Room,
    booked: bool,
}

/// A thread-safe in-memory room directory.
///
/// Rooms are kept ordered by id so availability snapshots and room selection
/// are deterministic. Clones share the same rooms.
#[derive(Default, Clone)]
pub struct InMemoryRoomDirectory {
    rooms: Arc<RwLock<BTreeMap<String, RoomSlot>>>,
}

impl InMemoryRoomDirectory {
    /// Creates a directory without any rooms.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a directory where every given room starts free.
    ///
    /// A later room with an already known id replaces the earlier one.
    pub fn with_rooms(rooms: impl IntoIterator<Item = Room>) -> Self {
        let rooms = rooms
            .into_iter()
            .map(|room| {
                (
                    room.id.clone(),
                    RoomSlot {
                        room,
                        booked: false,
                    },
                )
            })
            .collect();
        Self {
            rooms: Arc::new(RwLock::new(rooms)),
        }
    }

    async fn set_booked(&self, room_id: &str, booked: bool) -> Result<()> {
        let mut rooms = self.rooms.write().await;
        let slot = rooms.get_mut(room_id).ok_or_else(|| {
            BookingError::ValidationError(format!("Unknown room {room_id}"))
        })?;
        slot.booked = booked;
        Ok(())
    }
}

#[async_trait]
impl RoomDirectory for InMemoryRoomDirectory {
    async fn available_rooms(&self) -> Result<Vec<Room>> {
        let rooms = self.rooms.read().await;
        Ok(rooms
            .values()
            .filter(|slot| !slot.booked)
            .map(|slot| slot.room.clone())
            .collect())
    }

    async fn find_available_room_id(&self, request: &BookingRequest) -> Result<String> {
        let rooms = self.rooms.read().await;
        // Smallest room that fits; `min_by_key` keeps the first (lowest id) on ties.
        rooms
            .values()
            .filter(|slot| !slot.booked && slot.room.fits(request.guests()))
            .min_by_key(|slot| slot.room.capacity)
            .map(|slot| slot.room.id.clone())
            .ok_or(BookingError::RoomUnavailable)
    }

    async fn book_room(&self, room_id: &str) -> Result<()> {
        self.set_booked(room_id, true).await
    }

    async fn unbook_room(&self, room_id: &str) -> Result<()> {
        self.set_booked(room_id, false).await
    }
}

/// A thread-safe in-memory store for booking records.
///
/// Uses `Arc<RwLock<HashMap<BookingId, BookingRecord>>>` for shared concurrent access.
/// Nothing survives the process; use the RocksDB store for that.
#[derive(Default, Clone)]
pub struct InMemoryBookingStore {
    bookings: Arc<RwLock<HashMap<BookingId, BookingRecord>>>,
}

impl InMemoryBookingStore {
    /// Creates a new, empty in-memory booking store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn save(&self, request: BookingRequest) -> Result<BookingId> {
        let booking_id = BookingId::generate();
        let mut bookings = self.bookings.write().await;
        bookings.insert(
            booking_id,
            BookingRecord {
                booking_id,
                request,
            },
        );
        Ok(booking_id)
    }

    async fn get(&self, booking_id: &BookingId) -> Result<Option<BookingRecord>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.get(booking_id).cloned())
    }

    async fn delete(&self, booking_id: &BookingId) -> Result<()> {
        let mut bookings = self.bookings.write().await;
        bookings.remove(booking_id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<BookingRecord>> {
        let bookings = self.bookings.read().await;
        Ok(bookings.values().cloned().collect())
    }
}
