#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use hotelbook::domain::booking::{BookingId, BookingRecord, BookingRequest, Stay};
use hotelbook::domain::ports::{
    BookingStore, Notice, Notifier, PaymentId, PaymentProcessor, RoomDirectory,
};
use hotelbook::domain::price::Price;
use hotelbook::domain::room::Room;
use hotelbook::error::{BookingError, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn request(
    id: &str,
    check_in: NaiveDate,
    check_out: NaiveDate,
    guests: u32,
    prepaid: bool,
) -> BookingRequest {
    let stay = Stay::new(check_in, check_out).unwrap();
    BookingRequest::new(id, stay, guests, prepaid).unwrap()
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room::new("Room-1", 5).unwrap(),
        Room::new("Room-2", 2).unwrap(),
        Room::new("Room-3", 8).unwrap(),
    ]
}

#[derive(Default)]
struct RoomDirectoryState {
    snapshots: VecDeque<Vec<Room>>,
    unavailable: bool,
    failing_book: bool,
    booked: Vec<String>,
    unbooked: Vec<String>,
}

/// Room directory double with scripted availability.
///
/// Each `available_rooms` call returns the next scripted snapshot; the last
/// one repeats. With no snapshot every call returns no rooms.
#[derive(Default, Clone)]
pub struct FakeRoomDirectory {
    state: Arc<Mutex<RoomDirectoryState>>,
}

impl FakeRoomDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshots(snapshots: Vec<Vec<Room>>) -> Self {
        let directory = Self::new();
        directory.state.lock().unwrap().snapshots = snapshots.into();
        directory
    }

    /// Makes every room lookup fail with `RoomUnavailable`.
    pub fn unavailable() -> Self {
        let directory = Self::new();
        directory.state.lock().unwrap().unavailable = true;
        directory
    }

    /// Makes every `book_room` call fail.
    pub fn failing_book() -> Self {
        let directory = Self::new();
        directory.state.lock().unwrap().failing_book = true;
        directory
    }

    pub fn booked(&self) -> Vec<String> {
        self.state.lock().unwrap().booked.clone()
    }

    pub fn unbooked(&self) -> Vec<String> {
        self.state.lock().unwrap().unbooked.clone()
    }
}

#[async_trait]
impl RoomDirectory for FakeRoomDirectory {
    async fn available_rooms(&self) -> Result<Vec<Room>> {
        let mut state = self.state.lock().unwrap();
        if state.snapshots.len() > 1 {
            Ok(state.snapshots.pop_front().unwrap_or_default())
        } else {
            Ok(state.snapshots.front().cloned().unwrap_or_default())
        }
    }

    async fn find_available_room_id(&self, _request: &BookingRequest) -> Result<String> {
        if self.state.lock().unwrap().unavailable {
            Err(BookingError::RoomUnavailable)
        } else {
            Ok("1.3".to_string())
        }
    }

    async fn book_room(&self, room_id: &str) -> Result<()> {
        let mut state = self.state.lock().unwrap();
        if state.failing_book {
            return Err(BookingError::ValidationError(format!("Unknown room {room_id}")));
        }
        state.booked.push(room_id.to_string());
        Ok(())
    }

    async fn unbook_room(&self, room_id: &str) -> Result<()> {
        self.state.lock().unwrap().unbooked.push(room_id.to_string());
        Ok(())
    }
}

/// Payment processor double that records every charge.
#[derive(Default, Clone)]
pub struct FakePaymentProcessor {
    payments: Arc<Mutex<Vec<(String, Price)>>>,
    rooms: Arc<Mutex<Vec<Option<String>>>>,
    reject: bool,
}

impl FakePaymentProcessor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Request ids and amounts of every `pay` call, in order.
    pub fn payments(&self) -> Vec<(String, Price)> {
        self.payments.lock().unwrap().clone()
    }

    /// Room ids the charged requests carried, in order.
    pub fn charged_rooms(&self) -> Vec<Option<String>> {
        self.rooms.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaymentProcessor for FakePaymentProcessor {
    async fn pay(&self, request: &BookingRequest, amount: Price) -> Result<PaymentId> {
        self.payments
            .lock()
            .unwrap()
            .push((request.id.clone(), amount));
        self.rooms.lock().unwrap().push(request.room_id.clone());
        if self.reject {
            Err(BookingError::PaymentRejected("declined".to_string()))
        } else {
            Ok("payment-1".to_string())
        }
    }
}

/// Booking store double that keeps records in memory and counts saves.
#[derive(Default, Clone)]
pub struct FakeBookingStore {
    records: Arc<Mutex<HashMap<BookingId, BookingRecord>>>,
    saves: Arc<Mutex<Vec<BookingRequest>>>,
    failing: bool,
}

impl FakeBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every `save` call fail.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Stores a record directly, bypassing the workflow.
    pub fn insert(&self, request: BookingRequest) -> BookingId {
        let booking_id = BookingId::generate();
        self.records.lock().unwrap().insert(
            booking_id,
            BookingRecord {
                booking_id,
                request,
            },
        );
        booking_id
    }

    pub fn saved(&self) -> Vec<BookingRequest> {
        self.saves.lock().unwrap().clone()
    }

    pub fn contains(&self, booking_id: &BookingId) -> bool {
        self.records.lock().unwrap().contains_key(booking_id)
    }
}

#[async_trait]
impl BookingStore for FakeBookingStore {
    async fn save(&self, request: BookingRequest) -> Result<BookingId> {
        self.saves.lock().unwrap().push(request.clone());
        if self.failing {
            return Err(BookingError::IoError(std::io::Error::other("disk full")));
        }
        Ok(self.insert(request))
    }

    async fn get(&self, booking_id: &BookingId) -> Result<Option<BookingRecord>> {
        Ok(self.records.lock().unwrap().get(booking_id).cloned())
    }

    async fn delete(&self, booking_id: &BookingId) -> Result<()> {
        self.records.lock().unwrap().remove(booking_id);
        Ok(())
    }

    async fn all(&self) -> Result<Vec<BookingRecord>> {
        Ok(self.records.lock().unwrap().values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub struct FakeNotifier {
    sent: Arc<Mutex<Vec<Notice>>>,
}

impl FakeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<Notice> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for FakeNotifier {
    async fn send(&self, notice: Notice) {
        self.sent.lock().unwrap().push(notice);
    }
}
