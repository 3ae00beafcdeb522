use crate::error::BookingError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// The dates of a hotel stay.
///
/// Guarantees that the check-out date is strictly after the check-in date,
/// so every stay lasts at least one night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StayDates", into = "StayDates")]
pub struct Stay {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Stay {
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, BookingError> {
        if check_out > check_in {
            Ok(Self {
                check_in,
                check_out,
            })
        } else {
            Err(BookingError::ValidationError(format!(
                "Check-out {} must be after check-in {}",
                check_out, check_in
            )))
        }
    }

    /// Number of whole nights between check-in and check-out. Always at least 1.
    pub fn nights(&self) -> u32 {
        (self.check_out - self.check_in).num_days() as u32
    }
}

impl TryFrom<StayDates> for Stay {
    type Error = BookingError;

    fn try_from(dates: StayDates) -> Result<Self, Self::Error> {
        Self::new(dates.check_in, dates.check_out)
    }
}

impl From<Stay> for StayDates {
    fn from(stay: Stay) -> Self {
        Self {
            check_in: stay.check_in,
            check_out: stay.check_out,
        }
    }
}

/// A guest's request for a room.
///
/// The room id stays empty until the booking workflow assigns one.
/// Deserialization goes through [`BookingRequest::new`], so stored requests
/// are validated like fresh ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RequestFields", into = "RequestFields")]
pub struct BookingRequest {
    /// Caller-supplied identifier of the request (usually the guest's).
    pub id: String,
    pub stay: Stay,
    guests: u32,
    /// Whether payment is collected at booking time.
    pub prepaid: bool,
    pub room_id: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct RequestFields {
    id: String,
    stay: Stay,
    guests: u32,
    prepaid: bool,
    room_id: Option<String>,
}

impl BookingRequest {
    pub fn new(
        id: impl Into<String>,
        stay: Stay,
        guests: u32,
        prepaid: bool,
    ) -> Result<Self, BookingError> {
        if guests == 0 {
            return Err(BookingError::ValidationError(
                "A booking needs at least one guest".to_string(),
            ));
        }
        Ok(Self {
            id: id.into(),
            stay,
            guests,
            prepaid,
            room_id: None,
        })
    }

    /// Number of occupants, at least 1.
    pub fn guests(&self) -> u32 {
        self.guests
    }
}

impl TryFrom<RequestFields> for BookingRequest {
    type Error = BookingError;

    fn try_from(fields: RequestFields) -> Result<Self, Self::Error> {
        let mut request = Self::new(fields.id, fields.stay, fields.guests, fields.prepaid)?;
        request.room_id = fields.room_id;
        Ok(request)
    }
}

impl From<BookingRequest> for RequestFields {
    fn from(request: BookingRequest) -> Self {
        Self {
            id: request.id,
            stay: request.stay,
            guests: request.guests,
            prepaid: request.prepaid,
            room_id: request.room_id,
        }
    }
}

/// Identifier handed out by a booking store when a request is saved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for BookingId {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| BookingError::ValidationError(format!("Invalid booking id {s}: {e}")))
    }
}

/// The persisted form of a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub booking_id: BookingId,
    pub request: BookingRequest,
}
