use crate::error::BookingError;
use serde::{Deserialize, Serialize};

/// A bookable hotel room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Maximum number of occupants.
    pub capacity: u32,
}

impl Room {
    pub fn new(id: impl Into<String>, capacity: u32) -> Result<Self, BookingError> {
        let id = id.into();
        if capacity == 0 {
            return Err(BookingError::ValidationError(format!(
                "Room {id} must hold at least one guest"
            )));
        }
        Ok(Self { id, capacity })
    }

    pub fn fits(&self, guests: u32) -> bool {
        self.capacity >= guests
    }
}
