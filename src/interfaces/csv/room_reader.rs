use crate::domain::room::Room;
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct RoomRow {
    id: String,
    capacity: u32,
}

/// Reads the hotel's rooms from a CSV source with the columns `id, capacity`.
pub struct RoomReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RoomReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Reads every room, failing on the first malformed or invalid row.
    pub fn rooms(self) -> Result<Vec<Room>> {
        self.reader
            .into_deserialize::<RoomRow>()
            .map(|row| {
                let row = row?;
                Room::new(row.id, row.capacity)
            })
            .collect()
    }
}
