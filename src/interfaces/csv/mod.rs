pub mod booking_reader;
pub mod receipt_writer;
pub mod room_reader;
