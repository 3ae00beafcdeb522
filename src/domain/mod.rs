//! Booking domain types and the ports the workflow depends on.

pub mod booking;
pub mod ports;
pub mod price;
pub mod room;
