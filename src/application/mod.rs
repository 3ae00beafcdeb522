//! Application layer containing the booking workflow.
//!
//! This module defines `BookingService`, the entry point that turns booking
//! requests into priced, paid and persisted reservations. It only talks to its
//! collaborators through the ports in `crate::domain::ports`.

pub mod booking;
