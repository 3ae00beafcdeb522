//! Inputs and outputs of the `hotelbook` binary.

pub mod csv;
pub mod greeting;
