use crate::domain::ports::{Notice, Notifier};
use async_trait::async_trait;

/// Notifier that writes every notice to the log instead of mailing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

#[async_trait]
impl Notifier for TracingNotifier {
    async fn send(&self, notice: Notice) {
        match notice {
            Notice::BookingConfirmed { booking_id } => {
                tracing::info!(booking = %booking_id, "Booking confirmation sent");
            }
            Notice::BookingCancelled { booking_id } => {
                tracing::info!(booking = %booking_id, "Booking cancellation sent");
            }
        }
    }
}
