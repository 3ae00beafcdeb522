use crate::domain::booking::{BookingId, BookingRecord, BookingRequest};
use crate::domain::ports::{
    BookingStoreBox, Notice, NotifierBox, PaymentProcessorBox, RoomDirectoryBox,
};
use crate::domain::price::{NIGHTLY_RATE, Price};
use crate::error::{BookingError, Result};

/// The booking workflow.
///
/// `BookingService` owns its collaborators and runs each booking or
/// cancellation step by step, awaiting every call before moving on. A failing
/// step aborts the whole operation and its error is returned unchanged.
pub struct BookingService {
    rooms: RoomDirectoryBox,
    payments: PaymentProcessorBox,
    bookings: BookingStoreBox,
    notifier: NotifierBox,
}

impl BookingService {
    /// Creates a new `BookingService` instance.
    ///
    /// # Arguments
    ///
    /// * `rooms` - Directory of rooms and their availability.
    /// * `payments` - Processor used for prepaid bookings.
    /// * `bookings` - Store for booking records.
    /// * `notifier` - Sink for booking confirmations and cancellations.
    pub fn new(
        rooms: RoomDirectoryBox,
        payments: PaymentProcessorBox,
        bookings: BookingStoreBox,
        notifier: NotifierBox,
    ) -> Self {
        Self {
            rooms,
            payments,
            bookings,
            notifier,
        }
    }

    /// Price of the stay: nights x guests x nightly rate.
    pub fn calculate_price(&self, request: &BookingRequest) -> Price {
        NIGHTLY_RATE
            .times(request.stay.nights())
            .times(request.guests())
    }

    /// Total number of guests the currently free rooms can hold.
    ///
    /// Asks the room directory on every call. Summed as `u64` so any set of
    /// `u32` capacities fits.
    pub async fn available_place_count(&self) -> Result<u64> {
        let rooms = self.rooms.available_rooms().await?;
        Ok(rooms.iter().map(|room| u64::from(room.capacity)).sum())
    }

    /// Books a room for the request and returns the new booking id.
    pub async fn make_booking(&self, request: BookingRequest) -> Result<BookingId> {
        let record = self.place_booking(request).await?;
        Ok(record.booking_id)
    }

    /// Books a room for the request and returns the stored record.
    ///
    /// Prepaid requests are charged before anything is persisted, so a
    /// rejected payment leaves no booking behind. The room is taken before the
    /// record is saved and released again if saving fails.
    pub async fn place_booking(&self, mut request: BookingRequest) -> Result<BookingRecord> {
        let room_id = self.rooms.find_available_room_id(&request).await?;
        request.room_id = Some(room_id.clone());
        let price = self.calculate_price(&request);

        if request.prepaid {
            let payment_id = self.payments.pay(&request, price).await?;
            tracing::debug!(request = %request.id, payment = %payment_id, %price, "Payment collected");
        }

        self.rooms.book_room(&room_id).await?;
        let booking_id = match self.bookings.save(request.clone()).await {
            Ok(booking_id) => booking_id,
            Err(e) => {
                if let Err(release) = self.rooms.unbook_room(&room_id).await {
                    tracing::warn!(room = %room_id, error = %release, "Could not release room");
                }
                return Err(e);
            }
        };

        tracing::info!(
            request = %request.id,
            booking = %booking_id,
            room = %room_id,
            %price,
            "Booking created"
        );
        self.notifier
            .send(Notice::BookingConfirmed { booking_id })
            .await;

        Ok(BookingRecord {
            booking_id,
            request,
        })
    }

    /// Looks up a stored booking, failing with `NotFound` for unknown ids.
    pub async fn find_booking(&self, booking_id: &BookingId) -> Result<BookingRecord> {
        self.bookings
            .get(booking_id)
            .await?
            .ok_or_else(|| BookingError::NotFound(booking_id.to_string()))
    }

    /// Releases the booked room and removes the booking.
    pub async fn cancel_booking(&self, booking_id: &BookingId) -> Result<()> {
        let record = self.find_booking(booking_id).await?;

        if let Some(room_id) = &record.request.room_id {
            self.rooms.unbook_room(room_id).await?;
        }
        self.bookings.delete(booking_id).await?;

        tracing::info!(booking = %booking_id, room = ?record.request.room_id, "Booking cancelled");
        self.notifier
            .send(Notice::BookingCancelled {
                booking_id: *booking_id,
            })
            .await;

        Ok(())
    }
}
