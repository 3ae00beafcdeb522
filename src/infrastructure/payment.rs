use crate::domain::booking::BookingRequest;
use crate::domain::ports::{PaymentId, PaymentProcessor};
use crate::domain::price::Price;
use crate::error::{BookingError, Result};
use async_trait::async_trait;
use rust_decimal_macros::dec;
use uuid::Uuid;

/// Largest amount accepted from a small party.
pub const SMALL_PAYMENT_LIMIT: Price = Price::new(dec!(200.0));

/// Parties of at least this many guests are not limited.
pub const LARGE_PARTY: u32 = 3;

/// Stand-in payment gateway that only supports small payments.
///
/// Declines anything above `SMALL_PAYMENT_LIMIT` for parties smaller than
/// `LARGE_PARTY`, and approves everything else with a fresh payment id.
#[derive(Debug, Default, Clone)]
pub struct SmallPaymentProcessor;

impl SmallPaymentProcessor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PaymentProcessor for SmallPaymentProcessor {
    async fn pay(&self, request: &BookingRequest, amount: Price) -> Result<PaymentId> {
        if amount > SMALL_PAYMENT_LIMIT && request.guests() < LARGE_PARTY {
            tracing::warn!(request = %request.id, %amount, "Payment declined");
            return Err(BookingError::PaymentRejected(format!(
                "only payments up to {SMALL_PAYMENT_LIMIT} are supported for {} guest(s), got {amount}",
                request.guests()
            )));
        }
        Ok(Uuid::new_v4().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::booking::Stay;
    use chrono::NaiveDate;

    fn request(guests: u32) -> BookingRequest {
        let stay = Stay::new(
            NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2020, 1, 2).unwrap(),
        )
        .unwrap();
        BookingRequest::new("1", stay, guests, true).unwrap()
    }

    #[tokio::test]
    async fn test_small_payment_accepted() {
        let processor = SmallPaymentProcessor::new();
        let payment_id = processor
            .pay(&request(2), Price::new(dec!(200.0)))
            .await
            .unwrap();
        assert!(!payment_id.is_empty());
    }

    #[tokio::test]
    async fn test_large_payment_rejected_for_small_party() {
        let processor = SmallPaymentProcessor::new();
        let result = processor.pay(&request(2), Price::new(dec!(400.0))).await;
        assert!(matches!(result, Err(BookingError::PaymentRejected(_))));
    }

    #[tokio::test]
    async fn test_large_payment_accepted_for_large_party() {
        let processor = SmallPaymentProcessor::new();
        assert!(
            processor
                .pay(&request(3), Price::new(dec!(600.0)))
                .await
                .is_ok()
        );
    }
}
