//! Reservation screen: `/api/ticketReservations` operations.

use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value, json};
use thiserror::Error;

use crate::domain::outcome::RequestOutcome;
use crate::domain::ports::{ApiGateway, Method};

/// Booking lifecycle status, localized on the wire like [`EventStatus`].
///
/// [`EventStatus`]: crate::screens::events::EventStatus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    Confirmed,
    Canceled,
    PendingConfirmation,
}

impl BookingStatus {
    /// Wire value understood by the backend enum converter.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Confirmed => "подтверждено",
            Self::Canceled => "отменено",
            Self::PendingConfirmation => "ожидает подтверждения",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Canceled => "canceled",
            Self::PendingConfirmation => "pending",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when a booking status token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown booking status {token:?}; expected confirmed, canceled, or pending")]
pub struct UnknownBookingStatus {
    token: String,
}

impl FromStr for BookingStatus {
    type Err = UnknownBookingStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "canceled" => Ok(Self::Canceled),
            "pending" => Ok(Self::PendingConfirmation),
            _ => Err(UnknownBookingStatus { token: s.to_owned() }),
        }
    }
}

/// Field values for creating a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub client_id: u64,
    pub event_id: u64,
    pub number_of_tickets: u32,
    /// When absent the key is omitted entirely and the backend applies its
    /// default, which differs from sending `null`.
    pub booking_status: Option<BookingStatus>,
}

/// Create a reservation.
pub async fn create(gateway: &dyn ApiGateway, input: &NewReservation) -> RequestOutcome {
    let mut fields = Map::new();
    fields.insert("clientId".to_owned(), json!(input.client_id));
    fields.insert("eventId".to_owned(), json!(input.event_id));
    fields.insert("numberOfTickets".to_owned(), json!(input.number_of_tickets));
    if let Some(status) = input.booking_status {
        fields.insert("bookingStatus".to_owned(), json!(status.wire_value()));
    }
    let payload = Value::Object(fields);
    gateway
        .request(Method::Post, "/api/ticketReservations", Some(&payload))
        .await
}

/// Fetch one reservation by identifier.
pub async fn fetch(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Get, &format!("/api/ticketReservations/{id}"), None)
        .await
}

/// List every reservation.
pub async fn list(gateway: &dyn ApiGateway) -> RequestOutcome {
    gateway
        .request(Method::Get, "/api/ticketReservations", None)
        .await
}

/// Confirm a pending reservation.
pub async fn confirm(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(
            Method::Put,
            &format!("/api/ticketReservations/{id}/confirm"),
            None,
        )
        .await
}

/// Cancel a reservation.
pub async fn cancel(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(
            Method::Put,
            &format!("/api/ticketReservations/{id}/cancel"),
            None,
        )
        .await
}

/// Purge old canceled reservations.
pub async fn cleanup(gateway: &dyn ApiGateway) -> RequestOutcome {
    gateway
        .request(
            Method::Post,
            "/api/ticketReservations/cleanup/canceled-reservations",
            None,
        )
        .await
}
