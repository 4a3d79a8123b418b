//! Event screen: `/api/events` operations.

use std::fmt;
use std::str::FromStr;

use serde_json::json;
use thiserror::Error;

use crate::domain::outcome::RequestOutcome;
use crate::domain::ports::{ApiGateway, Method};

/// Event lifecycle status.
///
/// The backend serialises statuses as localized Russian strings, so the wire
/// value differs from the CLI token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Planned,
    Ongoing,
    Canceled,
    Completed,
}

impl EventStatus {
    /// Wire value understood by the backend enum converter.
    #[must_use]
    pub fn wire_value(self) -> &'static str {
        match self {
            Self::Planned => "запланировано",
            Self::Ongoing => "проходит",
            Self::Canceled => "отменено",
            Self::Completed => "завершено",
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Planned => "planned",
            Self::Ongoing => "ongoing",
            Self::Canceled => "canceled",
            Self::Completed => "completed",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Error returned when an event status token is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event status {token:?}; expected planned, ongoing, canceled, or completed")]
pub struct UnknownEventStatus {
    token: String,
}

impl FromStr for EventStatus {
    type Err = UnknownEventStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "planned" => Ok(Self::Planned),
            "ongoing" => Ok(Self::Ongoing),
            "canceled" => Ok(Self::Canceled),
            "completed" => Ok(Self::Completed),
            _ => Err(UnknownEventStatus { token: s.to_owned() }),
        }
    }
}

/// Field values for creating an event.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub name: String,
    /// ISO `yyyy-mm-dd`; validated by the backend, passed through verbatim.
    pub date: String,
    pub number_of_seats: u32,
    /// Decimal amount kept as a string so no precision is lost in transit.
    pub ticket_price: String,
    pub description: Option<String>,
}

/// Create an event.
pub async fn create(gateway: &dyn ApiGateway, input: &NewEvent) -> RequestOutcome {
    let payload = json!({
        "name": input.name,
        "date": input.date,
        "numberOfSeats": input.number_of_seats,
        "ticketPrice": input.ticket_price,
        "description": input.description,
    });
    gateway
        .request(Method::Post, "/api/events", Some(&payload))
        .await
}

/// Fetch one event by identifier.
pub async fn fetch(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Get, &format!("/api/events/{id}"), None)
        .await
}

/// List every event.
pub async fn list(gateway: &dyn ApiGateway) -> RequestOutcome {
    gateway.request(Method::Get, "/api/events", None).await
}

/// Update an event's status.
///
/// The body is the bare JSON string wire value, not an object.
pub async fn set_status(
    gateway: &dyn ApiGateway,
    id: u64,
    status: EventStatus,
) -> RequestOutcome {
    let payload = json!(status.wire_value());
    gateway
        .request(
            Method::Put,
            &format!("/api/events/{id}/status"),
            Some(&payload),
        )
        .await
}

/// Fetch aggregated reservation statistics for an event.
pub async fn statistics(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Get, &format!("/api/events/{id}/statistics"), None)
        .await
}

/// Delete an event.
pub async fn delete(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Delete, &format!("/api/events/{id}"), None)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screens::stub::StubGateway;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(EventStatus::Planned, "запланировано")]
    #[case(EventStatus::Ongoing, "проходит")]
    #[case(EventStatus::Canceled, "отменено")]
    #[case(EventStatus::Completed, "завершено")]
    fn wire_values_match_the_backend_converter(
        #[case] status: EventStatus,
        #[case] expected: &str,
    ) {
        assert_eq!(status.wire_value(), expected);
    }

    #[rstest]
    #[case("planned", EventStatus::Planned)]
    #[case("completed", EventStatus::Completed)]
    fn tokens_parse(#[case] token: &str, #[case] expected: EventStatus) {
        assert_eq!(token.parse::<EventStatus>(), Ok(expected));
        assert_eq!(expected.to_string(), token);
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        let err = "PLANNED".parse::<EventStatus>().expect_err("wire values are not tokens");
        assert!(err.to_string().contains("PLANNED"));
    }

    #[tokio::test]
    async fn create_serialises_camel_case() {
        let gateway = StubGateway::ok();
        let input = NewEvent {
            name: "Autumn gala".to_owned(),
            date: "2026-10-02".to_owned(),
            number_of_seats: 120,
            ticket_price: "1500.00".to_owned(),
            description: None,
        };
        create(&gateway, &input).await;

        let calls = gateway.calls();
        assert_eq!(calls[0].method, Method::Post);
        assert_eq!(calls[0].path, "/api/events");
        assert_eq!(
            calls[0].body,
            Some(json!({
                "name": "Autumn gala",
                "date": "2026-10-02",
                "numberOfSeats": 120,
                "ticketPrice": "1500.00",
                "description": null,
            }))
        );
    }

    #[tokio::test]
    async fn set_status_sends_a_bare_json_string() {
        let gateway = StubGateway::ok();
        set_status(&gateway, 5, EventStatus::Canceled).await;

        let calls = gateway.calls();
        assert_eq!(calls[0].method, Method::Put);
        assert_eq!(calls[0].path, "/api/events/5/status");
        assert_eq!(calls[0].body, Some(json!("отменено")));
    }

    #[tokio::test]
    async fn statistics_targets_the_nested_resource() {
        let gateway = StubGateway::ok();
        statistics(&gateway, 9).await;

        let calls = gateway.calls();
        assert_eq!(calls[0].method, Method::Get);
        assert_eq!(calls[0].path, "/api/events/9/statistics");
        assert_eq!(calls[0].body, None);
    }
}
