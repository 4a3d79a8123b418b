//! Client screen: `/api/clients` operations.

use serde_json::json;
use url::form_urlencoded;

use crate::domain::outcome::RequestOutcome;
use crate::domain::ports::{ApiGateway, Method};

/// Passport details nested in client payloads.
#[derive(Debug, Clone)]
pub struct Passport {
    pub series: String,
    pub number: String,
}

/// Field values for creating a client together with its passport.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub full_name: String,
    pub phone_number: String,
    /// Sent as an explicit JSON `null` when absent, matching the backend
    /// schema.
    pub email: Option<String>,
    pub passport: Passport,
}

/// Field values for updating a client's main data.
#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub full_name: String,
    pub phone_number: String,
    pub email: Option<String>,
}

/// Create a client with its passport.
pub async fn create(gateway: &dyn ApiGateway, input: &NewClient) -> RequestOutcome {
    let payload = json!({
        "fullName": input.full_name,
        "phoneNumber": input.phone_number,
        "email": input.email,
        "passport": {
            "series": input.passport.series,
            "number": input.passport.number,
        },
    });
    gateway
        .request(Method::Post, "/api/clients", Some(&payload))
        .await
}

/// Fetch one client by identifier.
pub async fn fetch(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Get, &format!("/api/clients/{id}"), None)
        .await
}

/// List every client.
pub async fn list(gateway: &dyn ApiGateway) -> RequestOutcome {
    gateway.request(Method::Get, "/api/clients", None).await
}

/// Search clients by a free-text term.
pub async fn search(gateway: &dyn ApiGateway, term: &str) -> RequestOutcome {
    let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
    gateway
        .request(
            Method::Get,
            &format!("/api/clients/search?searchTerm={encoded}"),
            None,
        )
        .await
}

/// Update a client's main data.
pub async fn update(gateway: &dyn ApiGateway, id: u64, input: &ClientUpdate) -> RequestOutcome {
    let payload = json!({
        "fullName": input.full_name,
        "phoneNumber": input.phone_number,
        "email": input.email,
    });
    gateway
        .request(Method::Put, &format!("/api/clients/{id}"), Some(&payload))
        .await
}

/// Replace a client's passport.
pub async fn replace_passport(
    gateway: &dyn ApiGateway,
    id: u64,
    passport: &Passport,
) -> RequestOutcome {
    let payload = json!({
        "series": passport.series,
        "number": passport.number,
    });
    gateway
        .request(
            Method::Put,
            &format!("/api/clients/{id}/passport"),
            Some(&payload),
        )
        .await
}

/// Delete a client.
pub async fn delete(gateway: &dyn ApiGateway, id: u64) -> RequestOutcome {
    gateway
        .request(Method::Delete, &format!("/api/clients/{id}"), None)
        .await
}
