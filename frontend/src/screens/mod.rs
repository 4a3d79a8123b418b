//! Domain screens: thin callers over the gateway.
//!
//! Each operation builds a path and an optional JSON payload from explicit
//! input values, issues one gateway call, and hands the outcome back for the
//! caller to present. Screens never inspect entity fields in responses;
//! domain entities flow through as opaque JSON.

pub mod clients;
pub mod events;
pub mod reservations;

#[cfg(test)]
pub(crate) mod stub;
