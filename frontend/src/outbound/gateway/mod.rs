//! Gateway outbound adapter.
//!
//! This module provides the reqwest-backed implementation of the
//! `ApiGateway` port.

mod http_gateway;

pub use http_gateway::HttpRequestGateway;
