//! Front-end library modules.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod render;
pub mod screens;

pub use config::ClientConfig;
pub use domain::{ApiGateway, Method, OutcomeSink, RequestOutcome};
pub use outbound::gateway::HttpRequestGateway;
