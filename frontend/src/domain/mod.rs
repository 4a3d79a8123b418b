//! Domain core: the normalized request outcome and the ports screens use.
//!
//! Nothing in this module touches the network or the terminal. Outcomes are
//! plain values, ports describe the edges, and adapters live in `outbound`
//! and `render`.

pub mod outcome;
pub mod ports;

pub use outcome::{BackendErrorBody, FailureKind, Payload, RequestOutcome};
pub use ports::{ApiGateway, Method, OutcomeSink, SinkError};
