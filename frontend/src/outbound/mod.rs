//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! Adapters are thin translators between domain types and transport
//! representations. They contain no rendering and no payload construction.

pub mod gateway;
