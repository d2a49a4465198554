//! Simulated SAP connector.
//!
//! Stands in for a real RFC client: every call sleeps for a configurable
//! latency and then answers with fixed demo data shaped like the real BAPI
//! and module responses. Nothing here talks to a network.

pub mod connector;
pub mod document;
pub mod error;
pub mod mock;
pub mod rfc;

pub use connector::{FetchResponse, MockConnector, RfcResponse};
pub use error::ConnectorError;
pub use rfc::{RfcFunction, SapModule};
