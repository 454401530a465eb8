//! Remote Gateway Layer
//!
//! The seam between the store and the backend REST API. The trait keeps
//! the store testable with a scripted fake; the HTTP implementation owns
//! all response-shape leniency so only one canonical shape ever reaches
//! the store.

mod http;
mod remote;

pub use http::HttpGateway;
pub use remote::{GatewayConfig, RemoteGateway};
