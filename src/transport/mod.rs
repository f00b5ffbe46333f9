//! Transport layer for App ID management API communication.
//!
//! Every resource client funnels its single request through a
//! [`TransportClient`]:
//!
//! - [`RestTransport`] (feature `rest`, default): reqwest over HTTPS
//! - [`MockTransport`](crate::testing::MockTransport): scripted responses
//! - [`InMemoryAppId`](crate::testing::InMemoryAppId): in-memory fake service
//!
//! Custom transports are plugged in with
//! [`Client::with_transport`](crate::Client::with_transport).

mod traits;

#[cfg(feature = "rest")]
mod rest;

pub use traits::{Method, ResponseFormat, TransportClient, TransportRequest, TransportResponse};

#[cfg(feature = "rest")]
pub use rest::RestTransport;
