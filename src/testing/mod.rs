//! Test doubles for code built on the SDK.
//!
//! - [`MockTransport`]: scripted responses plus a request log
//! - [`InMemoryAppId`]: a working in-memory management service
//!
//! Both implement [`TransportClient`](crate::transport::TransportClient) and
//! plug into [`Client::with_transport`](crate::Client::with_transport), so the
//! whole client stack runs unchanged.
//!
//! ## MockTransport vs InMemoryAppId
//!
//! | Feature | MockTransport | InMemoryAppId |
//! |---------|---------------|---------------|
//! | Request inspection | ✓ | ✗ |
//! | Arbitrary statuses and failures | ✓ | ✗ |
//! | Stateful create/get/update/delete | ✗ | ✓ |
//! | Paging and query filtering | ✗ | ✓ |
//! | Best for | Unit tests | Integration tests |

mod in_memory;
mod mock;

pub use in_memory::InMemoryAppId;
pub use mock::MockTransport;
