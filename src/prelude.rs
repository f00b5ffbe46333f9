//! Prelude module for convenient imports.
//!
//! ```rust
//! use appid::prelude::*;
//! ```
//!
//! This provides access to:
//! - Core client types
//! - Error types
//! - Authentication types
//! - The management records used most often

pub use crate::{
    auth::{BearerCredentialsConfig, Credentials, CredentialsProvider},
    client::{Client, ClientBuilder, TenantClient},
    config::{EnvConfig, TlsConfig},
    error::{Error, ErrorKind, Result},
    management::{
        Application, ApplicationType, CloudDirectoryUser, CreateUserRequest, Page, PageOptions,
        Role, RoleAccess, RoleInput, UpdateUserRequest,
    },
};
