//! Generic typed REST resource client.
//!
//! Applications, roles and Cloud Directory users share one CRUD shape:
//! a collection under the tenant, items addressed by ID, and a list
//! endpoint that wraps its records in a single-key envelope. That shape
//! lives here once; each resource only names its record type and path.

use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Error;
use crate::client::Client;
use crate::management::path::ManagementPath;

/// Describes one CRUD collection of the management API.
pub trait Resource: Send + Sync + 'static {
    /// The record type returned by the collection.
    type Record: DeserializeOwned + Send;

    /// Literal path segments of the collection below the tenant,
    /// e.g. `["cloud_directory", "Users"]`.
    const COLLECTION: &'static [&'static str];

    /// Key of the list envelope, e.g. `"applications"` in
    /// `{"applications": [...]}`.
    const LIST_KEY: &'static str;

    /// Human-readable name of an item ID, used in validation errors.
    const ID_LABEL: &'static str;
}

/// A tenant-bound client for one [`Resource`] collection.
pub struct ResourceClient<R: Resource> {
    client: Client,
    tenant_id: String,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> ResourceClient<R> {
    /// Creates a resource client bound to `tenant_id`.
    pub(crate) fn new(client: Client, tenant_id: impl Into<String>) -> Self {
        Self {
            client,
            tenant_id: tenant_id.into(),
            _resource: PhantomData,
        }
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    /// Returns the underlying client.
    pub(crate) fn client(&self) -> &Client {
        &self.client
    }

    /// Returns the collection path, e.g. `/management/v4/{tenant}/roles`.
    pub fn collection_path(&self) -> Result<ManagementPath, Error> {
        Ok(ManagementPath::tenant(&self.tenant_id)?.segments(R::COLLECTION))
    }

    /// Returns the path of one item in the collection.
    pub fn item_path(&self, id: &str) -> Result<ManagementPath, Error> {
        self.collection_path()?.id(R::ID_LABEL, id)
    }

    /// Lists every record in the collection.
    ///
    /// A response without the envelope key yields an empty list.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, resource = R::LIST_KEY)
    ))]
    pub async fn list(&self) -> Result<Vec<R::Record>, Error> {
        let path = self.collection_path()?;
        let envelope: serde_json::Value = self.client.inner().get(&path).await?;
        unwrap_list(envelope, R::LIST_KEY)
    }

    /// Gets one record by ID.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, resource = R::LIST_KEY, id = %id)
    ))]
    pub async fn get(&self, id: &str) -> Result<R::Record, Error> {
        let path = self.item_path(id)?;
        self.client.inner().get(&path).await
    }

    /// Creates a record and returns it with server-assigned fields.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, resource = R::LIST_KEY)
    ))]
    pub async fn create<B>(&self, body: &B) -> Result<R::Record, Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let path = self.collection_path()?;
        self.client.inner().post(&path, body).await
    }

    /// Replaces a record and returns the stored result.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, resource = R::LIST_KEY, id = %id)
    ))]
    pub async fn update<B>(&self, id: &str, body: &B) -> Result<R::Record, Error>
    where
        B: Serialize + Sync + ?Sized,
    {
        let path = self.item_path(id)?;
        self.client.inner().put(&path, body).await
    }

    /// Deletes a record. Irreversible.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, resource = R::LIST_KEY, id = %id)
    ))]
    pub async fn delete(&self, id: &str) -> Result<(), Error> {
        let path = self.item_path(id)?;
        self.client.inner().delete(&path).await
    }
}

impl<R: Resource> Clone for ResourceClient<R> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            tenant_id: self.tenant_id.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> fmt::Debug for ResourceClient<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("resource", &R::LIST_KEY)
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}

/// Takes the array under `key` out of a list envelope.
pub(crate) fn unwrap_list<T>(mut envelope: serde_json::Value, key: &str) -> Result<Vec<T>, Error>
where
    T: DeserializeOwned,
{
    match envelope.get_mut(key).map(serde_json::Value::take) {
        None | Some(serde_json::Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items).map_err(|e| {
            Error::invalid_response(format!("failed to parse {}: {}", key, e)).with_source(e)
        }),
    }
}
