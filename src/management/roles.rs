//! Roles and the application scopes they grant.

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::client::Client;
use crate::management::resource::{Resource, ResourceClient};

/// Scopes of one application granted by a role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleAccess {
    /// Client ID of the application.
    pub application_id: String,
    /// Granted scopes of that application.
    #[serde(default)]
    pub scopes: Vec<String>,
}

impl RoleAccess {
    /// Creates an access entry.
    pub fn new<I, S>(application_id: impl Into<String>, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            application_id: application_id.into(),
            scopes: scopes.into_iter().map(Into::into).collect(),
        }
    }
}

/// A role stored in a tenant.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Role {
    /// Role ID, assigned by the service.
    pub id: String,
    /// Role name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Granted application scopes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access: Vec<RoleAccess>,
}

/// Request body for creating or replacing a role.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoleInput {
    /// Role name.
    pub name: String,
    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Granted application scopes. Always sent, even when empty.
    #[serde(default)]
    pub access: Vec<RoleAccess>,
}

impl RoleInput {
    /// Creates a role input with no description and no access.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Adds an access entry.
    #[must_use]
    pub fn with_access(mut self, access: RoleAccess) -> Self {
        self.access.push(access);
        self
    }
}

impl From<&Role> for RoleInput {
    fn from(role: &Role) -> Self {
        Self {
            name: role.name.clone(),
            description: role.description.clone(),
            access: role.access.clone(),
        }
    }
}

/// The `roles` collection.
pub struct Roles;

impl Resource for Roles {
    type Record = Role;
    const COLLECTION: &'static [&'static str] = &["roles"];
    const LIST_KEY: &'static str = "roles";
    const ID_LABEL: &'static str = "role id";
}

/// Client for the roles of one tenant.
///
/// Access via `client.tenant("tenant_id").roles()`.
///
/// ```rust,no_run
/// # async fn example(client: appid::Client) -> Result<(), appid::Error> {
/// use appid::management::{RoleAccess, RoleInput};
///
/// let role = client
///     .tenant("abc123")
///     .roles()
///     .create(&RoleInput::new("admin").with_access(RoleAccess::new("client-1", ["write"])))
///     .await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct RolesClient {
    resource: ResourceClient<Roles>,
}

impl RolesClient {
    /// Creates a new roles client.
    pub(crate) fn new(client: Client, tenant_id: impl Into<String>) -> Self {
        Self {
            resource: ResourceClient::new(client, tenant_id),
        }
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        self.resource.tenant_id()
    }

    /// Lists all roles.
    pub async fn list(&self) -> Result<Vec<Role>, Error> {
        self.resource.list().await
    }

    /// Gets a role by ID.
    pub async fn get(&self, role_id: &str) -> Result<Role, Error> {
        self.resource.get(role_id).await
    }

    /// Creates a role.
    pub async fn create(&self, input: &RoleInput) -> Result<Role, Error> {
        self.resource.create(input).await
    }

    /// Replaces a role.
    pub async fn update(&self, role_id: &str, input: &RoleInput) -> Result<Role, Error> {
        self.resource.update(role_id, input).await
    }

    /// Deletes a role. Irreversible.
    pub async fn delete(&self, role_id: &str) -> Result<(), Error> {
        self.resource.delete(role_id).await
    }
}
