//! Cloud Directory users (SCIM).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::client::Client;
use crate::management::resource::{Resource, ResourceClient};
use crate::management::types::{Page, PageOptions};

/// An email address of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserEmail {
    /// The address.
    pub value: String,
    /// Whether this is the primary address.
    #[serde(default)]
    pub primary: bool,
}

impl UserEmail {
    /// Creates a primary email address.
    pub fn primary(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            primary: true,
        }
    }
}

/// A phone number of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserPhone {
    /// The number.
    pub value: String,
    /// Kind of number, e.g. `mobile`.
    #[serde(rename = "type", default)]
    pub phone_type: String,
}

/// The structured name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserName {
    /// Given name.
    #[serde(default)]
    pub given_name: String,
    /// Family name.
    #[serde(default)]
    pub family_name: String,
    /// Full name for display.
    #[serde(default)]
    pub formatted: String,
}

/// SCIM resource metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserMeta {
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    /// Last modification time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
    /// Last sign-in time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,
    /// Resource URL.
    #[serde(default)]
    pub location: String,
    /// Always `User`.
    #[serde(default)]
    pub resource_type: String,
}

/// A Cloud Directory user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudDirectoryUser {
    /// User ID, assigned by the service.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub display_name: String,
    /// Whether the user may sign in.
    #[serde(default)]
    pub active: bool,
    /// Email addresses.
    #[serde(default)]
    pub emails: Vec<UserEmail>,
    /// Phone numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<UserPhone>,
    /// Structured name.
    #[serde(default)]
    pub name: UserName,
    /// SCIM schema URNs.
    #[serde(default)]
    pub schemas: Vec<String>,
    /// SCIM metadata.
    #[serde(default)]
    pub meta: UserMeta,
    /// Account status, e.g. `CONFIRMED` or `PENDING`.
    #[serde(default)]
    pub status: String,
}

impl CloudDirectoryUser {
    /// Returns the primary email address, or the first one if none is
    /// marked primary.
    pub fn primary_email(&self) -> Option<&str> {
        self.emails
            .iter()
            .find(|email| email.primary)
            .or_else(|| self.emails.first())
            .map(|email| email.value.as_str())
    }
}

/// Request body for creating a user.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    /// Email addresses; the first is primary.
    pub emails: Vec<UserEmail>,
    /// Initial password.
    pub password: String,
    /// User name, when the directory signs in by user name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Structured name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,
    /// Whether the user may sign in right away.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl CreateUserRequest {
    /// Creates a request with one primary email address.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            emails: vec![UserEmail::primary(email)],
            password: password.into(),
            user_name: None,
            display_name: None,
            name: None,
            active: None,
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }

    /// Sets the user name.
    #[must_use]
    pub fn with_user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    /// Sets the structured name.
    #[must_use]
    pub fn with_name(mut self, name: UserName) -> Self {
        self.name = Some(name);
        self
    }

    /// Sets whether the user is active.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}

impl std::fmt::Debug for CreateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUserRequest")
            .field("emails", &self.emails)
            .field("password", &"[REDACTED]")
            .field("user_name", &self.user_name)
            .field("display_name", &self.display_name)
            .field("name", &self.name)
            .field("active", &self.active)
            .finish()
    }
}

/// Request body for replacing a user.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    /// Email addresses.
    pub emails: Vec<UserEmail>,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Structured name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<UserName>,
    /// Whether the user may sign in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    /// Phone numbers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phone_numbers: Vec<UserPhone>,
}

impl From<&CloudDirectoryUser> for UpdateUserRequest {
    fn from(user: &CloudDirectoryUser) -> Self {
        Self {
            emails: user.emails.clone(),
            display_name: Some(user.display_name.clone()),
            name: Some(user.name.clone()),
            active: Some(user.active),
            phone_numbers: user.phone_numbers.clone(),
        }
    }
}

/// The `cloud_directory/Users` collection.
pub struct CloudDirectoryUsers;

impl Resource for CloudDirectoryUsers {
    type Record = CloudDirectoryUser;
    const COLLECTION: &'static [&'static str] = &["cloud_directory", "Users"];
    const LIST_KEY: &'static str = "Resources";
    const ID_LABEL: &'static str = "user id";
}

/// Client for the Cloud Directory users of one tenant.
///
/// Access via `client.tenant("tenant_id").cloud_directory_users()`.
///
/// ```rust,no_run
/// # async fn example(client: appid::Client) -> Result<(), appid::Error> {
/// use appid::management::PageOptions;
///
/// let users = client.tenant("abc123").cloud_directory_users();
/// let page = users.list(Some(PageOptions::new(1).with_count(10))).await?;
/// println!("{} of {} users", page.len(), page.total_results);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct CloudDirectoryUsersClient {
    resource: ResourceClient<CloudDirectoryUsers>,
}

impl CloudDirectoryUsersClient {
    /// Creates a new users client.
    pub(crate) fn new(client: Client, tenant_id: impl Into<String>) -> Self {
        Self {
            resource: ResourceClient::new(client, tenant_id),
        }
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        self.resource.tenant_id()
    }

    /// Lists users, one page at a time.
    ///
    /// Without options the server's default page is returned.
    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip(self),
        fields(tenant_id = %self.tenant_id())
    ))]
    pub async fn list(
        &self,
        options: Option<PageOptions>,
    ) -> Result<Page<CloudDirectoryUser>, Error> {
        let path = self.resource.collection_path()?;
        let query = options.map(|o| o.to_query()).unwrap_or_default();
        self.resource
            .client()
            .inner()
            .get_with_query(&path, query)
            .await
    }

    /// Gets a user by ID.
    pub async fn get(&self, user_id: &str) -> Result<CloudDirectoryUser, Error> {
        self.resource.get(user_id).await
    }

    /// Creates a user.
    pub async fn create(&self, request: &CreateUserRequest) -> Result<CloudDirectoryUser, Error> {
        self.resource.create(request).await
    }

    /// Replaces a user.
    pub async fn update(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<CloudDirectoryUser, Error> {
        self.resource.update(user_id, request).await
    }

    /// Deletes a user and their profile. Irreversible.
    pub async fn delete(&self, user_id: &str) -> Result<(), Error> {
        self.resource.delete(user_id).await
    }
}
