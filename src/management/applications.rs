//! Application registrations.
//!
//! Applications are the OAuth clients registered with a tenant. Each one
//! carries its scopes and the roles that grant them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Error;
use crate::client::Client;
use crate::management::resource::{Resource, ResourceClient, unwrap_list};
use crate::management::roles::Role;

/// An application registered with an App ID tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Application {
    /// OAuth client ID, assigned by the service.
    #[serde(rename = "clientId")]
    pub client_id: String,
    /// Owning tenant.
    #[serde(rename = "tenantId")]
    pub tenant_id: String,
    /// OAuth client secret; single-page apps have none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret: Option<String>,
    /// Display name.
    pub name: String,
    /// OAuth server URL of the tenant.
    #[serde(rename = "oAuthServerUrl")]
    pub oauth_server_url: String,
    /// User profiles endpoint.
    #[serde(rename = "profilesURL")]
    pub profiles_url: String,
    /// OpenID Connect discovery endpoint.
    #[serde(rename = "discoveryEndpoint")]
    pub discovery_endpoint: String,
    /// Application type.
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
}

/// The kind of application.
///
/// Unknown values sent by the service are kept in [`ApplicationType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ApplicationType {
    /// Server-side web application holding a client secret.
    #[default]
    RegularWebApp,
    /// Browser application using PKCE, no client secret.
    SinglePageApp,
    /// Any other type string.
    Other(String),
}

impl ApplicationType {
    /// Returns the wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            ApplicationType::RegularWebApp => "regularwebapp",
            ApplicationType::SinglePageApp => "singlepageapp",
            ApplicationType::Other(other) => other,
        }
    }
}

impl fmt::Display for ApplicationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ApplicationType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "regularwebapp" => ApplicationType::RegularWebApp,
            "singlepageapp" => ApplicationType::SinglePageApp,
            _ => ApplicationType::Other(value),
        }
    }
}

impl From<&str> for ApplicationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ApplicationType> for String {
    fn from(value: ApplicationType) -> Self {
        match value {
            ApplicationType::Other(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

/// Request body for creating an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    /// Display name.
    pub name: String,
    /// Application type.
    #[serde(rename = "type")]
    pub application_type: ApplicationType,
}

/// Request body for renaming an application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateApplicationRequest {
    /// New display name.
    pub name: String,
}

#[derive(Serialize, Deserialize)]
struct ScopesBody {
    scopes: Vec<String>,
}

#[derive(Serialize)]
struct RoleIds<'a> {
    ids: &'a [String],
}

#[derive(Serialize)]
struct UpdateRolesBody<'a> {
    roles: RoleIds<'a>,
}

/// The `applications` collection.
pub struct Applications;

impl Resource for Applications {
    type Record = Application;
    const COLLECTION: &'static [&'static str] = &["applications"];
    const LIST_KEY: &'static str = "applications";
    const ID_LABEL: &'static str = "client id";
}

/// Client for the applications of one tenant.
///
/// Access via `client.tenant("tenant_id").applications()`.
///
/// ## Example
///
/// ```rust,no_run
/// # async fn example(client: appid::Client) -> Result<(), appid::Error> {
/// use appid::management::ApplicationType;
///
/// let apps = client.tenant("abc123").applications();
/// let app = apps.create("app1", ApplicationType::SinglePageApp).await?;
/// apps.update_scopes(&app.client_id, vec!["read".into(), "write".into()]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ApplicationsClient {
    resource: ResourceClient<Applications>,
}

impl ApplicationsClient {
    /// Creates a new applications client.
    pub(crate) fn new(client: Client, tenant_id: impl Into<String>) -> Self {
        Self {
            resource: ResourceClient::new(client, tenant_id),
        }
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        self.resource.tenant_id()
    }

    /// Lists all applications of the tenant.
    pub async fn list(&self) -> Result<Vec<Application>, Error> {
        self.resource.list().await
    }

    /// Gets an application by client ID.
    pub async fn get(&self, client_id: &str) -> Result<Application, Error> {
        self.resource.get(client_id).await
    }

    /// Registers a new application.
    ///
    /// The returned record carries the server-assigned client ID.
    pub async fn create(
        &self,
        name: impl Into<String>,
        application_type: ApplicationType,
    ) -> Result<Application, Error> {
        let body = CreateApplicationRequest {
            name: name.into(),
            application_type,
        };
        self.resource.create(&body).await
    }

    /// Renames an application. The name is the only mutable field.
    pub async fn update(
        &self,
        client_id: &str,
        name: impl Into<String>,
    ) -> Result<Application, Error> {
        let body = UpdateApplicationRequest { name: name.into() };
        self.resource.update(client_id, &body).await
    }

    /// Deletes an application. Irreversible.
    pub async fn delete(&self, client_id: &str) -> Result<(), Error> {
        self.resource.delete(client_id).await
    }

    /// Lists the scopes an application defines.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(tenant_id = %self.tenant_id())))]
    pub async fn list_scopes(&self, client_id: &str) -> Result<Vec<String>, Error> {
        let path = self.resource.item_path(client_id)?.segment("scopes");
        let envelope: serde_json::Value = self.resource.client().inner().get(&path).await?;
        unwrap_list(envelope, "scopes")
    }

    /// Replaces the scopes of an application and returns the stored set.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, scopes), fields(tenant_id = %self.tenant_id())))]
    pub async fn update_scopes(
        &self,
        client_id: &str,
        scopes: Vec<String>,
    ) -> Result<Vec<String>, Error> {
        let path = self.resource.item_path(client_id)?.segment("scopes");
        let envelope: serde_json::Value = self
            .resource
            .client()
            .inner()
            .put(&path, &ScopesBody { scopes })
            .await?;
        unwrap_list(envelope, "scopes")
    }

    /// Lists the roles assigned to an application.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(tenant_id = %self.tenant_id())))]
    pub async fn list_roles(&self, client_id: &str) -> Result<Vec<Role>, Error> {
        let path = self.resource.item_path(client_id)?.segment("roles");
        let envelope: serde_json::Value = self.resource.client().inner().get(&path).await?;
        unwrap_list(envelope, "roles")
    }

    /// Replaces the roles assigned to an application.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, role_ids), fields(tenant_id = %self.tenant_id())))]
    pub async fn update_roles(
        &self,
        client_id: &str,
        role_ids: &[String],
    ) -> Result<Vec<Role>, Error> {
        let path = self.resource.item_path(client_id)?.segment("roles");
        let body = UpdateRolesBody {
            roles: RoleIds { ids: role_ids },
        };
        let envelope: serde_json::Value =
            self.resource.client().inner().put(&path, &body).await?;
        unwrap_list(envelope, "roles")
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn sample() -> serde_json::Value {
        serde_json::json!({
            "clientId": "c1",
            "tenantId": "t1",
            "secret": "s3cret",
            "name": "app1",
            "oAuthServerUrl": "https://us-south.appid.cloud.ibm.com/oauth/v4/t1",
            "profilesURL": "https://us-south.appid.cloud.ibm.com",
            "discoveryEndpoint": "https://us-south.appid.cloud.ibm.com/oauth/v4/t1/.well-known/openid-configuration",
            "type": "regularwebapp"
        })
    }

    #[test]
    fn test_application_deserialize() {
        let app: Application = serde_json::from_value(sample()).unwrap();
        assert_eq!(app.client_id, "c1");
        assert_eq!(app.secret.as_deref(), Some("s3cret"));
        assert_eq!(app.application_type, ApplicationType::RegularWebApp);
    }

    #[test]
    fn test_application_without_secret() {
        let mut json = sample();
        json.as_object_mut().unwrap().remove("secret");
        json["type"] = "singlepageapp".into();
        let app: Application = serde_json::from_value(json).unwrap();
        assert!(app.secret.is_none());
        assert_eq!(app.application_type, ApplicationType::SinglePageApp);

        let out = serde_json::to_value(&app).unwrap();
        assert!(out.get("secret").is_none());
        assert_eq!(out["type"], "singlepageapp");
    }

    #[test_case("regularwebapp", ApplicationType::RegularWebApp ; "regular")]
    #[test_case("singlepageapp", ApplicationType::SinglePageApp ; "single page")]
    #[test_case("nativeapp", ApplicationType::Other("nativeapp".into()) ; "other")]
    fn test_application_type_wire(raw: &str, expected: ApplicationType) {
        let parsed: ApplicationType = serde_json::from_value(raw.into()).unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(serde_json::to_value(&parsed).unwrap(), raw);
        assert_eq!(parsed.to_string(), raw);
    }

    #[test]
    fn test_update_roles_body_shape() {
        let ids = vec!["r1".to_string(), "r2".to_string()];
        let body = UpdateRolesBody {
            roles: RoleIds { ids: &ids },
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"roles": {"ids": ["r1", "r2"]}})
        );
    }

    #[test]
    fn test_create_body_shape() {
        let body = CreateApplicationRequest {
            name: "app1".into(),
            application_type: ApplicationType::SinglePageApp,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({"name": "app1", "type": "singlepageapp"})
        );
    }
}
