//! Identity provider configuration (`config/idps/...`).

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::client::Client;
use crate::management::path::ManagementPath;

/// OAuth credentials of a social identity provider.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenericIdpConfig {
    /// App ID registered with the provider.
    #[serde(rename = "idpId")]
    pub idp_id: String,
    /// App secret registered with the provider.
    pub secret: String,
}

impl std::fmt::Debug for GenericIdpConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericIdpConfig")
            .field("idp_id", &self.idp_id)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Facebook or Google sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GenericIdp {
    /// Provider enabled.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Provider credentials.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<GenericIdpConfig>,
    /// Callback URL to register with the provider; set by the service.
    #[serde(rename = "redirectURL", default, skip_serializing_if = "Option::is_none")]
    pub redirect_url: Option<String>,
}

/// Requested SAML authentication context.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuthnContext {
    /// Authentication context class references.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub class: Vec<String>,
    /// `exact`, `minimum`, `maximum` or `better`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comparison: Option<String>,
}

/// SAML identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SamlConfig {
    /// Provider entity ID.
    #[serde(rename = "entityID")]
    pub entity_id: String,
    /// Name on the login widget.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Provider sign-in URL.
    pub sign_in_url: String,
    /// Provider signing certificates, PEM without armor.
    #[serde(default)]
    pub certificates: Vec<String>,
    /// Requested authentication context.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authn_context: Option<AuthnContext>,
    /// Sign authentication requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_request: Option<bool>,
    /// Require encrypted assertions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypt_response: Option<bool>,
    /// Send a scoping element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_scoping: Option<bool>,
}

/// SAML sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SamlIdp {
    /// Provider enabled.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Provider settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SamlConfig>,
}

/// How new Cloud Directory accounts are confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityConfirmation {
    /// `FULL`, `RESTRICTIVE` or `OFF`.
    pub access_mode: String,
    /// Confirmation methods, e.g. `email`.
    #[serde(default)]
    pub methods: Vec<String>,
}

/// Cloud Directory email interactions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudDirectoryInteractions {
    /// Send a welcome email.
    pub welcome_enabled: bool,
    /// Allow password resets.
    pub reset_password_enabled: bool,
    /// Notify users after a password reset.
    #[serde(rename = "resetPasswordNotificationEnable")]
    pub reset_password_notification_enabled: bool,
    /// Account confirmation settings.
    pub identity_confirmation: IdentityConfirmation,
}

/// Cloud Directory settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloudDirectoryConfig {
    /// Users may manage their own accounts.
    pub self_service_enabled: bool,
    /// Users may sign up. Absent leaves the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signup_enabled: Option<bool>,
    /// Email interactions.
    pub interactions: CloudDirectoryInteractions,
    /// Sign-in identifier, `email` or `userName`.
    #[serde(
        default,
        alias = "itentityField",
        skip_serializing_if = "Option::is_none"
    )]
    pub identity_field: Option<String>,
}

/// Cloud Directory sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CloudDirectoryIdp {
    /// Provider enabled.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Provider settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CloudDirectoryConfig>,
}

/// Custom identity provider settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomIdpConfig {
    /// PEM public key that verifies the provider's JWTs.
    #[serde(rename = "publicKey", default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<String>,
}

/// Custom (JWT) sign-in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomIdp {
    /// Provider enabled.
    #[serde(rename = "isActive")]
    pub is_active: bool,
    /// Provider settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<CustomIdpConfig>,
}

/// Client for the identity providers of one tenant.
///
/// Access via `client.tenant("tenant_id").idps()`.
#[derive(Clone)]
pub struct IdpsClient {
    client: Client,
    tenant_id: String,
}

impl IdpsClient {
    /// Creates a new identity providers client.
    pub(crate) fn new(client: Client, tenant_id: impl Into<String>) -> Self {
        Self {
            client,
            tenant_id: tenant_id.into(),
        }
    }

    /// Returns the tenant ID.
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }

    fn path(&self, provider: &'static str) -> Result<ManagementPath, Error> {
        Ok(ManagementPath::tenant(&self.tenant_id)?
            .segments(&["config", "idps"])
            .segment(provider))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), fields(tenant_id = %self.tenant_id)))]
    async fn get_idp<T: DeserializeOwned>(&self, provider: &'static str) -> Result<T, Error> {
        let path = self.path(provider)?;
        self.client.inner().get(&path).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, idp), fields(tenant_id = %self.tenant_id)))]
    async fn set_idp<T>(&self, provider: &'static str, idp: &T) -> Result<T, Error>
    where
        T: Serialize + DeserializeOwned + Sync,
    {
        let path = self.path(provider)?;
        self.client.inner().put(&path, idp).await
    }

    /// Gets the Facebook provider.
    pub async fn get_facebook_idp(&self) -> Result<GenericIdp, Error> {
        self.get_idp("facebook").await
    }

    /// Replaces the Facebook provider.
    pub async fn set_facebook_idp(&self, idp: &GenericIdp) -> Result<GenericIdp, Error> {
        self.set_idp("facebook", idp).await
    }

    /// Gets the Google provider.
    pub async fn get_google_idp(&self) -> Result<GenericIdp, Error> {
        self.get_idp("google").await
    }

    /// Replaces the Google provider.
    pub async fn set_google_idp(&self, idp: &GenericIdp) -> Result<GenericIdp, Error> {
        self.set_idp("google", idp).await
    }

    /// Gets the SAML provider.
    pub async fn get_saml_idp(&self) -> Result<SamlIdp, Error> {
        self.get_idp("saml").await
    }

    /// Replaces the SAML provider.
    pub async fn set_saml_idp(&self, idp: &SamlIdp) -> Result<SamlIdp, Error> {
        self.set_idp("saml", idp).await
    }

    /// Gets the Cloud Directory provider.
    pub async fn get_cloud_directory_idp(&self) -> Result<CloudDirectoryIdp, Error> {
        self.get_idp("cloud_directory").await
    }

    /// Replaces the Cloud Directory provider.
    pub async fn set_cloud_directory_idp(
        &self,
        idp: &CloudDirectoryIdp,
    ) -> Result<CloudDirectoryIdp, Error> {
        self.set_idp("cloud_directory", idp).await
    }

    /// Gets the custom provider.
    pub async fn get_custom_idp(&self) -> Result<CustomIdp, Error> {
        self.get_idp("custom").await
    }

    /// Replaces the custom provider.
    pub async fn set_custom_idp(&self, idp: &CustomIdp) -> Result<CustomIdp, Error> {
        self.set_idp("custom", idp).await
    }
}

impl std::fmt::Debug for IdpsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdpsClient")
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}
