//! Tenant configuration documents.
//!
//! Each document lives at a fixed URL under `/config` and is read with
//! `GET` and replaced with `PUT`.

use std::collections::BTreeMap;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::client::Client;
use crate::management::path::ManagementPath;
use crate::management::resource::unwrap_list;

// Token configuration

/// Access token lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AccessTokenConfig {
    /// Lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

/// Refresh or anonymous token settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TokenToggleConfig {
    /// Whether the token kind is issued. Absent leaves the server default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Lifetime in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<u32>,
}

/// A custom claim mapped into issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaim {
    /// Claim source, e.g. `attributes` or `saml`.
    pub source: String,
    /// Claim name at the source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_claim: Option<String>,
    /// Claim name in the token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_claim: Option<String>,
}

/// Token lifetimes and custom claims (`config/tokens`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Access token settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessTokenConfig>,
    /// Refresh token settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<TokenToggleConfig>,
    /// Anonymous token settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anonymous_access: Option<TokenToggleConfig>,
    /// Claims added to ID tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub id_token_claims: Vec<TokenClaim>,
    /// Claims added to access tokens.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub access_token_claims: Vec<TokenClaim>,
}

// Simple toggles and UI

/// Whether user profiles are stored (`config/users_profile`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersProfileConfig {
    /// Profiles enabled.
    pub is_active: bool,
}

/// Whether runtime activity is captured (`config/capture_runtime_activity`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditStatus {
    /// Audit capture enabled.
    pub is_active: bool,
}

/// Login widget texts (`config/ui/theme_text`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeText {
    /// Footnote below the login form.
    pub footnote: String,
    /// Browser tab title.
    pub tab_title: String,
}

/// Login widget colors (`config/ui/theme_color`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    /// Header color, e.g. `#EEF2F5`.
    pub header_color: String,
}

// Cloud Directory

/// A Cloud Directory email template.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailTemplate {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    /// HTML body, base64-encoded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base64_encoded_html_body: Option<String>,
    /// Plain-text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plain_text_body: Option<String>,
}

impl EmailTemplate {
    /// Returns the HTML body, decoding `base64_encoded_html_body` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidResponse`](crate::ErrorKind::InvalidResponse)
    /// if the encoded body is not valid base64 or UTF-8.
    pub fn decoded_html_body(&self) -> Result<Option<String>, Error> {
        match self.base64_encoded_html_body.as_deref() {
            Some(encoded) if !encoded.is_empty() => decode_base64(encoded).map(Some),
            _ => Ok(self.html_body.clone()),
        }
    }
}

/// A sender or recipient name and address.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SenderNameEmail {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

/// Sender settings for Cloud Directory emails.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SenderDetails {
    /// `From` header.
    pub from: SenderNameEmail,
    /// `Reply-To` header.
    #[serde(default)]
    pub reply_to: SenderNameEmail,
    /// Carbon copy recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cc: Option<SenderNameEmail>,
    /// Blind carbon copy recipient.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bcc: Option<SenderNameEmail>,
    /// Lifetime of emailed links, in seconds.
    #[serde(
        rename = "linkExpirationSec",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub link_expiration_sec: Option<u32>,
}

/// Password strength rule (`config/cloud_directory/password_regex`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PasswordRegex {
    /// The regular expression.
    #[serde(default)]
    pub regex: String,
    /// The regular expression, base64-encoded.
    #[serde(default)]
    pub base64_encoded_regex: String,
    /// Message shown when a password does not match.
    #[serde(default)]
    pub error_message: String,
}

impl PasswordRegex {
    /// Returns the regular expression, preferring the base64 form when set.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidResponse`](crate::ErrorKind::InvalidResponse)
    /// if the encoded regex is not valid base64 or UTF-8.
    pub fn decoded_regex(&self) -> Result<String, Error> {
        if self.base64_encoded_regex.is_empty() {
            Ok(self.regex.clone())
        } else {
            decode_base64(&self.base64_encoded_regex)
        }
    }
}

/// SendGrid mailer settings.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendgridConfig {
    /// SendGrid API key.
    pub api_key: String,
}

impl std::fmt::Debug for SendgridConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SendgridConfig")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Authorization sent to a custom mail dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomDispatcherAuth {
    /// `value`, `basic` or `none`.
    #[serde(rename = "type")]
    pub auth_type: String,
    /// Header value for `value` auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// User name for `basic` auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Password for `basic` auth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Custom mail dispatcher settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CustomDispatcherConfig {
    /// Webhook URL.
    pub url: String,
    /// Webhook authorization.
    pub authorization: CustomDispatcherAuth,
}

/// Email dispatcher selection (`config/cloud_directory/email_dispatcher`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EmailDispatcherConfig {
    /// `appid`, `sendgrid` or `custom`.
    pub provider: String,
    /// SendGrid settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sendgrid: Option<SendgridConfig>,
    /// Custom dispatcher settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomDispatcherConfig>,
}

/// An advanced password policy switch with its settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ApmPolicy<C> {
    /// Policy enabled.
    pub enabled: bool,
    /// Policy settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<C>,
}

/// Settings of the password reuse policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReuseSettings {
    /// Number of previous passwords that may not be reused.
    pub max_password_reuse: u32,
}

/// Settings of the password expiration policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordExpirationSettings {
    /// Days until a password expires.
    pub days_to_expire: u32,
}

/// Settings of the lockout policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockOutSettings {
    /// Lockout duration in seconds.
    pub lock_out_time_sec: u32,
    /// Failed attempts before lockout.
    pub num_of_attempts: u32,
}

/// Settings of the minimum password change interval policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinPasswordChangeSettings {
    /// Minimum hours between password changes.
    pub min_hours_to_change_password: u32,
}

/// Marker for policies that carry no settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoSettings {}

/// Advanced password management
/// (`config/cloud_directory/advanced_password_management`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApmConfig {
    /// Master switch.
    pub enabled: bool,
    /// Password reuse policy.
    #[serde(default)]
    pub password_reuse: ApmPolicy<PasswordReuseSettings>,
    /// Reject passwords containing the user name.
    #[serde(default)]
    pub prevent_password_with_username: ApmPolicy<NoSettings>,
    /// Password expiration policy.
    #[serde(default)]
    pub password_expiration: ApmPolicy<PasswordExpirationSettings>,
    /// Lockout policy.
    #[serde(default)]
    pub lock_out_policy: ApmPolicy<LockOutSettings>,
    /// Minimum password change interval policy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_password_change_interval: Option<ApmPolicy<MinPasswordChangeSettings>>,
}

// MFA, SSO, rate limits

/// SMS provider settings of an MFA channel.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SmsChannelConfig {
    /// Provider API key.
    pub key: String,
    /// Provider API secret.
    pub secret: String,
    /// Sender number.
    pub from: String,
    /// Provider name, e.g. `nexmo`.
    pub provider: String,
}

impl std::fmt::Debug for SmsChannelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsChannelConfig")
            .field("key", &self.key)
            .field("secret", &"[REDACTED]")
            .field("from", &self.from)
            .field("provider", &self.provider)
            .finish()
    }
}

/// An MFA delivery channel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaChannel {
    /// Channel enabled.
    pub is_active: bool,
    /// Channel type, `email` or `sms`.
    #[serde(rename = "type")]
    pub channel_type: String,
    /// Provider settings, for SMS channels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<SmsChannelConfig>,
}

/// Webhook settings of an MFA extension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MfaExtensionConfig {
    /// Webhook URL.
    pub url: String,
    /// Extra request headers.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

/// An MFA extension such as `premfa`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaExtension {
    /// Extension enabled.
    pub is_active: bool,
    /// Webhook settings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<MfaExtensionConfig>,
}

/// Whether MFA is enforced (`config/cloud_directory/mfa`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MfaConfig {
    /// MFA enabled.
    pub is_active: bool,
}

/// Cloud Directory single sign-on (`config/cloud_directory/sso`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoConfig {
    /// SSO enabled.
    pub is_active: bool,
    /// Session inactivity timeout.
    #[serde(default)]
    pub inactivity_timeout_seconds: u32,
    /// URIs allowed after logout.
    #[serde(default)]
    pub logout_redirect_uris: Vec<String>,
}

/// Sign-up and sign-in rate limits (`config/cloud_directory/rate_limit`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateLimit {
    /// Sign-ups allowed per minute.
    pub sign_up_limit_per_minute: u32,
    /// Sign-ins allowed per minute.
    pub sign_in_limit_per_minute: u32,
}

// Envelopes

#[derive(Serialize)]
struct RedirectUrisBody<'a> {
    #[serde(rename = "redirectUris")]
    redirect_uris: &'a [String],
}

#[derive(Deserialize)]
struct WidgetLogo {
    #[serde(default)]
    image: String,
}

#[derive(Deserialize)]
struct SenderDetailsEnvelope {
    #[serde(rename = "senderDetails")]
    sender_details: SenderDetails,
}

#[derive(Deserialize)]
struct ActionUrl {
    #[serde(rename = "actionUrl", default)]
    action_url: String,
}

#[derive(Deserialize)]
struct ApmEnvelope {
    #[serde(rename = "advancedPasswordManagement")]
    apm: ApmConfig,
}

/// Client for the configuration documents of one tenant.
///
/// Access via `client.tenant("tenant_id").config()`.
///
/// ```rust,no_run
/// # async fn example(client: appid::Client) -> Result<(), appid::Error> {
/// let config = client.tenant("abc123").config();
/// let mut tokens = config.get_token_config().await?;
/// tokens.access.get_or_insert_with(Default::default).expires_in = Some(3600);
/// config.update_token_config(&tokens).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct ConfigClient {
    client: Client,
    tenant_id: String,
}

impl ConfigClient {
    /// Creates a new config client.
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

    fn path(&self, segments: &[&'static str]) -> Result<ManagementPath, Error> {
        Ok(ManagementPath::tenant(&self.tenant_id)?
            .segment("config")
            .segments(segments))
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, document = %path)
    ))]
    async fn get_document<T: DeserializeOwned>(&self, path: ManagementPath) -> Result<T, Error> {
        self.client.inner().get(&path).await
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(
        skip_all,
        fields(tenant_id = %self.tenant_id, document = %path)
    ))]
    async fn put_document<B, T>(&self, path: ManagementPath, body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        self.client.inner().put(&path, body).await
    }

    /// Gets the token configuration.
    pub async fn get_token_config(&self) -> Result<TokenConfig, Error> {
        self.get_document(self.path(&["tokens"])?).await
    }

    /// Replaces the token configuration. The response body is not read.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(tenant_id = %self.tenant_id)))]
    pub async fn update_token_config(&self, config: &TokenConfig) -> Result<(), Error> {
        let path = self.path(&["tokens"])?;
        self.client.inner().put_discard(&path, config).await
    }

    /// Gets the allowed OAuth redirect URIs.
    pub async fn get_redirect_uris(&self) -> Result<Vec<String>, Error> {
        let envelope: serde_json::Value = self.get_document(self.path(&["redirect_uris"])?).await?;
        unwrap_list(envelope, "redirectUris")
    }

    /// Replaces the allowed OAuth redirect URIs.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(tenant_id = %self.tenant_id)))]
    pub async fn update_redirect_uris(&self, redirect_uris: &[String]) -> Result<(), Error> {
        let path = self.path(&["redirect_uris"])?;
        self.client
            .inner()
            .put_discard(&path, &RedirectUrisBody { redirect_uris })
            .await
    }

    /// Gets the user profile setting.
    pub async fn get_users_profile_config(&self) -> Result<UsersProfileConfig, Error> {
        self.get_document(self.path(&["users_profile"])?).await
    }

    /// Replaces the user profile setting.
    pub async fn update_users_profile_config(
        &self,
        config: &UsersProfileConfig,
    ) -> Result<UsersProfileConfig, Error> {
        self.put_document(self.path(&["users_profile"])?, config).await
    }

    /// Gets the login widget texts.
    pub async fn get_theme_text(&self) -> Result<ThemeText, Error> {
        self.get_document(self.path(&["ui", "theme_text"])?).await
    }

    /// Replaces the login widget texts.
    pub async fn update_theme_text(&self, text: &ThemeText) -> Result<ThemeText, Error> {
        self.put_document(self.path(&["ui", "theme_text"])?, text).await
    }

    /// Gets the login widget colors.
    pub async fn get_theme_colors(&self) -> Result<ThemeColors, Error> {
        self.get_document(self.path(&["ui", "theme_color"])?).await
    }

    /// Replaces the login widget colors.
    pub async fn update_theme_colors(&self, colors: &ThemeColors) -> Result<ThemeColors, Error> {
        self.put_document(self.path(&["ui", "theme_color"])?, colors).await
    }

    /// Gets the URI of the login widget logo.
    pub async fn get_widget_logo_uri(&self) -> Result<String, Error> {
        let logo: WidgetLogo = self.get_document(self.path(&["ui", "media"])?).await?;
        Ok(logo.image)
    }

    /// Gets the tenant's SAML service provider metadata XML.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(tenant_id = %self.tenant_id)))]
    pub async fn get_saml_metadata(&self) -> Result<String, Error> {
        let path = self.path(&["saml_metadata"])?;
        self.client.inner().get_text(&path).await
    }

    /// Gets an email template in one language, e.g. `("WELCOME", "en")`.
    pub async fn get_email_template(
        &self,
        template_name: &str,
        language: &str,
    ) -> Result<EmailTemplate, Error> {
        let path = self
            .path(&["cloud_directory", "templates"])?
            .id("template name", template_name)?
            .id("language", language)?;
        self.get_document(path).await
    }

    /// Gets the languages email templates are available in.
    pub async fn get_template_languages(&self) -> Result<Vec<String>, Error> {
        let envelope: serde_json::Value = self.get_document(self.path(&["ui", "languages"])?).await?;
        unwrap_list(envelope, "languages")
    }

    /// Gets the sender settings for Cloud Directory emails.
    pub async fn get_email_sender_details(&self) -> Result<SenderDetails, Error> {
        let envelope: SenderDetailsEnvelope = self
            .get_document(self.path(&["cloud_directory", "sender_details"])?)
            .await?;
        Ok(envelope.sender_details)
    }

    /// Gets the redirect URL for a Cloud Directory action such as
    /// `on_user_verified`.
    pub async fn get_action_url(&self, action: &str) -> Result<String, Error> {
        let path = self
            .path(&["cloud_directory", "action_url"])?
            .id("action", action)?;
        let envelope: ActionUrl = self.get_document(path).await?;
        Ok(envelope.action_url)
    }

    /// Gets the password strength rule.
    pub async fn get_password_regex(&self) -> Result<PasswordRegex, Error> {
        self.get_document(self.path(&["cloud_directory", "password_regex"])?)
            .await
    }

    /// Gets the email dispatcher selection.
    pub async fn get_email_dispatcher_config(&self) -> Result<EmailDispatcherConfig, Error> {
        self.get_document(self.path(&["cloud_directory", "email_dispatcher"])?)
            .await
    }

    /// Gets the advanced password management policies.
    pub async fn get_apm_config(&self) -> Result<ApmConfig, Error> {
        let envelope: ApmEnvelope = self
            .get_document(self.path(&["cloud_directory", "advanced_password_management"])?)
            .await?;
        Ok(envelope.apm)
    }

    /// Gets whether runtime activity is captured.
    pub async fn get_audit_status(&self) -> Result<AuditStatus, Error> {
        self.get_document(self.path(&["capture_runtime_activity"])?).await
    }

    /// Enables or disables runtime activity capture.
    pub async fn update_audit_status(&self, status: &AuditStatus) -> Result<AuditStatus, Error> {
        self.put_document(self.path(&["capture_runtime_activity"])?, status)
            .await
    }

    /// Lists the MFA delivery channels.
    pub async fn get_mfa_channels(&self) -> Result<Vec<MfaChannel>, Error> {
        let envelope: serde_json::Value = self
            .get_document(self.path(&["cloud_directory", "mfa", "channels"])?)
            .await?;
        unwrap_list(envelope, "channels")
    }

    /// Gets one MFA channel by provider, e.g. `email` or `nexmo`.
    pub async fn get_mfa_channel(&self, provider: &str) -> Result<MfaChannel, Error> {
        let path = self
            .path(&["cloud_directory", "mfa", "channels"])?
            .id("provider", provider)?;
        self.get_document(path).await
    }

    /// Gets one MFA extension by name, e.g. `premfa`.
    pub async fn get_mfa_extension(&self, name: &str) -> Result<MfaExtension, Error> {
        let path = self
            .path(&["cloud_directory", "mfa", "extensions"])?
            .id("extension name", name)?;
        self.get_document(path).await
    }

    /// Gets whether MFA is enforced.
    pub async fn get_mfa_config(&self) -> Result<MfaConfig, Error> {
        self.get_document(self.path(&["cloud_directory", "mfa"])?).await
    }

    /// Enables or disables MFA.
    pub async fn update_mfa_config(&self, config: &MfaConfig) -> Result<MfaConfig, Error> {
        self.put_document(self.path(&["cloud_directory", "mfa"])?, config)
            .await
    }

    /// Gets the Cloud Directory SSO settings.
    pub async fn get_sso_config(&self) -> Result<SsoConfig, Error> {
        self.get_document(self.path(&["cloud_directory", "sso"])?).await
    }

    /// Replaces the Cloud Directory SSO settings.
    pub async fn update_sso_config(&self, config: &SsoConfig) -> Result<SsoConfig, Error> {
        self.put_document(self.path(&["cloud_directory", "sso"])?, config)
            .await
    }

    /// Gets the sign-up and sign-in rate limits.
    pub async fn get_rate_limit(&self) -> Result<RateLimit, Error> {
        self.get_document(self.path(&["cloud_directory", "rate_limit"])?)
            .await
    }

    /// Replaces the sign-up and sign-in rate limits.
    pub async fn update_rate_limit(&self, limit: &RateLimit) -> Result<RateLimit, Error> {
        self.put_document(self.path(&["cloud_directory", "rate_limit"])?, limit)
            .await
    }
}

impl std::fmt::Debug for ConfigClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigClient")
            .field("tenant_id", &self.tenant_id)
            .finish_non_exhaustive()
    }
}

fn decode_base64(encoded: &str) -> Result<String, Error> {
    let bytes = BASE64.decode(encoded.trim()).map_err(|e| {
        Error::invalid_response(format!("invalid base64 content: {}", e)).with_source(e)
    })?;
    String::from_utf8(bytes).map_err(|e| {
        Error::invalid_response(format!("base64 content is not UTF-8: {}", e)).with_source(e)
    })
}
