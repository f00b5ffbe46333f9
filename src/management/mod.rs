//! Typed clients for the App ID management API.
//!
//! Every resource lives under `/management/v4/{tenantId}`. Clients are
//! obtained from a [`TenantClient`](crate::TenantClient):
//!
//! ```rust,no_run
//! # async fn example(client: appid::Client) -> Result<(), appid::Error> {
//! let tenant = client.tenant("abc123");
//!
//! let apps = tenant.applications().list().await?;
//! let roles = tenant.roles().list().await?;
//! let tokens = tenant.config().get_token_config().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Identifiers passed to any operation are percent-encoded exactly once
//! by [`ManagementPath`]. An empty identifier fails locally with a
//! validation error before any request is sent.

mod applications;
mod config;
mod idps;
mod path;
mod resource;
mod roles;
mod types;
mod users;

pub use applications::{
    Application, ApplicationType, Applications, ApplicationsClient, CreateApplicationRequest,
    UpdateApplicationRequest,
};
pub use config::{
    AccessTokenConfig, ApmConfig, ApmPolicy, AuditStatus, ConfigClient, CustomDispatcherAuth,
    CustomDispatcherConfig, EmailDispatcherConfig, EmailTemplate, LockOutSettings, MfaChannel,
    MfaConfig, MfaExtension, MfaExtensionConfig, MinPasswordChangeSettings, NoSettings,
    PasswordExpirationSettings, PasswordRegex, PasswordReuseSettings, RateLimit, SenderDetails,
    SenderNameEmail, SendgridConfig, SmsChannelConfig, SsoConfig, ThemeColors, ThemeText,
    TokenClaim, TokenConfig, TokenToggleConfig, UsersProfileConfig,
};
pub use idps::{
    AuthnContext, CloudDirectoryConfig, CloudDirectoryIdp, CloudDirectoryInteractions,
    CustomIdp, CustomIdpConfig, GenericIdp, GenericIdpConfig, IdentityConfirmation, IdpsClient,
    SamlConfig, SamlIdp,
};
pub use path::{API_PREFIX, ManagementPath, encode_segment};
pub use resource::{Resource, ResourceClient};
pub use roles::{Role, RoleAccess, RoleInput, Roles, RolesClient};
pub use types::{Page, PageOptions};
pub use users::{
    CloudDirectoryUser, CloudDirectoryUsers, CloudDirectoryUsersClient, CreateUserRequest,
    UpdateUserRequest, UserEmail, UserMeta, UserName, UserPhone,
};
