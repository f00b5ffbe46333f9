//! In-memory fake of the App ID management service.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::Error;
use crate::management::{
    API_PREFIX, Application, ApplicationType, CloudDirectoryUser, CreateApplicationRequest,
    CreateUserRequest, Page, Role, RoleInput, UpdateApplicationRequest, UpdateUserRequest,
    UserMeta,
};
use crate::transport::{Method, TransportClient, TransportRequest, TransportResponse};

const USER_SCHEMA: &str = "urn:ietf:params:scim:schemas:core:2.0:User";
const LIST_SCHEMA: &str = "urn:ietf:params:scim:api:messages:2.0:ListResponse";
const DEFAULT_PAGE_SIZE: usize = 100;

/// A [`TransportClient`] that implements applications, roles and Cloud
/// Directory users in memory.
///
/// Tenants spring into existence on first use. Identifiers are assigned
/// as random UUIDs, so two creations never collide. The fake speaks the
/// same wire format as the service, including error bodies, which makes
/// it suitable for exercising the full client stack without a network.
///
/// ```rust
/// use std::sync::Arc;
/// use appid::Client;
/// use appid::management::ApplicationType;
/// use appid::testing::InMemoryAppId;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let client = Client::with_transport("mock://appid", Arc::new(InMemoryAppId::new()));
/// let apps = client.tenant("abc123").applications();
///
/// let app = apps.create("app1", ApplicationType::SinglePageApp).await.unwrap();
/// assert!(app.secret.is_none());
/// assert_eq!(apps.get(&app.client_id).await.unwrap(), app);
/// # });
/// ```
#[derive(Clone, Default)]
pub struct InMemoryAppId {
    tenants: Arc<RwLock<HashMap<String, TenantState>>>,
}

#[derive(Default)]
struct TenantState {
    applications: Vec<StoredApplication>,
    roles: Vec<Role>,
    users: Vec<CloudDirectoryUser>,
}

struct StoredApplication {
    record: Application,
    scopes: Vec<String>,
    role_ids: Vec<String>,
}

#[derive(serde::Deserialize)]
struct ScopesInput {
    scopes: Vec<String>,
}

#[derive(serde::Deserialize)]
struct RoleIdsInput {
    ids: Vec<String>,
}

#[derive(serde::Deserialize)]
struct RolesInput {
    roles: RoleIdsInput,
}

/// Either half is a complete response; `Err` short-circuits with `?`.
type Reply = Result<TransportResponse, TransportResponse>;

impl InMemoryAppId {
    /// Creates an empty fake.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of applications stored for `tenant_id`.
    pub fn application_count(&self, tenant_id: &str) -> usize {
        self.tenants
            .read()
            .get(tenant_id)
            .map_or(0, |tenant| tenant.applications.len())
    }

    /// Returns the number of users stored for `tenant_id`.
    pub fn user_count(&self, tenant_id: &str) -> usize {
        self.tenants
            .read()
            .get(tenant_id)
            .map_or(0, |tenant| tenant.users.len())
    }

    /// Removes every tenant.
    pub fn clear(&self) {
        self.tenants.write().clear();
    }

    fn handle(&self, request: &TransportRequest) -> Reply {
        let segments = parse_path(&request.path)?;
        let segments: Vec<&str> = segments.iter().map(String::as_str).collect();

        let mut tenants = self.tenants.write();
        let (tenant_id, rest) = match segments.split_first() {
            Some((tenant_id, rest)) if !tenant_id.is_empty() => (*tenant_id, rest),
            _ => return Err(error(404, "tenant not found")),
        };
        let tenant = tenants.entry(tenant_id.to_string()).or_default();

        match (request.method, rest) {
            (Method::Get, ["applications"]) => {
                let apps: Vec<&Application> =
                    tenant.applications.iter().map(|a| &a.record).collect();
                respond(200, &serde_json::json!({ "applications": apps }))
            }
            (Method::Post, ["applications"]) => tenant.create_application(tenant_id, request),
            (Method::Get, ["applications", id]) => respond(200, &tenant.application(id)?.record),
            (Method::Put, ["applications", id]) => {
                let input: UpdateApplicationRequest = body(request)?;
                required("name", &input.name)?;
                let stored = tenant.application_mut(id)?;
                stored.record.name = input.name;
                respond(200, &stored.record)
            }
            (Method::Delete, ["applications", id]) => {
                tenant.application(id)?;
                tenant.applications.retain(|a| a.record.client_id != *id);
                Ok(TransportResponse::no_content())
            }
            (Method::Get, ["applications", id, "scopes"]) => {
                let scopes = &tenant.application(id)?.scopes;
                respond(200, &serde_json::json!({ "scopes": scopes }))
            }
            (Method::Put, ["applications", id, "scopes"]) => {
                let input: ScopesInput = body(request)?;
                let stored = tenant.application_mut(id)?;
                stored.scopes = input.scopes;
                respond(200, &serde_json::json!({ "scopes": stored.scopes }))
            }
            (Method::Get, ["applications", id, "roles"]) => {
                let roles = tenant.application_roles(id)?;
                respond(200, &serde_json::json!({ "roles": roles }))
            }
            (Method::Put, ["applications", id, "roles"]) => {
                let input: RolesInput = body(request)?;
                if let Some(missing) = input
                    .roles
                    .ids
                    .iter()
                    .find(|role_id| !tenant.roles.iter().any(|r| &r.id == *role_id))
                {
                    return Err(error(404, format!("role {} not found", missing)));
                }
                tenant.application_mut(id)?.role_ids = input.roles.ids;
                let roles = tenant.application_roles(id)?;
                respond(200, &serde_json::json!({ "roles": roles }))
            }
            (Method::Get, ["roles"]) => respond(200, &serde_json::json!({ "roles": tenant.roles })),
            (Method::Post, ["roles"]) => {
                let input: RoleInput = body(request)?;
                tenant.check_role_name(&input.name, None)?;
                let role = Role {
                    id: uuid::Uuid::new_v4().to_string(),
                    name: input.name,
                    description: input.description,
                    access: input.access,
                };
                tenant.roles.push(role.clone());
                respond(201, &role)
            }
            (Method::Get, ["roles", id]) => respond(200, tenant.role_mut(id)?),
            (Method::Put, ["roles", id]) => {
                let input: RoleInput = body(request)?;
                tenant.role_mut(id)?;
                tenant.check_role_name(&input.name, Some(id))?;
                let role = tenant.role_mut(id)?;
                role.name = input.name;
                role.description = input.description;
                role.access = input.access;
                respond(200, role)
            }
            (Method::Delete, ["roles", id]) => {
                tenant.role_mut(id)?;
                tenant.roles.retain(|r| r.id != *id);
                for app in &mut tenant.applications {
                    app.role_ids.retain(|role_id| role_id != id);
                }
                Ok(TransportResponse::no_content())
            }
            (Method::Get, ["cloud_directory", "Users"]) => tenant.list_users(request),
            (Method::Post, ["cloud_directory", "Users"]) => tenant.create_user(tenant_id, request),
            (Method::Get, ["cloud_directory", "Users", id]) => respond(200, tenant.user_mut(id)?),
            (Method::Put, ["cloud_directory", "Users", id]) => {
                let input: UpdateUserRequest = body(request)?;
                if input.emails.is_empty() {
                    return Err(error(400, "emails is required"));
                }
                let user = tenant.user_mut(id)?;
                let mut updated = user.clone();
                updated.emails = input.emails;
                updated.phone_numbers = input.phone_numbers;
                if let Some(display_name) = input.display_name {
                    updated.display_name = display_name;
                }
                if let Some(name) = input.name {
                    updated.name = name;
                }
                if let Some(active) = input.active {
                    updated.active = active;
                }
                if updated != *user {
                    updated.meta.last_modified = Some(Utc::now());
                    *user = updated;
                }
                respond(200, user)
            }
            (Method::Delete, ["cloud_directory", "Users", id]) => {
                tenant.user_mut(id)?;
                tenant.users.retain(|u| u.id != *id);
                Ok(TransportResponse::no_content())
            }
            (_, ["applications" | "roles", ..] | ["cloud_directory", "Users", ..]) => {
                Err(error(405, "method not allowed"))
            }
            _ => Err(error(404, "resource not found")),
        }
    }
}

impl TenantState {
    fn application(&self, client_id: &str) -> Result<&StoredApplication, TransportResponse> {
        self.applications
            .iter()
            .find(|a| a.record.client_id == client_id)
            .ok_or_else(|| error(404, "application not found"))
    }

    fn application_mut(
        &mut self,
        client_id: &str,
    ) -> Result<&mut StoredApplication, TransportResponse> {
        self.applications
            .iter_mut()
            .find(|a| a.record.client_id == client_id)
            .ok_or_else(|| error(404, "application not found"))
    }

    fn application_roles(&self, client_id: &str) -> Result<Vec<&Role>, TransportResponse> {
        let app = self.application(client_id)?;
        Ok(self
            .roles
            .iter()
            .filter(|role| app.role_ids.contains(&role.id))
            .collect())
    }

    fn create_application(&mut self, tenant_id: &str, request: &TransportRequest) -> Reply {
        let input: CreateApplicationRequest = body(request)?;
        required("name", &input.name)?;

        let oauth_server_url = format!("https://appid.local/oauth/v4/{}", tenant_id);
        let secret = match input.application_type {
            ApplicationType::SinglePageApp => None,
            _ => Some(uuid::Uuid::new_v4().simple().to_string()),
        };
        let record = Application {
            client_id: uuid::Uuid::new_v4().to_string(),
            tenant_id: tenant_id.to_string(),
            secret,
            name: input.name,
            discovery_endpoint: format!("{}/.well-known/openid-configuration", oauth_server_url),
            oauth_server_url,
            profiles_url: "https://appid.local".to_string(),
            application_type: input.application_type,
        };
        self.applications.push(StoredApplication {
            record: record.clone(),
            scopes: Vec::new(),
            role_ids: Vec::new(),
        });
        respond(200, &record)
    }

    fn role_mut(&mut self, role_id: &str) -> Result<&mut Role, TransportResponse> {
        self.roles
            .iter_mut()
            .find(|r| r.id == role_id)
            .ok_or_else(|| error(404, "role not found"))
    }

    fn check_role_name(&self, name: &str, except: Option<&str>) -> Result<(), TransportResponse> {
        required("name", name)?;
        let taken = self
            .roles
            .iter()
            .any(|r| r.name == name && Some(r.id.as_str()) != except);
        if taken {
            return Err(error(409, format!("role {} already exists", name)));
        }
        Ok(())
    }

    fn user_mut(&mut self, user_id: &str) -> Result<&mut CloudDirectoryUser, TransportResponse> {
        self.users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| error(404, "user not found"))
    }

    fn create_user(&mut self, tenant_id: &str, request: &TransportRequest) -> Reply {
        let input: CreateUserRequest = body(request)?;
        if input.emails.is_empty() {
            return Err(error(400, "emails is required"));
        }
        required("password", &input.password)?;

        let taken = input.emails.iter().any(|email| {
            self.users.iter().any(|user| {
                user.emails
                    .iter()
                    .any(|existing| existing.value.eq_ignore_ascii_case(&email.value))
            })
        });
        if taken {
            return Err(error(409, "user already exists"));
        }

        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now();
        let user = CloudDirectoryUser {
            display_name: input.display_name.unwrap_or_default(),
            active: input.active.unwrap_or(true),
            emails: input.emails,
            phone_numbers: Vec::new(),
            name: input.name.unwrap_or_default(),
            schemas: vec![USER_SCHEMA.to_string()],
            meta: UserMeta {
                created: Some(now),
                last_modified: Some(now),
                last_login: None,
                location: format!("/v1/{}/Users/{}", tenant_id, id),
                resource_type: "User".to_string(),
            },
            status: "PENDING".to_string(),
            id,
        };
        self.users.push(user.clone());
        respond(201, &user)
    }

    fn list_users(&self, request: &TransportRequest) -> Reply {
        let start = number(request, "startIndex")?.unwrap_or(1);
        let count = number(request, "count")?.map_or(DEFAULT_PAGE_SIZE, |c| c as usize);
        let filter = request
            .query_param("query")
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase);

        let matching: Vec<&CloudDirectoryUser> = self
            .users
            .iter()
            .filter(|user| filter.as_deref().is_none_or(|q| user_matches(user, q)))
            .collect();
        let resources: Vec<CloudDirectoryUser> = matching
            .iter()
            .skip(start.saturating_sub(1) as usize)
            .take(count)
            .map(|user| (*user).clone())
            .collect();

        let page = Page {
            total_results: matching.len() as u32,
            items_per_page: resources.len() as u32,
            start_index: Some(start.max(1)),
            schemas: vec![LIST_SCHEMA.to_string()],
            resources,
        };
        respond(200, &page)
    }
}

fn user_matches(user: &CloudDirectoryUser, query: &str) -> bool {
    user.display_name.to_lowercase().contains(query)
        || user
            .emails
            .iter()
            .any(|email| email.value.to_lowercase().contains(query))
}

fn parse_path(path: &str) -> Result<Vec<String>, TransportResponse> {
    let rest = path
        .strip_prefix(API_PREFIX)
        .and_then(|rest| rest.strip_prefix('/'))
        .ok_or_else(|| error(404, "resource not found"))?;
    rest.split('/')
        .map(|segment| {
            urlencoding::decode(segment)
                .map(|decoded| decoded.into_owned())
                .map_err(|_| error(400, "path segment is not valid UTF-8"))
        })
        .collect()
}

fn number(request: &TransportRequest, key: &str) -> Result<Option<u32>, TransportResponse> {
    request
        .query_param(key)
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|_| error(400, format!("{} must be a non-negative integer", key)))
        })
        .transpose()
}

fn body<T: DeserializeOwned>(request: &TransportRequest) -> Result<T, TransportResponse> {
    let value = request
        .body
        .clone()
        .ok_or_else(|| error(400, "request body is required"))?;
    serde_json::from_value(value).map_err(|e| error(400, format!("invalid request body: {}", e)))
}

fn required(field: &str, value: &str) -> Result<(), TransportResponse> {
    if value.trim().is_empty() {
        return Err(error(400, format!("{} is required", field)));
    }
    Ok(())
}

fn respond<T: Serialize + ?Sized>(status: u16, value: &T) -> Reply {
    serde_json::to_value(value)
        .map(|json| TransportResponse::json(status, &json))
        .map_err(|e| error(500, e.to_string()))
}

fn error(status: u16, message: impl Into<String>) -> TransportResponse {
    TransportResponse::json(status, &serde_json::json!({ "message": message.into() }))
}

impl std::fmt::Debug for InMemoryAppId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryAppId")
            .field("tenants", &self.tenants.read().len())
            .finish()
    }
}

#[async_trait::async_trait]
impl TransportClient for InMemoryAppId {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        let response = self.handle(&request).unwrap_or_else(|response| response);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            method = %request.method,
            path = %request.path,
            status = response.status,
            "in-memory request"
        );

        Ok(response)
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
