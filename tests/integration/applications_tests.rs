//! Application registration tests.

use appid::ErrorKind;
use appid::management::ApplicationType;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{InMemoryFixture, WireFixture};

fn application_json(client_id: &str, name: &str, app_type: &str) -> serde_json::Value {
    serde_json::json!({
        "clientId": client_id,
        "tenantId": "abc123",
        "name": name,
        "oAuthServerUrl": "https://us-south.appid.cloud.ibm.com/oauth/v4/abc123",
        "profilesURL": "https://us-south.appid.cloud.ibm.com",
        "discoveryEndpoint": "https://us-south.appid.cloud.ibm.com/oauth/v4/abc123/.well-known/openid-configuration",
        "type": app_type
    })
}

#[tokio::test]
async fn test_create_sends_bearer_and_body() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/management/v4/abc123/applications"))
        .and(header("authorization", "Bearer test-iam-token"))
        .and(body_json(serde_json::json!({"name": "app1", "type": "singlepageapp"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(application_json("c-1", "app1", "singlepageapp")),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let app = fixture
        .tenant("abc123")
        .applications()
        .create("app1", ApplicationType::SinglePageApp)
        .await
        .unwrap();
    assert_eq!(app.name, "app1");
    assert_eq!(app.client_id, "c-1");
    assert!(app.secret.is_none());
}

#[tokio::test]
async fn test_list_tolerates_missing_envelope() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/applications"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&fixture.server)
        .await;

    let apps = fixture
        .tenant("abc123")
        .applications()
        .list()
        .await
        .unwrap();
    assert!(apps.is_empty());
}

#[tokio::test]
async fn test_unknown_tenant_is_not_found() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/missing/applications"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-request-id", "req-42")
                .set_body_json(serde_json::json!({"message": "tenant not found"})),
        )
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("missing")
        .applications()
        .list()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.request_id(), Some("req-42"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/applications/c1/scopes"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("abc123")
        .applications()
        .list_scopes("c1")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unavailable);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_scopes_and_roles_in_memory() {
    let fixture = InMemoryFixture::new();
    let tenant = fixture.tenant();
    let apps = tenant.applications();

    let app = apps
        .create("app1", ApplicationType::RegularWebApp)
        .await
        .unwrap();
    assert!(apps.list_scopes(&app.client_id).await.unwrap().is_empty());

    let stored = apps
        .update_scopes(&app.client_id, vec!["read".into(), "write".into()])
        .await
        .unwrap();
    assert_eq!(stored, vec!["read", "write"]);
    assert_eq!(apps.list_scopes(&app.client_id).await.unwrap(), stored);

    let role = tenant
        .roles()
        .create(&appid::management::RoleInput::new("writer"))
        .await
        .unwrap();
    apps.update_roles(&app.client_id, std::slice::from_ref(&role.id))
        .await
        .unwrap();
    let roles = apps.list_roles(&app.client_id).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].name, "writer");
}

#[tokio::test]
async fn test_empty_client_id_fails_locally() {
    let fixture = InMemoryFixture::new();
    let err = fixture
        .tenant()
        .applications()
        .get("")
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(fixture.fake.application_count(&fixture.tenant_id), 0);
}
