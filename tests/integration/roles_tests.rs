//! Role tests.

use appid::ErrorKind;
use appid::management::{RoleAccess, RoleInput};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{InMemoryFixture, WireFixture};

#[tokio::test]
async fn test_role_lifecycle() {
    let fixture = InMemoryFixture::new();
    let roles = fixture.tenant().roles();

    let created = roles
        .create(
            &RoleInput::new("admin")
                .with_description("Administrators")
                .with_access(RoleAccess::new("client-1", ["read", "write"])),
        )
        .await
        .unwrap();
    assert!(!created.id.is_empty());
    assert_eq!(roles.get(&created.id).await.unwrap(), created);

    let updated = roles
        .update(&created.id, &RoleInput::new("admins"))
        .await
        .unwrap();
    assert_eq!(updated.name, "admins");
    assert!(updated.description.is_none());
    assert!(updated.access.is_empty());

    assert_eq!(roles.list().await.unwrap(), vec![updated]);

    roles.delete(&created.id).await.unwrap();
    assert!(roles.get(&created.id).await.unwrap_err().is_not_found());
    assert!(roles.delete(&created.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_rename_to_taken_name_conflicts() {
    let fixture = InMemoryFixture::new();
    let roles = fixture.tenant().roles();

    roles.create(&RoleInput::new("admin")).await.unwrap();
    let viewer = roles.create(&RoleInput::new("viewer")).await.unwrap();

    let err = roles
        .update(&viewer.id, &RoleInput::new("admin"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Conflict);
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_validation_error_message() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("POST"))
        .and(path("/management/v4/abc123/roles"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "code": "INVALID_INPUT",
            "message": "name must not exceed 50 characters"
        })))
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("abc123")
        .roles()
        .create(&RoleInput::new("x".repeat(60)))
        .await
        .unwrap_err();
    assert!(err.is_validation());
    assert_eq!(err.message(), "name must not exceed 50 characters");
}

#[tokio::test]
async fn test_rate_limited_carries_retry_after() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/roles"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("abc123")
        .roles()
        .list()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::RateLimited);
    assert_eq!(err.retry_after(), Some(std::time::Duration::from_secs(7)));
}
