//! Behavioral properties every resource client upholds.

use appid::management::{
    ApplicationType, CreateUserRequest, PageOptions, RoleAccess, RoleInput, UpdateUserRequest,
    encode_segment,
};
use appid::testing::MockTransport;
use appid::transport::Method;
use proptest::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{InMemoryFixture, WireFixture, mock_client};

#[tokio::test]
async fn test_create_then_get_round_trips() {
    let fixture = InMemoryFixture::new();
    let tenant = fixture.tenant();

    let app = tenant
        .applications()
        .create("app1", ApplicationType::RegularWebApp)
        .await
        .unwrap();
    assert_eq!(tenant.applications().get(&app.client_id).await.unwrap(), app);

    let role = tenant
        .roles()
        .create(&RoleInput::new("admin").with_access(RoleAccess::new(&app.client_id, ["read"])))
        .await
        .unwrap();
    assert_eq!(tenant.roles().get(&role.id).await.unwrap(), role);

    let user = tenant
        .cloud_directory_users()
        .create(&CreateUserRequest::new("dana@example.com", "pw").with_display_name("Dana"))
        .await
        .unwrap();
    assert_eq!(
        tenant.cloud_directory_users().get(&user.id).await.unwrap(),
        user
    );
}

#[tokio::test]
async fn test_delete_then_get_is_not_found() {
    let fixture = InMemoryFixture::new();
    let tenant = fixture.tenant();

    let app = tenant
        .applications()
        .create("app1", ApplicationType::RegularWebApp)
        .await
        .unwrap();
    tenant.applications().delete(&app.client_id).await.unwrap();
    assert!(
        tenant
            .applications()
            .get(&app.client_id)
            .await
            .unwrap_err()
            .is_not_found()
    );

    let role = tenant.roles().create(&RoleInput::new("admin")).await.unwrap();
    tenant.roles().delete(&role.id).await.unwrap();
    assert!(tenant.roles().get(&role.id).await.unwrap_err().is_not_found());

    let users = tenant.cloud_directory_users();
    let user = users
        .create(&CreateUserRequest::new("erin@example.com", "pw"))
        .await
        .unwrap();
    users.delete(&user.id).await.unwrap();
    assert!(users.get(&user.id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_no_op_update_is_idempotent() {
    let fixture = InMemoryFixture::new();
    let tenant = fixture.tenant();

    let apps = tenant.applications();
    let app = apps
        .create("app1", ApplicationType::SinglePageApp)
        .await
        .unwrap();
    let before = apps.get(&app.client_id).await.unwrap();
    apps.update(&app.client_id, before.name.clone()).await.unwrap();
    assert_eq!(apps.get(&app.client_id).await.unwrap(), before);

    let roles = tenant.roles();
    let role = roles
        .create(&RoleInput::new("admin").with_description("Administrators"))
        .await
        .unwrap();
    let before = roles.get(&role.id).await.unwrap();
    roles
        .update(&role.id, &RoleInput::from(&before))
        .await
        .unwrap();
    assert_eq!(roles.get(&role.id).await.unwrap(), before);

    let users = tenant.cloud_directory_users();
    let user = users
        .create(&CreateUserRequest::new("frank@example.com", "pw").with_display_name("Frank"))
        .await
        .unwrap();
    let before = users.get(&user.id).await.unwrap();
    users
        .update(&user.id, &UpdateUserRequest::from(&before))
        .await
        .unwrap();
    assert_eq!(users.get(&user.id).await.unwrap(), before);
}

#[tokio::test]
async fn test_first_page_of_twenty_five_users() {
    let fixture = InMemoryFixture::new();
    let users = fixture.client.tenant("abc123").cloud_directory_users();
    for i in 0..25 {
        users
            .create(&CreateUserRequest::new(format!("user{:02}@example.com", i), "pw"))
            .await
            .unwrap();
    }

    let page = users
        .list(Some(PageOptions::new(0).with_count(10)))
        .await
        .unwrap();
    assert_eq!(page.total_results, 25);
    assert!(page.items_per_page <= 10);
    assert!(page.resources.len() <= 10);
    assert!(page.has_next(0));
}

#[tokio::test]
async fn test_create_single_page_app() {
    let fixture = InMemoryFixture::new();
    let app = fixture
        .client
        .tenant("abc123")
        .applications()
        .create("app1", ApplicationType::SinglePageApp)
        .await
        .unwrap();
    assert_eq!(app.name, "app1");
    assert!(!app.client_id.is_empty());
    assert_eq!(app.application_type, ApplicationType::SinglePageApp);
}

#[tokio::test]
async fn test_reserved_characters_reach_server_encoded_once() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/roles/a%2Fb%3Fc%23d"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"id": "a/b?c#d", "name": "odd"})),
        )
        .expect(1)
        .mount(&fixture.server)
        .await;

    let role = fixture
        .tenant("abc123")
        .roles()
        .get("a/b?c#d")
        .await
        .unwrap();
    assert_eq!(role.id, "a/b?c#d");

    let requests = fixture.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
    assert_eq!(requests[0].url.fragment(), None);
}

#[tokio::test]
async fn test_dot_segment_ids_never_leave_their_resource() {
    let fixture = WireFixture::start().await.unwrap();
    let tenant = fixture.tenant("abc123");

    for id in [".", ".."] {
        let err = tenant.roles().delete(id).await.unwrap_err();
        assert!(err.is_validation());

        let err = tenant.applications().list_roles(id).await.unwrap_err();
        assert!(err.is_validation());

        let err = fixture
            .tenant(id)
            .roles()
            .list()
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }

    let requests = fixture.server.received_requests().await.unwrap();
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_dotted_ids_reach_server_verbatim() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("DELETE"))
        .and(path("/management/v4/abc123/roles/..."))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    fixture
        .tenant("abc123")
        .roles()
        .delete("...")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_reserved_characters_round_trip_in_memory() {
    let fixture = InMemoryFixture::new();
    let err = fixture
        .client
        .tenant("t/1?x#y")
        .roles()
        .get("r/1")
        .await
        .unwrap_err();
    assert_eq!(err.message(), "role not found");
}

proptest! {
    #[test]
    fn prop_ids_are_encoded_exactly_once(id in "[a-zA-Z0-9/?#% &=+._~-]{1,24}") {
        prop_assume!(id != "." && id != "..");
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let mock = MockTransport::new();
        let client = mock_client(&mock);

        // Unmatched routes answer 404; only the request path matters here.
        let _ = runtime.block_on(client.tenant("abc123").applications().get(&id));

        let request = mock.last_request().unwrap();
        prop_assert_eq!(request.method, Method::Get);
        let expected = format!("/management/v4/abc123/applications/{}", encode_segment(&id));
        prop_assert_eq!(&request.path, &expected);

        let last = request.path.rsplit('/').next().unwrap();
        prop_assert!(!last.contains(['?', '#', ' ']));
        prop_assert_eq!(urlencoding::decode(last).unwrap(), id.as_str());
    }
}
