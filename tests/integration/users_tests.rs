//! Cloud Directory user tests.

use appid::ErrorKind;
use appid::management::{CreateUserRequest, PageOptions, UpdateUserRequest, UserName};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use crate::common::{InMemoryFixture, WireFixture};

#[tokio::test]
async fn test_walk_pages() {
    let fixture = InMemoryFixture::new();
    let users = fixture.tenant().cloud_directory_users();
    for i in 0..12 {
        users
            .create(&CreateUserRequest::new(format!("user{}@example.com", i), "pw"))
            .await
            .unwrap();
    }

    let mut start = 1;
    let mut seen = Vec::new();
    loop {
        let page = users
            .list(Some(PageOptions::new(start).with_count(5)))
            .await
            .unwrap();
        assert_eq!(page.total_results, 12);
        seen.extend(page.resources.iter().map(|u| u.id.clone()));
        match page.next_start_index(start) {
            Some(next) => start = next,
            None => break,
        }
    }
    assert_eq!(seen.len(), 12);
    seen.dedup();
    assert_eq!(seen.len(), 12);
}

#[tokio::test]
async fn test_update_user_in_memory() {
    let fixture = InMemoryFixture::new();
    let users = fixture.tenant().cloud_directory_users();

    let user = users
        .create(&CreateUserRequest::new("carol@example.com", "pw").with_display_name("Carol"))
        .await
        .unwrap();
    assert_eq!(user.primary_email(), Some("carol@example.com"));
    assert!(user.active);

    let mut request = UpdateUserRequest::from(&user);
    request.name = Some(UserName {
        given_name: "Carol".into(),
        family_name: "Jones".into(),
        formatted: "Carol Jones".into(),
    });
    request.active = Some(false);
    let updated = users.update(&user.id, &request).await.unwrap();
    assert_eq!(updated.name.family_name, "Jones");
    assert!(!updated.active);
    assert_eq!(updated.meta.created, user.meta.created);

    let err = users
        .update(&user.id, &UpdateUserRequest::default())
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_missing_user() {
    let fixture = InMemoryFixture::new();
    let err = fixture
        .tenant()
        .cloud_directory_users()
        .get("no-such-user")
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(err.message(), "user not found");
}

#[tokio::test]
async fn test_list_without_options_sends_no_query() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/cloud_directory/Users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalResults": 0,
            "itemsPerPage": 0,
            "Resources": []
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let page = fixture
        .tenant("abc123")
        .cloud_directory_users()
        .list(None)
        .await
        .unwrap();
    assert!(page.is_empty());

    let requests = fixture.server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_start_index_passed_through() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/cloud_directory/Users"))
        .and(query_param("startIndex", "0"))
        .and(query_param("count", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "totalResults": 25,
            "itemsPerPage": 10,
            "Resources": []
        })))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let page = fixture
        .tenant("abc123")
        .cloud_directory_users()
        .list(Some(PageOptions::new(0).with_count(10)))
        .await
        .unwrap();
    assert_eq!(page.total_results, 25);
}

#[tokio::test]
async fn test_malformed_list_is_invalid_response() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/cloud_directory/Users"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("abc123")
        .cloud_directory_users()
        .list(None)
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}
