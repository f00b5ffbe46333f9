//! Tenant configuration and identity provider tests.

use appid::ErrorKind;
use appid::management::{AccessTokenConfig, GenericIdp, GenericIdpConfig, TokenConfig};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::common::WireFixture;

#[tokio::test]
async fn test_token_config_round_trip() {
    let fixture = WireFixture::start().await.unwrap();
    let stored = serde_json::json!({
        "access": {"expires_in": 3600},
        "refresh": {"enabled": true, "expires_in": 2592000},
        "anonymousAccess": {"enabled": false}
    });

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/config/tokens"))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
        .mount(&fixture.server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/management/v4/abc123/config/tokens"))
        .and(body_json(stored))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let config = fixture.tenant("abc123").config();
    let tokens = config.get_token_config().await.unwrap();
    assert_eq!(
        tokens.access,
        Some(AccessTokenConfig {
            expires_in: Some(3600)
        })
    );
    assert_eq!(tokens.anonymous_access.as_ref().and_then(|a| a.enabled), Some(false));

    config.update_token_config(&tokens).await.unwrap();
}

#[tokio::test]
async fn test_partial_token_config_omits_absent_fields() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("PUT"))
        .and(path("/management/v4/abc123/config/tokens"))
        .and(body_json(serde_json::json!({"access": {"expires_in": 900}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&fixture.server)
        .await;

    let config = TokenConfig {
        access: Some(AccessTokenConfig {
            expires_in: Some(900),
        }),
        ..TokenConfig::default()
    };
    fixture
        .tenant("abc123")
        .config()
        .update_token_config(&config)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_saml_metadata_is_text() {
    let fixture = WireFixture::start().await.unwrap();
    let xml = r#"<?xml version="1.0"?><md:EntityDescriptor entityID="urn:ibm:cloud:appid"/>"#;

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/config/saml_metadata"))
        .and(header("accept", "*/*"))
        .respond_with(ResponseTemplate::new(200).set_body_string(xml))
        .mount(&fixture.server)
        .await;

    let metadata = fixture
        .tenant("abc123")
        .config()
        .get_saml_metadata()
        .await
        .unwrap();
    assert_eq!(metadata, xml);
}

#[tokio::test]
async fn test_email_template_language_is_encoded() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path(
            "/management/v4/abc123/config/cloud_directory/templates/WELCOME/pt%2Fbr",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "subject": "Bem-vindo",
            "base64_encoded_html_body": "PGgxPk9sw6E8L2gxPg=="
        })))
        .mount(&fixture.server)
        .await;

    let template = fixture
        .tenant("abc123")
        .config()
        .get_email_template("WELCOME", "pt/br")
        .await
        .unwrap();
    assert_eq!(template.subject, "Bem-vindo");
    assert_eq!(
        template.decoded_html_body().unwrap().as_deref(),
        Some("<h1>Olá</h1>")
    );
}

#[tokio::test]
async fn test_google_idp_set_returns_stored() {
    let fixture = WireFixture::start().await.unwrap();
    let idp = GenericIdp {
        is_active: true,
        config: Some(GenericIdpConfig {
            idp_id: "google-app-id".into(),
            secret: "google-secret".into(),
        }),
        redirect_url: None,
    };

    Mock::given(method("PUT"))
        .and(path("/management/v4/abc123/config/idps/google"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "isActive": true,
            "config": {"idpId": "google-app-id", "secret": "google-secret"},
            "redirectURL": "https://us-south.appid.cloud.ibm.com/oauth/v4/abc123/google/callback"
        })))
        .mount(&fixture.server)
        .await;

    let stored = fixture
        .tenant("abc123")
        .idps()
        .set_google_idp(&idp)
        .await
        .unwrap();
    assert!(stored.is_active);
    assert!(stored.redirect_url.is_some());
    assert_eq!(stored.config, idp.config);
}

#[tokio::test]
async fn test_forbidden_tenant() {
    let fixture = WireFixture::start().await.unwrap();

    Mock::given(method("GET"))
        .and(path("/management/v4/abc123/config/cloud_directory/mfa"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "error": "forbidden",
            "error_description": "insufficient permissions"
        })))
        .mount(&fixture.server)
        .await;

    let err = fixture
        .tenant("abc123")
        .config()
        .get_mfa_config()
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Forbidden);
    assert_eq!(err.message(), "insufficient permissions");
}
