//! Bearer injection and authorization-failure handling

mod common;

use common::{NOW, expired_token, harness, harness_with_timeout, observed_harness, valid_token};
use reqwest::Method;
use serde_json::{Value, json};
use std::time::Duration;
use vera_core::Navigator;
use vera_core::testing::TokenBuilder;
use vera_http::{ClientError, ServiceConfig, TransportError, VeraClient};
use wiremock::matchers::{any, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_missing_token_never_sends() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    let request = h.client.gateway().request(Method::GET, &format!("{}/users", server.uri()));
    let err = h.client.gateway().execute::<Value>(request).await.unwrap_err();

    assert!(matches!(err, ClientError::Unauthenticated));
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let server = MockServer::start().await;
    let token = valid_token();

    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&token);

    let request = h.client.gateway().request(Method::GET, &format!("{}/users", server.uri()));
    let body: Value = h.client.gateway().execute(request).await.unwrap();
    assert_eq!(body["ok"], true);
}

#[tokio::test]
async fn test_refresh_during_request_reports_new_session() {
    let server = MockServer::start().await;
    let fresh = TokenBuilder::new().expires_at(NOW + 7200).build();

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": fresh })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(2)
        .mount(&server)
        .await;

    let (h, seen) = observed_harness(&server, "/user");
    h.client.session().persist_token(&valid_token());
    let held = h.client.load_session().await;
    assert_eq!(held.claims().unwrap().expires_at, NOW + 3600);

    h.client.identity().list_users().await.unwrap();
    assert!(seen.borrow().is_empty());

    h.clock.advance(3601);
    h.client.identity().list_users().await.unwrap();

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].token(), fresh);
    assert_eq!(seen[0].claims().expires_at, NOW + 7200);
    assert_eq!(h.stored_token().as_deref(), Some(fresh.as_str()));
}

#[tokio::test]
async fn test_expired_token_refreshed_before_request() {
    let server = MockServer::start().await;
    let fresh = TokenBuilder::new().expires_at(NOW + 900).build();

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "access_token": fresh })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .and(header("authorization", format!("Bearer {fresh}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&expired_token());

    let users = h.client.identity().list_users().await.unwrap();
    assert!(users.is_empty());
    assert_eq!(h.stored_token(), Some(fresh));
}

#[tokio::test]
async fn test_failed_refresh_clears_and_redirects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&expired_token());

    let err = h.client.identity().list_users().await.unwrap_err();

    assert!(matches!(err, ClientError::Refresh(_)));
    assert!(err.is_session_lost());
    assert_eq!(h.stored_token(), None);
    assert_eq!(h.navigator.visits(), vec!["/"]);
}

#[tokio::test]
async fn test_undecodable_token_clears_and_redirects() {
    let server = MockServer::start().await;
    let h = harness(&server, "/user");
    h.client.session().persist_token("garbage");

    let err = h.client.identity().list_users().await.unwrap_err();

    assert!(matches!(err, ClientError::Decode(_)));
    assert_eq!(h.stored_token(), None);
    assert_eq!(h.navigator.visits(), vec!["/"]);
}

#[tokio::test]
async fn test_unauthorized_clears_and_redirects_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401).set_body_string("token revoked"))
        .expect(2)
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&valid_token());

    let identity = h.client.identity();
    let (first, second) = futures::join!(identity.list_users(), identity.list_users());

    for result in [first, second] {
        match result.unwrap_err() {
            ClientError::Authorization { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "token revoked");
            }
            other => panic!("expected authorization error, got {other:?}"),
        }
    }
    assert_eq!(h.stored_token(), None);
    assert_eq!(h.navigator.visits(), vec!["/"]);
}

#[tokio::test]
async fn test_forbidden_is_authorization_failure() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/3"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&valid_token());

    let err = h.client.identity().delete_user(3).await.unwrap_err();

    assert_eq!(err.status(), Some(403));
    assert_eq!(h.stored_token(), None);
    assert_eq!(h.navigator.visits(), vec!["/"]);
}

#[tokio::test]
async fn test_redirect_rearms_after_new_session() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&valid_token());
    let _ = h.client.identity().list_users().await;
    assert_eq!(h.navigator.visits(), vec!["/"]);

    // Login callback lands on /app with a fresh token
    h.navigator.navigate("/app");
    assert!(h.client.accept_token(&valid_token()).is_authenticated());

    let _ = h.client.identity().list_users().await;
    assert_eq!(h.navigator.visits(), vec!["/", "/app", "/"]);
}

#[tokio::test]
async fn test_server_error_is_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(500).set_body_string("{\"detail\":\"boom\"}"))
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    let token = valid_token();
    h.client.session().persist_token(&token);

    let err = h.client.identity().create_user("a@example.com").await.unwrap_err();

    match err {
        ClientError::Request { status, ref body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "{\"detail\":\"boom\"}");
        }
        ref other => panic!("expected request error, got {other:?}"),
    }
    assert!(!err.is_session_lost());
    assert_eq!(h.stored_token(), Some(token));
    assert!(h.navigator.visits().is_empty());
}

#[tokio::test]
async fn test_unexpected_body_is_serialization_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "users": [] })))
        .mount(&server)
        .await;

    let h = harness(&server, "/user");
    h.client.session().persist_token(&valid_token());

    let err = h.client.identity().list_users().await.unwrap_err();
    assert!(matches!(err, ClientError::Serialization(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([]))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let h = harness_with_timeout(&server, "/user", Duration::from_millis(100));
    let token = valid_token();
    h.client.session().persist_token(&token);

    let err = h.client.identity().list_users().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(TransportError::Timeout(_))));
    assert_eq!(h.stored_token(), Some(token));
}

#[tokio::test]
async fn test_unreachable_service_is_network_error() {
    let uri = "http://127.0.0.1:1";
    let navigator = common::RecordingNavigator::at("/user");
    let client = VeraClient::builder()
        .config(ServiceConfig::new(uri, uri).unwrap())
        .navigator(navigator.clone())
        .build()
        .unwrap();
    client.session().persist_token(&valid_token());

    let err = client.drive().root_id().await.unwrap_err();

    assert!(matches!(err, ClientError::Network(TransportError::Http(_))));
    assert!(navigator.visits().is_empty());
}

#[tokio::test]
async fn test_builder_requires_config_and_navigator() {
    let result = VeraClient::builder().build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = VeraClient::builder()
        .config(ServiceConfig::new("http://localhost:1", "http://localhost:2").unwrap())
        .build();
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}
