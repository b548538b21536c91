//! Identity and drive service calls

mod common;

use common::{harness, valid_token};
use serde_json::json;
use vera_core::{UrlDraft, UrlKind, UserDraft};
use vera_http::ClientError;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn signed_in(server: &MockServer, screen: &str) -> common::Harness {
    let h = harness(server, screen);
    h.client.session().persist_token(&valid_token());
    h
}

#[tokio::test]
async fn test_list_users_sorted_by_id() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 9,
                "email": "zed@example.com",
                "name": null,
                "picture": null,
                "last_login_at": null,
                "created_at": "2024-01-02T00:00:00Z",
                "updated_at": "2024-01-02T00:00:00Z"
            },
            {
                "id": 2,
                "email": "ada@example.com",
                "name": "Ada",
                "picture": "https://example.com/ada.png",
                "last_login_at": "2024-03-01T10:00:00Z",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-02-01T00:00:00Z"
            }
        ])))
        .mount(&server)
        .await;

    let h = signed_in(&server, "/user").await;
    let users = h.client.identity().list_users().await.unwrap();

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![2, 9]);
    assert_eq!(users[0].name.as_deref(), Some("Ada"));
    assert!(users[1].last_login_at.is_none());
}

#[tokio::test]
async fn test_new_user_is_posted_with_trimmed_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/users"))
        .and(body_json(json!({ "email": "new@example.com" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": 10 })))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/user").await;
    let draft = UserDraft {
        id: None,
        email: "  new@example.com ".to_string(),
    };

    h.client.identity().save_user(&draft).await.unwrap();
}

#[tokio::test]
async fn test_existing_user_is_patched() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/users/5"))
        .and(body_json(json!({ "email": "renamed@example.com" })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/user").await;
    let draft = UserDraft {
        id: Some(5),
        email: "renamed@example.com".to_string(),
    };

    h.client.identity().save_user(&draft).await.unwrap();
}

#[tokio::test]
async fn test_delete_user_accepts_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/users/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/user").await;
    h.client.identity().delete_user(5).await.unwrap();
}

#[tokio::test]
async fn test_login_url_points_at_identity_service() {
    let server = MockServer::start().await;
    let h = harness(&server, "/");

    assert_eq!(
        h.client.identity().login_url(),
        format!("{}/auth/login", server.uri())
    );
}

#[tokio::test]
async fn test_root_id_accepts_string_or_number() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/urls/root-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!("root-uuid")))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/urls/root-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(42)))
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url").await;
    let drive = h.client.drive();

    assert_eq!(drive.root_id().await.unwrap(), "root-uuid");
    assert_eq!(drive.root_id().await.unwrap(), "42");
}

#[tokio::test]
async fn test_root_id_rejects_other_shapes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/urls/root-id"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(null)))
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url").await;
    let err = h.client.drive().root_id().await.unwrap_err();
    assert!(matches!(err, ClientError::Request { status: 200, .. }));
}

#[tokio::test]
async fn test_get_node_with_parents_and_children() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/urls/docs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "docs",
            "name": "Docs",
            "type": "folder",
            "url": null,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
            "parent": [{
                "id": "root",
                "name": "root",
                "type": "folder",
                "url": null,
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": "2024-01-01T00:00:00Z"
            }],
            "children": [
                {
                    "id": "b",
                    "name": "rust book",
                    "type": "url",
                    "url": "https://doc.rust-lang.org/book/",
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                },
                {
                    "id": "a",
                    "name": "Archive",
                    "type": "folder",
                    "url": null,
                    "created_at": "2024-01-01T00:00:00Z",
                    "updated_at": "2024-01-01T00:00:00Z"
                }
            ]
        })))
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url/docs").await;
    let node = h.client.drive().get_node("docs").await.unwrap();

    let crumbs: Vec<String> = node.breadcrumbs().into_iter().map(|c| c.label).collect();
    assert_eq!(crumbs, vec!["Root", "Docs"]);
    let children: Vec<String> = node.sorted_children().into_iter().map(|c| c.id).collect();
    assert_eq!(children, vec!["a", "b"]);
}

#[tokio::test]
async fn test_new_node_is_posted() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/urls"))
        .and(body_json(json!({
            "id": "",
            "name": "Archive",
            "type": "folder",
            "url": null,
            "parent_id": "root"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url/root").await;
    let mut draft = UrlDraft::new_in("root");
    draft.name = " Archive ".to_string();
    draft.set_kind(UrlKind::Folder);

    h.client.drive().save_node(&draft).await.unwrap();
}

#[tokio::test]
async fn test_existing_node_is_put() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/urls/b"))
        .and(body_json(json!({
            "id": "b",
            "name": "rust book",
            "type": "url",
            "url": "https://doc.rust-lang.org/book/",
            "parent_id": "docs"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url/docs").await;
    let draft = UrlDraft {
        id: "b".to_string(),
        name: "rust book".to_string(),
        kind: UrlKind::Url,
        url: Some(" https://doc.rust-lang.org/book/ ".to_string()),
        parent_id: "docs".to_string(),
    };

    h.client.drive().save_node(&draft).await.unwrap();
}

#[tokio::test]
async fn test_delete_node() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/urls/b"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let h = signed_in(&server, "/url/docs").await;
    h.client.drive().delete_node("b").await.unwrap();
}
