//! Integration tests for the API client against a mock server.
//!
//! Verifies endpoint paths, payload field names, the raw Authorization
//! header, and the error classification for status and network failures.

use credvault_core::api::{ApiClient, ApiErrorKind, CredentialDraft};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn can_bind_localhost() -> bool {
    std::net::TcpListener::bind("127.0.0.1:0").is_ok()
}

#[tokio::test]
async fn test_login_returns_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({"username": "alice", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let token = client.login("alice", "pw").await.unwrap();
    assert_eq!(token, "abc");
}

#[tokio::test]
async fn test_login_rejection_is_status_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let err = client.login("alice", "wrong").await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status);
    assert_eq!(err.status_code(), Some(401));
    assert_eq!(err.message, "Invalid credentials");
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    // Bind then drop to get a port with nothing listening.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let client = ApiClient::new(format!("http://127.0.0.1:{port}"));
    let err = client.login("alice", "pw").await.unwrap_err();
    assert!(err.is_network());
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_register_returns_message() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/register"))
        .and(body_json(json!({"username": "bob", "password": "pw"})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"message": "User created"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let message = client.register("bob", "pw").await.unwrap();
    assert_eq!(message, "User created");
}

#[tokio::test]
async fn test_list_credentials_sends_raw_token() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/division-credentials"))
        .and(header("authorization", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "credentials": [
                {"system": "AD", "login": "svc-ad", "password": "s3cret"},
                {"system": "VPN", "login": "svc-vpn", "password": "hunter2"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let credentials = client.list_credentials("tok-123").await.unwrap();
    assert_eq!(credentials.len(), 2);
    assert_eq!(credentials[0].system, "AD");
    assert_eq!(credentials[1].login, "svc-vpn");
}

#[tokio::test]
async fn test_list_ous_maps_wire_ids() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ous"))
        .and(header("authorization", "tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ous": [
                {"_id": "ou-1", "name": "Finance"},
                {"_id": "ou-2", "name": "Engineering"}
            ]
        })))
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let ous = client.list_ous("tok-123").await.unwrap();
    assert_eq!(ous[0].id, "ou-1");
    assert_eq!(ous[1].name, "Engineering");
}

#[tokio::test]
async fn test_list_roles() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"roles": ["user", "admin"]})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let roles = client.list_roles("tok-123").await.unwrap();
    assert_eq!(roles, vec!["user".to_string(), "admin".to_string()]);
}

#[tokio::test]
async fn test_add_credential_returns_stored_record() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-credential"))
        .and(header("authorization", "tok-123"))
        .and(body_json(json!({
            "system": "AD",
            "login": "svc",
            "password": "pw",
            "divisionId": "div-1"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "credential": {"system": "AD", "login": "svc", "password": "pw"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let draft = CredentialDraft {
        system: "AD".to_string(),
        login: "svc".to_string(),
        password: "pw".to_string(),
        division_id: "div-1".to_string(),
    };
    let stored = client.add_credential("tok-123", &draft).await.unwrap();
    assert_eq!(stored.system, "AD");
    assert_eq!(stored.login, "svc");
}

#[tokio::test]
async fn test_add_credential_unknown_division_is_404() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/add-credential"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "Division not found"})),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    let draft = CredentialDraft {
        system: "AD".to_string(),
        login: "svc".to_string(),
        password: "pw".to_string(),
        division_id: "nope".to_string(),
    };
    let err = client.add_credential("tok-123", &draft).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.message, "Division not found");
}

#[tokio::test]
async fn test_update_own_credentials_sends_camel_case() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/update-credentials"))
        .and(header("authorization", "tok-123"))
        .and(body_json(json!({"newPassword": "n3w"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client
        .update_own_credentials("tok-123", "n3w")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_assign_division_body() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/assign-division"))
        .and(body_json(json!({"divisionId": "ou-2"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client.assign_division("tok-123", "ou-2").await.unwrap();
}

#[tokio::test]
async fn test_change_role_body_with_and_without_user() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/change-role"))
        .and(body_json(json!({"userId": "u-1", "newRole": "admin"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/change-role"))
        .and(body_json(json!({"userId": null, "newRole": "user"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(server.uri());
    client
        .change_role("tok-123", Some("u-1"), "admin")
        .await
        .unwrap();
    client.change_role("tok-123", None, "user").await.unwrap();
}

#[tokio::test]
async fn test_trailing_slash_in_base_url_is_stripped() {
    if !can_bind_localhost() {
        eprintln!("Skipping: cannot bind localhost TCP port in this environment.");
        return;
    }
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"roles": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(format!("{}/", server.uri()));
    let roles = client.list_roles("tok-123").await.unwrap();
    assert!(roles.is_empty());
}
