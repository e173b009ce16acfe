//! HTTP gateway request shape and outcome mapping.

use hyper::Method;

use member_admin_client::{HttpGateway, MemberGateway};
use member_admin_core::config::AdminConfig;
use member_admin_core::error::AdminError;
use member_admin_core::model::{MemberRecord, Role};

use super::helpers::{closed_addr, spawn_stub, SLOW_RESPONSE_DELAY};

fn jane_record() -> MemberRecord {
    MemberRecord {
        name: "Jane Roe".to_string(),
        email: "jane@x.com".to_string(),
        phone_number: "5551234567".to_string(),
        role: Role::User,
    }
}

#[tokio::test]
async fn test_update_sends_json_put_with_bearer_token() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), Some("token-123".to_string())).unwrap();

    gateway
        .update("/admin/members/jane", &jane_record())
        .await
        .unwrap();

    let requests = stub.state.requests();
    assert_eq!(requests.len(), 1);
    let put = &requests[0];
    assert_eq!(put.method, Method::PUT);
    assert_eq!(put.path, "/admin/members/jane");
    assert_eq!(put.authorization.as_deref(), Some("Bearer token-123"));
    assert_eq!(put.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        put.json(),
        serde_json::json!({
            "name": "Jane Roe",
            "email": "jane@x.com",
            "phoneNumber": "5551234567",
            "role": "USER"
        })
    );
    assert!(put.json().get("password").is_none());
}

#[tokio::test]
async fn test_no_token_sends_no_authorization_header() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();

    gateway.delete("/admin/members/bob").await.unwrap();

    let requests = stub.state.requests();
    assert_eq!(requests[0].method, Method::DELETE);
    assert!(requests[0].authorization.is_none());
}

#[tokio::test]
async fn test_absolute_resource_urls_are_used_as_is() {
    let stub = spawn_stub().await;
    let config = AdminConfig {
        use_system_proxy: false,
        ..Default::default()
    };
    let gateway = HttpGateway::new(config, None).unwrap();

    let url = format!("http://{}/admin/members/jane", stub.addr);
    gateway.update(&url, &jane_record()).await.unwrap();
    assert_eq!(stub.state.requests()[0].path, "/admin/members/jane");
}

#[tokio::test]
async fn test_forbidden_maps_to_authorization_denied() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();

    let err = gateway
        .update("/admin/members/self", &jane_record())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AdminError::AuthorizationDenied("You cannot modify your own account".to_string())
    );

    let err = gateway.delete("/admin/members/self").await.unwrap_err();
    assert!(matches!(err, AdminError::AuthorizationDenied(_)));
}

#[tokio::test]
async fn test_server_error_maps_to_request_failure() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();

    let err = gateway
        .update("/admin/members/broken", &jane_record())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AdminError::RequestFailure {
            status: 500,
            message: "database unavailable".to_string()
        }
    );

    let err = gateway.delete("/admin/members/missing").await.unwrap_err();
    assert!(matches!(err, AdminError::RequestFailure { status: 404, .. }));
}

#[tokio::test]
async fn test_connection_refused_is_transport_failure() {
    let addr = closed_addr().await;
    let config = AdminConfig {
        base_url: format!("http://{}", addr),
        request_timeout_ms: Some(1000),
        use_system_proxy: false,
        ..Default::default()
    };
    let gateway = HttpGateway::new(config, None).unwrap();

    let err = gateway
        .update("/admin/members/jane", &jane_record())
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::TransportFailure(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_slow_backend_is_awaited_without_default_timeout() {
    let stub = spawn_stub().await;
    let config = AdminConfig {
        base_url: format!("http://{}", stub.addr),
        use_system_proxy: false,
        ..Default::default()
    };
    assert_eq!(config.request_timeout_ms, None);
    let gateway = HttpGateway::new(config, None).unwrap();

    let started = std::time::Instant::now();
    let result = gateway.update("/admin/members/slow", &jane_record()).await;
    assert_eq!(result, Ok(()));
    assert!(started.elapsed() >= SLOW_RESPONSE_DELAY);
    assert_eq!(stub.state.requests()[0].method, Method::PUT);
}

#[tokio::test]
async fn test_explicit_timeout_is_transport_failure() {
    let stub = spawn_stub().await;
    let config = AdminConfig {
        request_timeout_ms: Some(200),
        ..stub.config()
    };
    let gateway = HttpGateway::new(config, None).unwrap();

    let err = gateway
        .update("/admin/members/slow", &jane_record())
        .await
        .unwrap_err();
    assert!(matches!(err, AdminError::TransportFailure(_)));
}

#[tokio::test]
async fn test_list_and_fetch_parse_members() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();

    let members = gateway.list().await.unwrap();
    assert_eq!(members.len(), 3);
    assert_eq!(members[1].phone_number, None);
    assert_eq!(members[1].cells()[2], "N/A");
    assert_eq!(members[2].id, None);

    let jane = gateway.fetch("/admin/members/jane").await.unwrap();
    assert_eq!(jane.name.as_deref(), Some("Jane Doe"));

    let requests = stub.state.requests();
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/admin/members");
}
