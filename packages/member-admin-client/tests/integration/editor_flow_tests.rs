//! Editor flows over HTTP against the stub backend.

use hyper::Method;

use member_admin_client::{HttpGateway, MemberEditor};
use member_admin_core::error::AdminError;
use member_admin_core::model::{RowField, RowValues};
use member_admin_core::notification::{Dialog, NotificationKind, UPDATE_DENIED};
use member_admin_core::validation::ValidationPolicy;

use super::helpers::spawn_stub;

#[tokio::test]
async fn test_load_edit_save_delete() -> anyhow::Result<()> {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), Some("t".to_string()))?;
    let mut editor = MemberEditor::new(gateway, ValidationPolicy::default());

    let members = editor.load().await?;
    assert_eq!(members.len(), 3);
    assert_eq!(editor.table().len(), 2);

    editor.begin_edit("/admin/members/jane")?;
    editor.edit_field("/admin/members/jane", RowField::PhoneNumber, "")?;
    let saved = editor.save("/admin/members/jane").await?;
    assert_eq!(saved.phone_number, "");

    editor.request_delete("/admin/members/bob")?;
    assert!(editor.confirm_delete().await?);
    assert!(editor.table().get("/admin/members/bob").is_none());

    let methods: Vec<Method> = stub
        .state
        .requests()
        .into_iter()
        .map(|r| r.method)
        .collect();
    assert_eq!(methods, vec![Method::GET, Method::PUT, Method::DELETE]);
    Ok(())
}

#[tokio::test]
async fn test_invalid_draft_never_reaches_backend() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();
    let mut editor = MemberEditor::new(gateway, ValidationPolicy::default());
    editor.insert_row(
        "/admin/members/jane",
        RowValues::new("Jane Doe", "jane@x.com", "5551234567", "USER"),
    );

    editor.begin_edit("/admin/members/jane").unwrap();
    editor
        .edit_field("/admin/members/jane", RowField::Name, "Jane1")
        .unwrap();

    let err = editor.save("/admin/members/jane").await.unwrap_err();
    assert!(matches!(err, AdminError::Validation(_)));
    assert!(stub.state.requests().is_empty());
}

#[tokio::test]
async fn test_self_edit_is_reverted() {
    let stub = spawn_stub().await;
    let gateway = HttpGateway::new(stub.config(), None).unwrap();
    let mut editor = MemberEditor::new(gateway, ValidationPolicy::default());
    let original = RowValues::new("Admin Self", "me@x.com", "", "ADMIN");
    editor.insert_row("/admin/members/self", original.clone());

    editor.begin_edit("/admin/members/self").unwrap();
    editor
        .edit_field("/admin/members/self", RowField::Role, "USER")
        .unwrap();
    assert!(editor.save("/admin/members/self").await.is_err());

    let row = editor.table().get("/admin/members/self").unwrap();
    assert!(!row.is_editing());
    assert_eq!(row.values(), &original);
    match editor.surface().current() {
        Some(Dialog::Message(n)) => {
            assert_eq!(n.kind, NotificationKind::Error);
            assert_eq!(n.message, UPDATE_DENIED);
        }
        other => panic!("expected error message, got {:?}", other),
    }
}
