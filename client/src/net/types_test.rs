use super::*;

#[test]
fn credentials_serialize_to_expected_payload() {
    let creds = Credentials::new("user@example.com", "hunter2");
    let value = serde_json::to_value(&creds).unwrap();
    assert_eq!(value, serde_json::json!({ "email": "user@example.com", "password": "hunter2" }));
}

#[test]
fn credentials_debug_redacts_password() {
    let creds = Credentials::new("user@example.com", "hunter2");
    let rendered = format!("{creds:?}");
    assert!(rendered.contains("user@example.com"));
    assert!(!rendered.contains("hunter2"));
    assert!(rendered.contains("<redacted>"));
}

#[test]
fn error_body_string_detail_is_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"bad password"}"#).unwrap();
    assert_eq!(body.message(), Some("bad password"));
}

#[test]
fn error_body_missing_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"status_code":500}"#).unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_list_detail_has_no_message() {
    let raw = r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"}]}"#;
    let body: ErrorBody = serde_json::from_str(raw).unwrap();
    assert!(body.detail.is_some());
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_blank_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":"  "}"#).unwrap();
    assert_eq!(body.message(), None);
}

#[test]
fn error_body_null_detail_has_no_message() {
    let body: ErrorBody = serde_json::from_str(r#"{"detail":null}"#).unwrap();
    assert_eq!(body.message(), None);
}
