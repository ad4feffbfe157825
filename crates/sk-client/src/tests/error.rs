use crate::ClientError;

#[test]
fn test_unauthorized_is_session_expired() {
    let err = ClientError::unauthorized("/auth/me");
    assert!(err.is_session_expired());
    assert!(err.to_string().contains("/auth/me"));
}

#[test]
fn test_api_error_keeps_status_and_message() {
    let err = ClientError::api_error(400, "HTTP_400".into(), "Email already registered".into());
    assert!(!err.is_session_expired());
    assert!(matches!(err, ClientError::Api { status: 400, .. }));
    assert!(err.to_string().contains("Email already registered"));
}

#[test]
fn test_json_error_is_not_session_expired() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ClientError = json_err.into();
    assert!(matches!(err, ClientError::Json { .. }));
    assert!(!err.is_session_expired());
}
