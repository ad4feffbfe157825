use crate::{CredentialPair, TokenResponse};

#[test]
fn test_debug_redacts_tokens() {
    let pair = CredentialPair::new("secret-access", "secret-refresh");
    let debug = format!("{pair:?}");

    assert!(!debug.contains("secret-access"));
    assert!(!debug.contains("secret-refresh"));
    assert!(debug.contains("redacted"));
}

#[test]
fn test_token_response_converts_into_pair() {
    let response: TokenResponse = serde_json::from_str(
        r#"{"access_token":"AT1","refresh_token":"RT1","token_type":"bearer"}"#,
    )
    .unwrap();

    let pair = CredentialPair::from(response);
    assert_eq!(pair, CredentialPair::new("AT1", "RT1"));
}

#[test]
fn test_token_response_without_token_type() {
    let response: TokenResponse =
        serde_json::from_str(r#"{"access_token":"AT1","refresh_token":"RT1"}"#).unwrap();
    assert!(response.token_type.is_none());
}
