use crate::{CoreError, RegisterRequest};

fn request() -> RegisterRequest {
    RegisterRequest {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        email: "ada@example.com".into(),
        password: "pw".into(),
    }
}

#[test]
fn given_complete_request_when_validate_then_ok() {
    assert!(request().validate().is_ok());
}

#[test]
fn given_blank_first_name_when_validate_then_error() {
    let mut req = request();
    req.first_name = "   ".into();

    let err = req.validate().unwrap_err();
    assert!(matches!(err, CoreError::Validation { .. }));
    assert!(err.to_string().contains("first_name"));
}

#[test]
fn given_empty_password_when_validate_then_error() {
    let mut req = request();
    req.password.clear();

    assert!(req.validate().is_err());
}
