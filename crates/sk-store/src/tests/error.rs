use crate::StoreError;

use std::path::Path;

fn io_error() -> std::io::Error {
    std::io::Error::other("test")
}

#[test]
fn given_remove_error_when_remedy_then_tells_user_to_delete_file() {
    let err = StoreError::remove("/cfg/tokens.json", io_error());

    assert!(err.remedy().contains("delete the token file"));
    assert_eq!(err.path(), Some(Path::new("/cfg/tokens.json")));
}

#[test]
fn given_any_io_error_when_displayed_then_names_the_file() {
    let errors = vec![
        StoreError::read("/cfg/tokens.json", io_error()),
        StoreError::write("/cfg/tokens.json", io_error()),
        StoreError::quarantine("/cfg/tokens.json", io_error()),
    ];

    for err in errors {
        assert!(err.to_string().contains("/cfg/tokens.json"), "{err}");
        assert!(!err.remedy().is_empty());
    }
}

#[test]
fn given_serde_error_when_converted_then_encode_variant_without_path() {
    let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
    let store_err: StoreError = json_err.into();

    assert!(matches!(store_err, StoreError::Encode { .. }));
    assert!(store_err.path().is_none());
}
