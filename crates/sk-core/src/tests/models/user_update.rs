use crate::{ExperienceLevel, UserUpdate};

#[test]
fn test_default_update_is_empty_and_serializes_to_empty_object() {
    let update = UserUpdate::default();

    assert!(update.is_empty());
    assert_eq!(serde_json::to_string(&update).unwrap(), "{}");
}

#[test]
fn test_only_set_fields_are_serialized() {
    let update = UserUpdate {
        first_name: Some("Jane".into()),
        experience_level: Some(ExperienceLevel::Beginner),
        ..Default::default()
    };

    let value = serde_json::to_value(&update).unwrap();

    assert!(!update.is_empty());
    assert_eq!(value["first_name"], "Jane");
    assert_eq!(value["experience_level"], "beginner");
    assert!(value.get("last_name").is_none());
}
