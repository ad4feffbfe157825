use crate::{ExperienceLevel, User, UserId};

#[test]
fn given_numeric_id_when_deserialize_then_numeric_user_id() {
    let json = r#"{
        "id": 42,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "is_active": true,
        "created_at": "2024-01-01T00:00:00"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(user.id, UserId::Numeric(42));
    assert_eq!(user.full_name(), "Ada Lovelace");
    assert!(user.skills.is_none());
    assert!(user.experience_level.is_none());
}

#[test]
fn given_uuid_id_and_profile_when_deserialize_then_all_fields_present() {
    let json = r#"{
        "id": "550e8400-e29b-41d4-a716-446655440000",
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "is_active": false,
        "created_at": "2024-01-01T00:00:00Z",
        "skills": ["rust", "sql", "rust"],
        "interests": ["compilers"],
        "experience_level": "advanced"
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert_eq!(
        user.id,
        UserId::Text("550e8400-e29b-41d4-a716-446655440000".into())
    );
    assert!(!user.is_active);
    assert_eq!(user.skills.as_ref().map(|s| s.len()), Some(2));
    assert_eq!(user.experience_level, Some(ExperienceLevel::Advanced));
}

#[test]
fn given_empty_experience_level_when_deserialize_then_none() {
    let json = r#"{
        "id": 1,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "experience_level": ""
    }"#;

    let user: User = serde_json::from_str(json).unwrap();

    assert!(user.experience_level.is_none());
    assert!(user.is_active);
}

#[test]
fn given_unknown_experience_level_when_deserialize_then_error() {
    let json = r#"{
        "id": 1,
        "email": "a@b.com",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "experience_level": "guru"
    }"#;

    assert!(serde_json::from_str::<User>(json).is_err());
}

#[test]
fn given_user_without_profile_when_serialize_then_profile_fields_omitted() {
    let user = User {
        id: UserId::Numeric(1),
        email: "a@b.com".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        is_active: true,
        created_at: String::new(),
        skills: None,
        interests: None,
        experience_level: None,
    };

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("skills"));
    assert!(!json.contains("experience_level"));
}
