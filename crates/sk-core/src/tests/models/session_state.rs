use crate::{SessionState, User, UserId};

fn user() -> User {
    User {
        id: UserId::Numeric(7),
        email: "a@b.com".into(),
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        is_active: true,
        created_at: "2024-01-01T00:00:00Z".into(),
        skills: None,
        interests: None,
        experience_level: None,
    }
}

#[test]
fn test_default_is_unauthenticated() {
    assert_eq!(SessionState::default(), SessionState::Unauthenticated);
}

#[test]
fn test_user_present_only_when_authenticated() {
    assert!(SessionState::Authenticated(user()).user().is_some());
    assert!(SessionState::Unauthenticated.user().is_none());
    assert!(SessionState::Initializing.user().is_none());
    assert!(
        SessionState::Error {
            message: "disk".into()
        }
        .user()
        .is_none()
    );
}

#[test]
fn test_labels() {
    assert_eq!(SessionState::Initializing.label(), "initializing");
    assert_eq!(SessionState::Authenticated(user()).label(), "authenticated");
    assert_eq!(
        SessionState::Authenticated(user()).to_string(),
        "authenticated as a@b.com"
    );
}
