use crate::{CoreError, ExperienceLevel};

use std::str::FromStr;

#[test]
fn test_experience_level_as_str() {
    assert_eq!(ExperienceLevel::Beginner.as_str(), "beginner");
    assert_eq!(ExperienceLevel::Intermediate.as_str(), "intermediate");
    assert_eq!(ExperienceLevel::Advanced.as_str(), "advanced");
}

#[test]
fn test_experience_level_from_str() {
    assert_eq!(
        ExperienceLevel::from_str("beginner").unwrap(),
        ExperienceLevel::Beginner
    );
    assert_eq!(
        ExperienceLevel::from_str("Advanced").unwrap(),
        ExperienceLevel::Advanced
    );
    assert!(matches!(
        ExperienceLevel::from_str("expert"),
        Err(CoreError::InvalidExperienceLevel { .. })
    ));
}

#[test]
fn test_experience_level_display_matches_wire_form() {
    assert_eq!(ExperienceLevel::Intermediate.to_string(), "intermediate");
    assert_eq!(
        serde_json::to_string(&ExperienceLevel::Intermediate).unwrap(),
        "\"intermediate\""
    );
}
