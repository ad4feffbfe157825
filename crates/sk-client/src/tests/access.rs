use crate::{Access, paths};

#[test]
fn test_login_and_register_are_public() {
    assert_eq!(Access::for_path(paths::LOGIN), Access::Public);
    assert_eq!(Access::for_path(paths::REGISTER), Access::Public);
}

#[test]
fn test_everything_else_is_credentialed() {
    assert_eq!(Access::for_path(paths::ME), Access::Credentialed);
    assert_eq!(Access::for_path(paths::PROFILE), Access::Credentialed);
    assert_eq!(Access::for_path(paths::REFRESH), Access::Credentialed);
    assert_eq!(Access::for_path("/recommendations"), Access::Credentialed);
}
