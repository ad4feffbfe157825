use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Api
// =========================================================================

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _url = EnvGuard::set("SK_API_BASE_URL", "localhost:8000");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_zero_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SK_API_TIMEOUT_SECS", "0");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_timeout_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SK_API_TIMEOUT_SECS", "301");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unparseable_timeout_when_load_then_default_kept() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _timeout = EnvGuard::set("SK_API_TIMEOUT_SECS", "soon");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(config.api.timeout_secs, crate::DEFAULT_TIMEOUT_SECS);
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn test_timeout_duration() {
    let api = crate::ApiConfig {
        timeout_secs: 7,
        ..Default::default()
    };
    assert_eq!(api.timeout(), std::time::Duration::from_secs(7));
}
