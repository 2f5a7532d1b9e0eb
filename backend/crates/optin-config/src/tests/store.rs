use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StoreBackend};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

// =========================================================================
// Validation Tests - Store
// =========================================================================

#[test]
fn test_store_backend_from_str() {
    assert_eq!(StoreBackend::from_str("sqlite").unwrap(), StoreBackend::Sqlite);
    assert_eq!(
        StoreBackend::from_str("Firestore").unwrap(),
        StoreBackend::Firestore
    );
    assert!(StoreBackend::from_str("redis").is_err());
}

#[test]
#[serial]
fn given_firestore_backend_without_project_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("OPTIN_STORE_BACKEND", "firestore");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_eq!(config.store.backend, StoreBackend::Firestore);
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_firestore_backend_with_project_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _backend = EnvGuard::set("OPTIN_STORE_BACKEND", "firestore");
    let _project = EnvGuard::set("OPTIN_IDENTITY_PROJECT_ID", "obscurity");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_store_path_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("OPTIN_STORE_PATH", "../../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_store_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("OPTIN_STORE_PATH", "/tmp/profiles.db");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_default_store_when_store_path_then_under_config_dir() {
    // Given
    let (temp, _guards) = setup_config_dir();

    // When
    let config = Config::load().unwrap();
    let path = config.store_path().unwrap();

    // Then
    assert_eq!(path, temp.path().join("profiles.db"));
}
