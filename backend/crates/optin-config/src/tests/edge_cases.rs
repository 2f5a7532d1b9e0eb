use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, LogLevel};

use std::str::FromStr;

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err};
use log::LevelFilter;
use serial_test::serial;

// =========================================================================
// Edge Cases
// =========================================================================

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error_mentions_file() {
    // Given
    let (temp, _guards) = setup_config_dir();
    std::fs::write(
        temp.path().join("config.toml"),
        "this is not valid toml {{{{",
    )
    .unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("config.toml"));
}

#[test]
#[serial]
fn given_unparseable_port_env_when_load_then_default_kept() {
    // Given
    let _temp = setup_config_dir();
    let _port = EnvGuard::set("OPTIN_SERVER_PORT", "not-a-port");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(crate::DEFAULT_PORT));
}

#[test]
#[serial]
fn given_colored_env_zero_when_load_then_disabled() {
    // Given
    let _temp = setup_config_dir();
    let _colored = EnvGuard::set("OPTIN_LOG_COLORED", "0");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.logging.colored, eq(false));
}

#[test]
fn test_log_level_unknown_value_defaults_to_info() {
    assert_eq!(LogLevel::from_str("verbose").unwrap(), LogLevel(LevelFilter::Info));
    assert_eq!(LogLevel::from_str("WARN").unwrap(), LogLevel(LevelFilter::Warn));
}
