use once_cell::sync::Lazy;
use std::env;
use std::sync::Mutex;

use priceboard::config;

// These tests mutate process-wide env vars, so they must not run in parallel.
static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

#[test]
fn test_sanitize_base_url_removes_trailing_slash() {
    assert_eq!(
        config::sanitize_base_url("https://api.notion.com/v1/"),
        "https://api.notion.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_multiple_trailing_slashes() {
    assert_eq!(
        config::sanitize_base_url("https://api.notion.com/v1///"),
        "https://api.notion.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_with_whitespace() {
    assert_eq!(
        config::sanitize_base_url("  https://api.notion.com/v1/  "),
        "https://api.notion.com/v1"
    );
}

#[test]
fn test_sanitize_base_url_empty_falls_back_to_default() {
    assert_eq!(config::sanitize_base_url(""), config::DEFAULT_API_BASE_URL);
    assert_eq!(config::sanitize_base_url("   "), config::DEFAULT_API_BASE_URL);
}

#[test]
fn test_get_api_base_url_override() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("NOTION_API_BASE_URL", "http://localhost:9000/");

    assert_eq!(config::get_api_base_url(), "http://localhost:9000");

    env::remove_var("NOTION_API_BASE_URL");
}

#[test]
fn test_get_api_base_url_uses_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("NOTION_API_BASE_URL");

    assert_eq!(config::get_api_base_url(), "https://api.notion.com/v1");
}

#[test]
fn test_get_port_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("PORT");

    assert_eq!(config::get_port(), config::DEFAULT_PORT);
}

#[test]
fn test_get_port_override() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PORT", "8080");

    assert_eq!(config::get_port(), 8080);

    env::remove_var("PORT");
}

#[test]
fn test_get_port_ignores_garbage() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("PORT", "not-a-port");

    assert_eq!(config::get_port(), config::DEFAULT_PORT);

    env::remove_var("PORT");
}

#[test]
fn test_expose_error_details_off_in_production() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("APP_ENV", "production");

    assert!(!config::expose_error_details());

    env::remove_var("APP_ENV");
}

#[test]
fn test_expose_error_details_on_by_default() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::remove_var("APP_ENV");

    assert!(config::expose_error_details());
}

#[test]
fn test_expose_error_details_on_in_development() {
    let _guard = ENV_LOCK.lock().unwrap();
    env::set_var("APP_ENV", "development");

    assert!(config::expose_error_details());

    env::remove_var("APP_ENV");
}
