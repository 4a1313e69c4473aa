use std::env;
use std::path::Path;

// Default configuration constants
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5173;
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";

pub fn load_env_file(env_file: Option<&str>) {
    if let Some(path) = env_file {
        dotenvy::from_path(Path::new(path)).ok();
    } else {
        dotenvy::dotenv().ok();
    }
}

pub fn get_api_key() -> String {
    env::var("NOTION_API_KEY").unwrap_or_default()
}

pub fn get_database_id() -> String {
    env::var("NOTION_DATABASE_ID").unwrap_or_default()
}

pub fn get_api_base_url() -> String {
    sanitize_base_url(&env::var("NOTION_API_BASE_URL").unwrap_or_default())
}

pub fn get_port() -> u16 {
    env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Error detail is attached to 500 responses only outside production.
pub fn expose_error_details() -> bool {
    env::var("APP_ENV").map(|v| v != "production").unwrap_or(true)
}

pub fn sanitize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_string()
    } else {
        trimmed.to_string()
    }
}
