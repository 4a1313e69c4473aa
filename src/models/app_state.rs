#[derive(Clone)]
pub struct AppState {
    pub api_base_url: String,
    pub api_token: String,
    pub database_id: String,
    pub client: reqwest::Client,
    /// Attach upstream error detail to 500 responses (off in production).
    pub expose_error_details: bool,
}
