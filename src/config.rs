/// Application configuration, fixed at mount time.
///
/// A CSR bundle has no environment to read, so this is a plain struct built
/// in `main.rs`. Any provider returning the flat user schema decoded in
/// `model.rs` can be substituted via `api_url`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Endpoint returning one random person as a flat JSON object.
    pub api_url: String,
    /// Fetch a first profile automatically when the app mounts.
    pub auto_generate_on_load: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            api_url: "https://random-data-api.com/api/v2/users".to_string(),
            auto_generate_on_load: true,
        }
    }
}
