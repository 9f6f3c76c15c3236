/// Runtime configuration loaded from the environment (and `.env` when present).
/// Every value is optional: a missing credential disables the channel that needs it.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub linkedin_email: Option<String>,
    pub linkedin_password: Option<String>,
    pub linkedin_public_id: Option<String>,
    pub anthropic_api_key: Option<String>,
    pub pdf_engine: String,
    pub rust_log: String,
}

pub const DEFAULT_PDF_ENGINE: &str = "weasyprint";

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Config {
            linkedin_email: optional_env("LINKEDIN_EMAIL"),
            linkedin_password: optional_env("LINKEDIN_PASSWORD"),
            linkedin_public_id: optional_env("LINKEDIN_PUBLIC_ID"),
            anthropic_api_key: optional_env("ANTHROPIC_API_KEY"),
            pdf_engine: optional_env("PDF_ENGINE").unwrap_or_else(|| DEFAULT_PDF_ENGINE.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }

    /// Provider credentials, only when both halves are set.
    pub fn linkedin_credentials(&self) -> Option<(String, String)> {
        match (&self.linkedin_email, &self.linkedin_password) {
            (Some(email), Some(password)) => Some((email.clone(), password.clone())),
            _ => None,
        }
    }
}

/// Reads a variable, treating blank values as unset.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
