use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// A missing API key is a fatal startup error raised before any batch work.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub affiliate_tag: String,
    pub output_dir: String,
    pub rust_log: String,
}

/// Affiliate identifier appended to every purchase link.
const DEFAULT_AFFILIATE_TAG: &str = "your-tag-20";
/// Where dated JSON (and optional HTML) files land, relative to the cwd.
const DEFAULT_OUTPUT_DIR: &str = "public/content";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            openai_api_key: require_env("OPENAI_API_KEY")?,
            affiliate_tag: std::env::var("AFFILIATE_TAG")
                .unwrap_or_else(|_| DEFAULT_AFFILIATE_TAG.to_string()),
            output_dir: std::env::var("OUTPUT_DIR")
                .unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
