use std::env;

/// Credentials sourced once by the CLI layer and threaded into the core
/// explicitly. The core never reads the process environment itself, so
/// tests can construct a `Config` with fake keys.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            openai_api_key: env::var("OPENAI_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
        }
    }
}
