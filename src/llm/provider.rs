use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::llm::gemini::GeminiProvider;
use crate::llm::openai::OpenAiProvider;

/// Uniform contract over the supported LLM backends: one outbound request
/// per call, returning the complete generated text or an error.
#[async_trait]
pub trait LlmProvider: Send + Sync + std::fmt::Debug {
    async fn generate(&self, system: &str, user: &str) -> Result<String>;
    fn name(&self) -> &str;
}

/// Closed set of supported backends. Resolved once per invocation; every
/// batch in one run uses the same backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    OpenAi,
    Gemini,
}

impl FromStr for ProviderKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "openai" => Ok(ProviderKind::OpenAi),
            "gemini" => Ok(ProviderKind::Gemini),
            other => Err(Error::UnsupportedProvider(other.to_string())),
        }
    }
}

/// Construct the selected backend, checking its credential up front so a
/// missing key fails before any batch is processed.
pub fn build_provider(kind: ProviderKind, config: &Config) -> Result<Arc<dyn LlmProvider>> {
    match kind {
        ProviderKind::OpenAi => {
            let api_key = config.openai_api_key.clone().ok_or_else(|| {
                Error::Auth("OPENAI_API_KEY environment variable not set".to_string())
            })?;
            Ok(Arc::new(OpenAiProvider::new(api_key, None)?))
        }
        ProviderKind::Gemini => {
            let api_key = config.gemini_api_key.clone().ok_or_else(|| {
                Error::Auth("GEMINI_API_KEY environment variable not set".to_string())
            })?;
            Ok(Arc::new(GeminiProvider::new(api_key, None)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_providers() {
        assert_eq!("openai".parse::<ProviderKind>().unwrap(), ProviderKind::OpenAi);
        assert_eq!("gemini".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
    }

    #[test]
    fn test_parse_unsupported_provider() {
        let err = "claude".parse::<ProviderKind>().unwrap_err();
        assert!(matches!(err, Error::UnsupportedProvider(name) if name == "claude"));
    }

    #[test]
    fn test_build_provider_without_credential() {
        let config = Config::default();
        let err = build_provider(ProviderKind::OpenAi, &config).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));

        let err = build_provider(ProviderKind::Gemini, &config).unwrap_err();
        assert!(matches!(err, Error::Auth(_)));
    }

    #[test]
    fn test_build_provider_with_credential() {
        let config = Config {
            openai_api_key: Some("test-key".to_string()),
            gemini_api_key: None,
        };
        let provider = build_provider(ProviderKind::OpenAi, &config).unwrap();
        assert_eq!(provider.name(), "OpenAI");
    }
}
