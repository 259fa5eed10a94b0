//! Credential resolution from environment variables
//!
//! The config file only names the variables; secrets never live in it.

use super::error::ConfigError;
use super::file_config::FileConfig;
use tracing::debug;

/// PostgREST endpoint and key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreCredentials {
    pub url: String,
    pub api_key: String,
}

/// Looks up credentials through a variable lookup function.
pub struct CredentialResolver<F> {
    lookup: F,
}

impl CredentialResolver<fn(&str) -> Option<String>> {
    /// Resolve from the process environment
    pub fn from_env() -> Self {
        Self {
            lookup: |var| std::env::var(var).ok(),
        }
    }
}

impl<F> CredentialResolver<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    /// Read `var`; blank values count as missing.
    pub fn require(&self, var: &str, purpose: &'static str) -> Result<String, ConfigError> {
        match (self.lookup)(var).map(|v| v.trim().to_string()) {
            Some(value) if !value.is_empty() => {
                debug!("Resolved {} from {}", purpose, var);
                Ok(value)
            }
            _ => Err(ConfigError::MissingCredential {
                var: var.to_string(),
                purpose,
            }),
        }
    }

    pub fn weather_api_key(&self, config: &FileConfig) -> Result<String, ConfigError> {
        self.require(&config.weather.api_key_env, "current weather")
    }

    pub fn llm_api_key(&self, config: &FileConfig) -> Result<String, ConfigError> {
        self.require(&config.llm.api_key_env, "activity suggestions")
    }

    pub fn store_credentials(&self, config: &FileConfig) -> Result<StoreCredentials, ConfigError> {
        Ok(StoreCredentials {
            url: self.require(&config.store.url_env, "the record store URL")?,
            api_key: self.require(&config.store.key_env, "the record store key")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn resolver(vars: &[(&str, &str)]) -> CredentialResolver<impl Fn(&str) -> Option<String>> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CredentialResolver::new(move |var: &str| vars.get(var).cloned())
    }

    #[test]
    fn test_resolves_named_variables() {
        let config = FileConfig::default();
        let resolver = resolver(&[
            ("SUPABASE_URL", "https://example.supabase.co"),
            ("SUPABASE_ANON_KEY", " anon "),
        ]);

        let creds = resolver.store_credentials(&config).unwrap();
        assert_eq!(creds.url, "https://example.supabase.co");
        assert_eq!(creds.api_key, "anon");
    }

    #[test]
    fn test_missing_and_blank_are_errors() {
        let config = FileConfig::default();
        let resolver = resolver(&[("OPENAI_API_KEY", "   ")]);

        let err = resolver.llm_api_key(&config).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredential { ref var, .. } if var == "OPENAI_API_KEY"));

        let err = resolver.weather_api_key(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Environment variable OPENWEATHER_API_KEY is not set (required for current weather)"
        );
    }

    #[test]
    fn test_variable_names_come_from_config() {
        let mut config = FileConfig::default();
        config.llm.api_key_env = "MY_LLM_KEY".to_string();
        let resolver = resolver(&[("MY_LLM_KEY", "sk-test")]);
        assert_eq!(resolver.llm_api_key(&config).unwrap(), "sk-test");
    }
}
