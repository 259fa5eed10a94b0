//! Record store configuration from TOML (`[store]` section)

use advisor_domain::{Chore, DomainError};
use serde::{Deserialize, Serialize};

/// Which [`RecordStore`](advisor_application::RecordStore) adapter to build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local store, seeded from `[[store.chores]]`
    #[default]
    Memory,
    /// Supabase / PostgREST over HTTP
    Postgrest,
}

/// One chore of the in-memory catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileChoreConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub ideal_weather: Vec<String>,
    pub ideal_frequency_days: f64,
}

impl FileChoreConfig {
    fn new(id: &str, name: &str, ideal_weather: &[&str], ideal_frequency_days: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            ideal_weather: ideal_weather.iter().map(|w| w.to_string()).collect(),
            ideal_frequency_days,
        }
    }

    pub fn to_chore(&self) -> Result<Chore, DomainError> {
        Chore::new(
            self.id.as_str(),
            self.name.as_str(),
            &self.ideal_weather,
            self.ideal_frequency_days,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    pub backend: StoreBackend,
    /// Environment variable holding the PostgREST base URL (project URL)
    pub url_env: String,
    /// Environment variable holding the API key
    pub key_env: String,
    pub timeout_seconds: u64,
    /// Chore catalog for the memory backend
    pub chores: Vec<FileChoreConfig>,
}

impl Default for FileStoreConfig {
    fn default() -> Self {
        Self {
            backend: StoreBackend::Memory,
            url_env: "SUPABASE_URL".to_string(),
            key_env: "SUPABASE_ANON_KEY".to_string(),
            timeout_seconds: 15,
            chores: vec![
                FileChoreConfig::new("laundry", "Laundry", &["clear", "clouds"], 2.0),
                FileChoreConfig::new("futon", "Air the futons", &["clear"], 7.0),
                FileChoreConfig::new("windows", "Clean the windows", &["clouds"], 30.0),
                FileChoreConfig::new("vacuum", "Vacuum the floors", &["rain", "drizzle"], 3.0),
                FileChoreConfig::new("bathroom", "Scrub the bathroom", &["rain"], 7.0),
            ],
        }
    }
}

impl FileStoreConfig {
    /// Convert the configured catalog, rejecting the first invalid entry
    pub fn catalog(&self) -> Result<Vec<Chore>, DomainError> {
        self.chores.iter().map(FileChoreConfig::to_chore).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let chores = FileStoreConfig::default().catalog().unwrap();
        assert_eq!(chores.len(), 5);
        assert!(chores[0].suits_weather("clear"));
    }

    #[test]
    fn test_catalog_rejects_zero_interval() {
        let config = FileStoreConfig {
            chores: vec![FileChoreConfig::new("x", "Broken", &[], 0.0)],
            ..FileStoreConfig::default()
        };
        assert!(config.catalog().is_err());
    }

    #[test]
    fn test_deserialize_store_section() {
        let toml_str = r#"
backend = "postgrest"
url_env = "MY_URL"

[[chores]]
id = "c1"
name = "Dishes"
ideal_frequency_days = 1
"#;
        let config: FileStoreConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.backend, StoreBackend::Postgrest);
        assert_eq!(config.url_env, "MY_URL");
        assert_eq!(config.key_env, "SUPABASE_ANON_KEY");
        assert_eq!(config.chores.len(), 1);
        assert!(config.chores[0].ideal_weather.is_empty());
    }
}
