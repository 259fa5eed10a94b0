//! Location configuration from TOML (`[location]` section)

use serde::{Deserialize, Serialize};

/// Where the advisor looks up weather.
///
/// `city` is used for current conditions, the coordinates for the hourly
/// forecast. They are configured separately and are not cross-checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLocationConfig {
    pub city: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for FileLocationConfig {
    fn default() -> Self {
        Self {
            city: "Tokyo".to_string(),
            latitude: 34.6937,
            longitude: 135.5023,
        }
    }
}
