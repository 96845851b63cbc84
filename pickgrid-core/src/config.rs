//! Session configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::date_key::DateKey;
use crate::error::{PickgridError, PickgridResult};
use crate::special_dates::{SpecialDateEntry, SpecialDatesRegistry};
use crate::timezone::Timezone;

/// Configuration at ~/.config/pickgrid/config.toml
///
/// Every key is optional. `PICKGRID_DEFAULT_TIMEZONE` and friends override
/// the file. The config is only ever read, never written.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct PickgridConfig {
    #[serde(default)]
    pub default_timezone: Timezone,

    /// Replaces the built-in special dates when non-empty.
    #[serde(default)]
    pub special_dates: BTreeMap<DateKey, SpecialDateEntry>,
}

impl PickgridConfig {
    pub fn config_path() -> PickgridResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| PickgridError::Config("Could not determine config directory".into()))?
            .join("pickgrid");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location. A missing file gives defaults.
    pub fn load() -> PickgridResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> PickgridResult<Self> {
        let config: PickgridConfig = Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("PICKGRID"))
            .build()
            .map_err(|e| PickgridError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| PickgridError::Config(e.to_string()))?;

        log::debug!(
            "loaded config from {}: timezone {}, {} special date(s)",
            path.display(),
            config.default_timezone,
            config.special_dates.len()
        );
        Ok(config)
    }

    /// The special dates a new session starts with.
    pub fn registry(&self) -> SpecialDatesRegistry {
        if self.special_dates.is_empty() {
            SpecialDatesRegistry::seeded()
        } else {
            SpecialDatesRegistry::from_entries(
                self.special_dates
                    .iter()
                    .map(|(date, entry)| (*date, entry.clone())),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = PickgridConfig::load_from(&dir.path().join("config.toml")).unwrap();

        assert_eq!(config.default_timezone, Timezone::Utc);
        assert!(config.special_dates.is_empty());
        assert_eq!(config.registry().len(), 3);
    }

    #[test]
    fn test_load_timezone_and_special_dates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_timezone = "Asia/Kolkata"

[special_dates."2025-08-15"]
message = "Independence Day"
disabled = true

[special_dates."2025-09-01"]
message = "Sprint review"
"#,
        )
        .unwrap();

        let config = PickgridConfig::load_from(&path).unwrap();
        assert_eq!(config.default_timezone, Timezone::Kolkata);

        let registry = config.registry();
        assert_eq!(registry.len(), 2);
        let holiday = registry.lookup(&"2025-08-15".parse().unwrap()).unwrap();
        assert_eq!(holiday.message, "Independence Day");
        assert!(holiday.disabled);
        assert!(!registry.lookup(&"2025-09-01".parse().unwrap()).unwrap().disabled);
    }

    #[test]
    fn test_unknown_timezone_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "default_timezone = \"Mars/Olympus\"\n").unwrap();

        assert!(matches!(
            PickgridConfig::load_from(&path),
            Err(PickgridError::Config(_))
        ));
    }
}
