use std::path::Path;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::utils::errors::SettingsError;

const ENV_PREFIX: &str = "CDHREC";
const DEFAULT_SETTINGS_FILE: &str = "Settings";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub api_url: String,
    pub credentials_file: String,
    pub commanders_file: String,
}

impl Settings {
    /// Reads `Settings.toml` (or `path`) and `CDHREC_*` environment variables on top of the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, SettingsError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_SETTINGS_FILE).required(false),
        };

        let settings = Settings::builder()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?
            .try_deserialize::<Settings>()?;

        Ok(settings)
    }

    fn builder() -> Result<ConfigBuilder<DefaultState>, SettingsError> {
        Ok(Config::builder()
            .set_default("api_url", "http://api.cdhrec.com")?
            .set_default("credentials_file", "apiCdhRec.json")?
            .set_default("commanders_file", "commanders.json")?)
    }

    #[cfg(test)]
    fn from_toml(source: &str) -> Result<Self, SettingsError> {
        Ok(Settings::builder()?
            .add_source(File::from_str(source, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply() {
        let settings = Settings::from_toml("").unwrap();
        assert_eq!(settings.api_url, "http://api.cdhrec.com");
        assert_eq!(settings.credentials_file, "apiCdhRec.json");
        assert_eq!(settings.commanders_file, "commanders.json");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let settings = Settings::from_toml(
            r#"
            api_url = "http://localhost:8080"
            commanders_file = "data/commanders.json"
            "#,
        )
        .unwrap();
        assert_eq!(settings.api_url, "http://localhost:8080");
        assert_eq!(settings.commanders_file, "data/commanders.json");
        assert_eq!(settings.credentials_file, "apiCdhRec.json");
    }

    #[test]
    fn test_missing_explicit_file_fails() {
        let result = Settings::load(Some(Path::new("does/not/exist.toml")));
        assert!(matches!(result, Err(SettingsError::InvalidSettings(_))));
    }
}
