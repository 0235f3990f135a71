use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::utils::errors::SettingsError;

/// Token record written by the login flow.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiCredentials {
    pub token: String,
    #[serde(default)]
    pub user_nicename: String,
}

impl ApiCredentials {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let invalid = |reason: String| SettingsError::InvalidCredentials {
            path: path.display().to_string(),
            reason,
        };

        let content = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let credentials =
            serde_json::from_str::<ApiCredentials>(&content).map_err(|e| invalid(e.to_string()))?;

        if credentials.token.trim().is_empty() {
            return Err(invalid("empty token".to_string()));
        }

        Ok(credentials)
    }
}
