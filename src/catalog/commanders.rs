use std::fs;
use std::path::Path;

use crate::logger;
use crate::models::commander::Commander;
use crate::utils::errors::CatalogError;

/// Every commander that can be picked for a deck.
#[derive(Debug, Default)]
pub struct CommanderCatalog {
    commanders: Vec<Commander>,
}

impl CommanderCatalog {
    /// Reads the commander catalog from a JSON file.
    ///
    /// # Arguments
    /// * `path` - A file holding a JSON array of commander records.
    ///
    /// # Returns
    /// * `Ok(CommanderCatalog)` - Every commander in the file.
    /// * `Err(CatalogError)` - An error if the file cannot be read or is not a commander list.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = CommanderCatalog::from_json(&content)?;
        logger!(DEBUG, "[CATALOG] Loaded {} commanders from `{}`", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn from_json(content: &str) -> Result<Self, CatalogError> {
        let commanders = serde_json::from_str::<Vec<Commander>>(content)?;
        Ok(CommanderCatalog { commanders })
    }

    pub fn len(&self) -> usize {
        self.commanders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commanders.is_empty()
    }

    /// Case-insensitive exact lookup.
    pub fn find(&self, name: &str) -> Result<&Commander, CatalogError> {
        let wanted = name.trim().to_lowercase();
        self.commanders
            .iter()
            .find(|c| c.name.to_lowercase() == wanted)
            .ok_or_else(|| CatalogError::UnknownCommander(name.trim().to_string()))
    }

    /// Names containing `query`, prefix matches first, then alphabetical.
    pub fn suggest(&self, query: &str, limit: usize) -> Vec<&Commander> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<(bool, String, &Commander)> = self
            .commanders
            .iter()
            .filter_map(|c| {
                let name = c.name.to_lowercase();
                let position = name.find(&query)?;
                Some((position != 0, name, c))
            })
            .collect();

        matches.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
        matches.into_iter().take(limit).map(|(_, _, c)| c).collect()
    }
}
