use serde::{Deserialize, Serialize};

/// One entry of the commander catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commander {
    pub name: String,
    #[serde(default)]
    pub muid: Option<String>,
    #[serde(default, rename = "coloridentity", alias = "color_identity")]
    pub color_identity: String,
    #[serde(default, rename = "featuredImage", alias = "picurl")]
    pub featured_image: Option<String>,
}

/// The commander of a deck and its optional partner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommanderPair {
    pub commander: Commander,
    pub partner: Option<Commander>,
}

impl CommanderPair {
    pub fn has_partner(&self) -> bool {
        self.partner.is_some()
    }

    /// `Commander` or `Commander//Partner`.
    pub fn display_name(&self) -> String {
        match &self.partner {
            Some(partner) => format!("{}//{}", self.commander.name, partner.name),
            None => self.commander.name.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commander(name: &str) -> Commander {
        Commander {
            name: name.to_string(),
            muid: None,
            color_identity: String::new(),
            featured_image: None,
        }
    }

    #[test]
    fn test_display_name_without_partner() {
        let pair = CommanderPair {
            commander: commander("Kenrith, the Returned King"),
            partner: None,
        };
        assert!(!pair.has_partner());
        assert_eq!(pair.display_name(), "Kenrith, the Returned King");
    }

    #[test]
    fn test_display_name_with_partner() {
        let pair = CommanderPair {
            commander: commander("Thrasios, Triton Hero"),
            partner: Some(commander("Tymna the Weaver")),
        };
        assert!(pair.has_partner());
        assert_eq!(pair.display_name(), "Thrasios, Triton Hero//Tymna the Weaver");
    }

    #[test]
    fn test_deserialize_catalog_keys() {
        let json = r#"{"name": "Najeela, the Blade-Blossom", "muid": "1234", "coloridentity": "WUBRG", "picurl": "http://img/najeela.jpg"}"#;
        let parsed = serde_json::from_str::<Commander>(json).unwrap();
        assert_eq!(parsed.color_identity, "WUBRG");
        assert_eq!(parsed.featured_image.as_deref(), Some("http://img/najeela.jpg"));
        assert_eq!(parsed.muid.as_deref(), Some("1234"));
    }
}
