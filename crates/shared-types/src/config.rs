use serde::{Deserialize, Serialize};

use crate::Role;

/// Role assumed when no valid access token is available.
pub const DEFAULT_FALLBACK_ROLE: &str = "GUEST";

/// Options offered by the header selector.
///
/// Every field defaults so that a missing or incomplete `config.toml`
/// still produces a usable selector.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SelectorConfig {
    #[serde(default = "default_items")]
    pub items: Vec<String>,
    /// Initial selection. Falls back to the first item when unset.
    #[serde(default)]
    pub default_item: Option<String>,
}

fn default_items() -> Vec<String> {
    vec!["Buyer".to_string(), "Seller".to_string()]
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            items: default_items(),
            default_item: None,
        }
    }
}

impl SelectorConfig {
    /// The selection shown before the user picks anything.
    pub fn initial_selection(&self) -> Option<String> {
        self.default_item
            .clone()
            .or_else(|| self.items.first().cloned())
    }
}

/// Session settings used when resolving the viewer role.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    #[serde(default = "default_role")]
    pub role: Role,
}

fn default_role() -> Role {
    Role::from(DEFAULT_FALLBACK_ROLE)
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            role: default_role(),
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub selector: SelectorConfig,
    #[serde(default)]
    pub session: SessionConfig,
}
