//! Build configuration
//!
//! The build takes a single external setting, the snapshot store base URL,
//! from the `STORAGE_URL` environment variable. Everything else is a compiled
//! default.

use crate::{Error, Result};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// Environment variable holding the snapshot store base URL
pub const STORAGE_URL_VAR: &str = "STORAGE_URL";

/// Enchantment catalog with display names and crafting quality
pub const DEFAULT_ENCHANT_CATALOG_URL: &str =
    "https://www.raidbots.com/static/data/live/enchantments.json";

/// Prefix of the per-character specialization endpoint
pub const DEFAULT_TALENT_API_BASE: &str =
    "https://wow.spires.io/api/battlenet/profile/wow/character";

/// Which fields make up an enchant aggregation key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnchantKey {
    /// (enchant id, item slot name, enchant slot type)
    #[default]
    SlotAndType,
    /// (enchant id, enchant slot type)
    TypeOnly,
}

/// Enchant usage output policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnchantPolicy {
    pub key: EnchantKey,
    /// Maximum rows per spec/slot, `None` emits all
    pub cap: Option<usize>,
}

impl EnchantPolicy {
    /// Top five per slot, keyed without the item slot name
    pub fn top_five() -> Self {
        Self {
            key: EnchantKey::TypeOnly,
            cap: Some(5),
        }
    }
}

/// Settings for one build run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Base URL of the snapshot store; file names are appended verbatim
    pub storage_url: String,
    /// Folder receiving the generated `.lua` artifacts
    pub output_dir: PathBuf,
    pub enchant_catalog_url: String,
    pub talent_api_base: String,
    /// Whole-request timeout; `None` waits for slow downloads to finish
    pub request_timeout: Option<Duration>,
    pub enchant_policy: EnchantPolicy,
}

impl BuildConfig {
    /// Create a configuration with compiled defaults for everything but the store URL
    pub fn new(storage_url: impl Into<String>) -> Self {
        Self {
            storage_url: storage_url.into(),
            output_dir: PathBuf::from("."),
            enchant_catalog_url: DEFAULT_ENCHANT_CATALOG_URL.to_string(),
            talent_api_base: DEFAULT_TALENT_API_BASE.to_string(),
            request_timeout: None,
            enchant_policy: EnchantPolicy::default(),
        }
    }

    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_url = lookup(STORAGE_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", STORAGE_URL_VAR)))?;

        debug!(storage_url = %storage_url, "Resolved snapshot store");
        Ok(Self::new(storage_url))
    }

    /// Full URL of a snapshot file in the store
    pub fn snapshot_url(&self, file_name: &str) -> String {
        format!("{}{}", self.storage_url, file_name)
    }
}
