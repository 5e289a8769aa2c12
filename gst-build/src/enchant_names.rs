//! Enchantment display names
//!
//! Snapshot enchantments only carry the in-game tooltip string. The catalog
//! maps enchantment ids to the crafted item that applies them, which is what
//! players recognise, plus its crafting quality tier.

use std::collections::HashMap;

use gst_common::model::{CatalogEnchant, Enchantment};
use tracing::info;

/// Chat icon markup for crafting quality tiers 1, 2 and 3
pub const QUALITY_MARKERS: [&str; 3] = [
    "|A:Professions-ChatIcon-Quality-Tier1:20:20|a",
    "|A:Professions-ChatIcon-Quality-Tier2:20:20|a",
    "|A:Professions-ChatIcon-Quality-Tier3:20:20|a",
];

fn quality_marker(tier: Option<u8>) -> Option<&'static str> {
    match tier {
        Some(t @ 1..=3) => Some(QUALITY_MARKERS[usize::from(t) - 1]),
        _ => None,
    }
}

/// Immutable id → display name map, built once per build
#[derive(Debug, Clone, Default)]
pub struct EnchantNameResolver {
    names: HashMap<u32, String>,
}

impl EnchantNameResolver {
    /// Build from catalog entries; later duplicates of an id win
    ///
    /// Entries without an item name are left out so lookups fall back to the
    /// snapshot's own text.
    pub fn from_catalog(catalog: &[CatalogEnchant]) -> Self {
        let mut names = HashMap::with_capacity(catalog.len());

        for entry in catalog {
            let Some(item_name) = entry.item_name.as_deref().filter(|n| !n.is_empty()) else {
                continue;
            };
            let name = match quality_marker(entry.crafting_quality) {
                Some(marker) => format!("{} {}", item_name, marker),
                None => item_name.to_string(),
            };
            names.insert(entry.id, name);
        }

        info!(entries = catalog.len(), names = names.len(), "Built enchant name map");
        Self { names }
    }

    /// Catalog name of an enchantment id
    pub fn get(&self, enchantment_id: u32) -> Option<&str> {
        self.names.get(&enchantment_id).map(String::as_str)
    }

    /// Display name: catalog name, then source item name, then tooltip string
    pub fn resolve<'a>(&'a self, enchant: &'a Enchantment) -> &'a str {
        self.get(enchant.enchantment_id)
            .or_else(|| {
                enchant
                    .source_item
                    .as_ref()
                    .map(|s| s.name.as_str())
                    .filter(|n| !n.is_empty())
            })
            .unwrap_or(&enchant.display_string)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
