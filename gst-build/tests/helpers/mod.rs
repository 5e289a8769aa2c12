//! Shared fixtures and in-memory sources for pipeline tests

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use gst_build::{FetchError, GearSource, ProfileSource};
use gst_common::model::{CatalogEnchant, CharacterSpecializations, Snapshot};
use gst_common::Bracket;
use serde_json::{json, Value};

/// Snapshot store and catalog backed by maps
#[derive(Default)]
pub struct MemoryGear {
    pub snapshots: HashMap<String, Snapshot>,
    pub catalog: Option<Vec<CatalogEnchant>>,
    pub requested: Mutex<Vec<String>>,
}

impl MemoryGear {
    pub fn with_snapshot(mut self, bracket: &Bracket, snapshot: Value) -> Self {
        let records: Snapshot = serde_json::from_value(snapshot).unwrap();
        self.snapshots
            .insert(bracket.source_name().to_string(), records);
        self
    }

    pub fn with_catalog(mut self, catalog: Value) -> Self {
        self.catalog = Some(serde_json::from_value(catalog).unwrap());
        self
    }
}

#[async_trait]
impl GearSource for MemoryGear {
    async fn fetch_snapshot(&self, bracket: &Bracket) -> Result<Snapshot, FetchError> {
        self.requested
            .lock()
            .unwrap()
            .push(bracket.snapshot_file());
        self.snapshots
            .get(bracket.source_name())
            .cloned()
            .ok_or_else(|| FetchError::ApiError(404, "BlobNotFound".to_string()))
    }

    async fn fetch_enchant_catalog(&self) -> Result<Vec<CatalogEnchant>, FetchError> {
        self.catalog
            .clone()
            .ok_or_else(|| FetchError::NetworkError("catalog unreachable".to_string()))
    }
}

/// Character profiles keyed by lowercased character name
#[derive(Default)]
pub struct MemoryProfiles {
    pub profiles: HashMap<String, Value>,
    pub requested: Mutex<Vec<String>>,
}

impl MemoryProfiles {
    pub fn with_active_code(mut self, character: &str, spec_id: u64, code: &str) -> Self {
        self.profiles.insert(
            character.to_lowercase(),
            json!({
                "specializations": [{
                    "specialization": {"id": spec_id, "name": "Spec"},
                    "loadouts": [
                        {"is_active": false, "talent_loadout_code": "STALE"},
                        {"is_active": true, "talent_loadout_code": code}
                    ]
                }]
            }),
        );
        self
    }
}

#[async_trait]
impl ProfileSource for MemoryProfiles {
    fn profile_base(&self) -> &str {
        "https://profiles.test/character"
    }

    async fn fetch_specializations(
        &self,
        url: &str,
    ) -> Result<CharacterSpecializations, FetchError> {
        self.requested.lock().unwrap().push(url.to_string());
        let character = url.split('/').nth(5).unwrap_or_default();
        let profile = self
            .profiles
            .get(character)
            .ok_or_else(|| FetchError::ApiError(404, "Character not found".to_string()))?;
        serde_json::from_value(profile.clone()).map_err(|e| FetchError::ParseError(e.to_string()))
    }
}

pub fn stat(code: &str, name: &str, value: u32) -> Value {
    json!({"type": {"type": code, "name": name}, "value": value})
}

pub fn permanent_enchant(id: u32, text: &str) -> Value {
    json!({
        "enchantment_id": id,
        "enchantment_slot": {"id": 0, "type": "PERMANENT"},
        "display_string": text
    })
}

/// A histogram entry with haste/crit secondaries
pub fn histo_entry(id: &str, name: &str, count: u64, percent: f64, enchants: Vec<Value>) -> Value {
    json!({
        "id": id,
        "count": count,
        "percent": percent,
        "item": {
            "name": name,
            "item": {"id": 200000 + count},
            "stats": [
                stat("AGILITY", "Agility", 500),
                stat("HASTE_RATING", "Haste", 120),
                stat("CRIT_RATING", "Critical Strike", 80)
            ],
            "enchantments": enchants
        }
    })
}

/// One frost death knight record with feet, two rings and two links
pub fn frost_dk_record() -> Value {
    json!({
        "specId": "251",
        "profilesComparedCount": 40,
        "stats": {"played": 1200, "won": 700, "lost": 500},
        "links": [
            {"name": "Frostbyte", "realm": "illidan", "region": "us"},
            {"name": "Ghost", "realm": "stormrage", "region": "us"}
        ],
        "histoMaps": [
            {"slotType": "FEET", "histo": [
                histo_entry("1001", "Treads", 30, 75.0, vec![permanent_enchant(7420, "Enchanted: Speed")]),
                histo_entry("1002", "Sabatons", 10, 25.0, vec![permanent_enchant(7933, "Enchanted: Noise")])
            ]},
            {"slotType": "FINGER_1", "histo": [
                histo_entry("2001", "Band", 20, 50.0, vec![]),
                histo_entry("2002", "Loop", 20, 50.0, vec![])
            ]},
            {"slotType": "FINGER_2", "histo": [
                histo_entry("2002", "Loop", 15, 37.5, vec![]),
                histo_entry("2003", "Signet", 25, 62.5, vec![])
            ]}
        ]
    })
}
