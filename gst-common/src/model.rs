//! Upstream payload models
//!
//! Snapshots are large; only the fields the compilers read are modelled and
//! everything else is ignored during deserialization. Optional upstream
//! fields default to empty, whether missing or `null`, instead of failing
//! the whole snapshot.

use serde::{Deserialize, Deserializer, Serialize};

use crate::slots::EquipmentSlot;

/// Secondary stat codes that make up a stat signature, with their short names
pub const SECONDARY_STATS: [(&str, &str); 4] = [
    ("CRIT_RATING", "Crit"),
    ("HASTE_RATING", "Haste"),
    ("MASTERY_RATING", "Mastery"),
    ("VERSATILITY", "Vers"),
];

/// Stat display names excluded from the full stat description
pub const PRIMARY_STAT_NAMES: [&str; 5] = ["Stamina", "Strength", "Intellect", "Agility", "Spirit"];

/// Deserialize `null` the same as a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// One bracket snapshot: a record per specialization
pub type Snapshot = Vec<SpecRecord>;

/// Usage statistics of one specialization in one bracket
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecRecord {
    /// Specialization id, numeric but transported as a string
    pub spec_id: String,
    /// Per-slot histograms in upstream order
    #[serde(default, deserialize_with = "null_as_default")]
    pub histo_maps: Vec<SlotHistogram>,
    /// Top players of this spec
    #[serde(default, deserialize_with = "null_as_default")]
    pub links: Vec<TopPlayerLink>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: PlayStats,
    #[serde(default)]
    pub profiles_compared_count: Option<u64>,
}

/// Usage histogram of one equipment slot
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotHistogram {
    /// Upstream slot code, e.g. `FINGER_1`
    pub slot_type: String,
    /// Entries sorted by descending percentage
    #[serde(default, deserialize_with = "null_as_default")]
    pub histo: Vec<HistoEntry>,
}

impl SlotHistogram {
    /// Parsed slot, `None` for slots without gear statistics
    pub fn slot(&self) -> Option<EquipmentSlot> {
        EquipmentSlot::from_code(&self.slot_type)
    }
}

/// One item variant in a slot histogram
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HistoEntry {
    /// Variant id, unique within its slot
    pub id: String,
    pub count: u64,
    /// Usage percentage, 0-100
    pub percent: f64,
    pub item: Item,
}

/// Equipped item description
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Item {
    pub name: String,
    /// Game item reference
    pub item: ItemRef,
    #[serde(default)]
    pub slot: Option<TypedName>,
    #[serde(default)]
    pub stats: Option<Vec<Stat>>,
    #[serde(default)]
    pub enchantments: Option<Vec<Enchantment>>,
}

impl Item {
    /// Stats as a slice, empty when upstream omitted them
    pub fn stats(&self) -> &[Stat] {
        self.stats.as_deref().unwrap_or_default()
    }

    /// Enchantments as a slice, empty when upstream omitted them
    pub fn enchantments(&self) -> &[Enchantment] {
        self.enchantments.as_deref().unwrap_or_default()
    }

    /// Display name of the slot the item was equipped in, empty if unknown
    pub fn slot_name(&self) -> &str {
        self.slot.as_ref().map(|s| s.name.as_str()).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemRef {
    pub id: u64,
}

/// `{ type, name }` pair used throughout the upstream payloads
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct TypedName {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub name: String,
}

/// A stat contribution on an item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Stat {
    #[serde(rename = "type", default)]
    pub descriptor: Option<StatDescriptor>,
    #[serde(default)]
    pub value: Option<f64>,
}

impl Stat {
    /// Upstream stat code, e.g. `HASTE_RATING`
    pub fn code(&self) -> Option<&str> {
        self.descriptor.as_ref().map(|d| d.code.as_str())
    }

    /// Numeric value, 0 when absent
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Stat type, normalized from either a bare code string or a `{type, name}` object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawStatType")]
pub struct StatDescriptor {
    #[serde(rename = "type")]
    pub code: String,
    pub name: Option<String>,
}

impl StatDescriptor {
    /// Human readable name, falling back to the code
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.code)
    }

    /// Short name for secondary stats (`Haste`), `None` for anything else
    pub fn short_name(&self) -> Option<&'static str> {
        SECONDARY_STATS
            .iter()
            .find(|(code, _)| *code == self.code)
            .map(|(_, short)| *short)
    }

    pub fn is_secondary(&self) -> bool {
        self.short_name().is_some()
    }

    pub fn is_primary(&self) -> bool {
        PRIMARY_STAT_NAMES.contains(&self.display_name())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatType {
    Bare(String),
    Typed {
        #[serde(rename = "type", default)]
        code: Option<String>,
        #[serde(default)]
        name: Option<String>,
    },
}

impl From<RawStatType> for StatDescriptor {
    fn from(raw: RawStatType) -> Self {
        match raw {
            RawStatType::Bare(code) => StatDescriptor { code, name: None },
            RawStatType::Typed { code, name } => StatDescriptor {
                code: code.unwrap_or_default(),
                name: name.filter(|n| !n.is_empty()),
            },
        }
    }
}

/// Enchantment attached to an equipped item
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Enchantment {
    pub enchantment_id: u32,
    pub enchantment_slot: EnchantmentSlot,
    #[serde(default)]
    pub display_string: String,
    #[serde(default)]
    pub source_item: Option<SourceItem>,
}

impl Enchantment {
    /// Permanent enchants count; temporary ones (oils, stones) do not
    pub fn is_permanent(&self) -> bool {
        self.enchantment_slot.kind == "PERMANENT"
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnchantmentSlot {
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SourceItem {
    #[serde(default)]
    pub id: u64,
    pub name: String,
}

/// A top player whose current loadout can be looked up
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TopPlayerLink {
    pub name: String,
    pub realm: String,
}

/// Aggregate match counters of a spec
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize)]
pub struct PlayStats {
    #[serde(default, deserialize_with = "null_as_default")]
    pub played: u64,
}

/// Entry of the external enchantment catalog
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEnchant {
    pub id: u32,
    #[serde(default)]
    pub item_name: Option<String>,
    #[serde(default)]
    pub crafting_quality: Option<u8>,
}

/// Per-character specialization payload
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CharacterSpecializations {
    #[serde(default, deserialize_with = "null_as_default")]
    pub specializations: Vec<CharacterSpecialization>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CharacterSpecialization {
    pub specialization: SpecializationRef,
    #[serde(default)]
    pub loadouts: Option<Vec<Loadout>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SpecializationRef {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Loadout {
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub talent_loadout_code: Option<String>,
}

impl CharacterSpecializations {
    /// Talent code of the active loadout of `spec_id`
    pub fn active_talent_code(&self, spec_id: &str) -> Result<&str, TalentMiss> {
        let spec = self
            .specializations
            .iter()
            .find(|s| s.specialization.id.to_string() == spec_id)
            .ok_or(TalentMiss::NoSpecialization)?;

        let loadout = spec
            .loadouts
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|l| l.is_active)
            .ok_or(TalentMiss::NoActiveLoadout)?;

        loadout
            .talent_loadout_code
            .as_deref()
            .filter(|code| !code.is_empty())
            .ok_or(TalentMiss::EmptyCode)
    }
}

/// Why a character has no usable talent code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TalentMiss {
    NoSpecialization,
    NoActiveLoadout,
    EmptyCode,
}
