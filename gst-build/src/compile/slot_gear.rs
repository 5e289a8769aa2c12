//! Top item variants per slot
//!
//! The richest per-item table: up to ten variants per physical slot, with
//! the stat information needed to tell same-named variants apart.

use gst_common::specs::leading_int;
use tracing::debug;

use super::stat_tag::{stat_description, stat_tag, StatLabel};
use super::BracketSnapshot;
use crate::lua::{LuaRecord, LuaTable, LuaValue};

/// Variants listed per slot
pub const TOP_VARIANTS_PER_SLOT: usize = 10;

/// One row of the slot gear table
#[derive(Debug, Clone, PartialEq)]
pub struct SlotGearRow {
    pub bracket: String,
    pub spec_id: i64,
    pub slot_id: u8,
    pub slot_type: String,
    pub item_id: u64,
    pub variant_id: i64,
    pub item_name: String,
    /// Every non-primary stat name joined by `/`
    pub stats: String,
    /// Secondary stat codes, e.g. `HASTE_RATING-CRIT_RATING`
    pub stats_short: String,
    /// Secondary stat short names, e.g. `Haste-Crit`
    pub stats_short_pretty: String,
    pub percent: f64,
    pub rank: usize,
    pub is_best_in_slot: bool,
}

impl LuaRecord for SlotGearRow {
    fn fields(&self) -> Vec<(&'static str, LuaValue<'_>)> {
        vec![
            ("bracket", LuaValue::Str(&self.bracket)),
            ("specId", LuaValue::Int(self.spec_id)),
            ("slotId", LuaValue::Int(i64::from(self.slot_id))),
            ("slotType", LuaValue::Str(&self.slot_type)),
            ("itemId", LuaValue::Int(self.item_id as i64)),
            ("variantId", LuaValue::Int(self.variant_id)),
            ("itemName", LuaValue::Str(&self.item_name)),
            ("stats", LuaValue::Str(&self.stats)),
            ("statsShort", LuaValue::Str(&self.stats_short)),
            ("statsShortPretty", LuaValue::Str(&self.stats_short_pretty)),
            ("percent", LuaValue::Percent(self.percent)),
            ("rank", LuaValue::Int(self.rank as i64)),
            ("isBis", LuaValue::Bool(self.is_best_in_slot)),
        ]
    }
}

/// Build slot gear rows for every bracket, spec and tracked slot
pub fn compile_slot_gear(brackets: &[BracketSnapshot]) -> Vec<SlotGearRow> {
    let mut rows = Vec::new();

    for snapshot in brackets {
        let bracket = snapshot.bracket.table_name();
        for record in &snapshot.records {
            for histogram in &record.histo_maps {
                let Some(slot) = histogram.slot() else {
                    debug!(slot = %histogram.slot_type, "Skipping untracked slot");
                    continue;
                };

                for (idx, entry) in histogram.histo.iter().take(TOP_VARIANTS_PER_SLOT).enumerate() {
                    let rank = idx + 1;
                    rows.push(SlotGearRow {
                        bracket: bracket.clone(),
                        spec_id: leading_int(&record.spec_id),
                        slot_id: slot.summary_slot_id(),
                        slot_type: histogram.slot_type.clone(),
                        item_id: entry.item.item.id,
                        variant_id: leading_int(&entry.id),
                        item_name: entry.item.name.clone(),
                        stats: stat_description(&entry.item),
                        stats_short: stat_tag(&entry.item, StatLabel::Code),
                        stats_short_pretty: stat_tag(&entry.item, StatLabel::Short),
                        percent: entry.percent,
                        rank,
                        is_best_in_slot: rank == 1,
                    });
                }
            }
        }
    }

    rows
}

/// Render slot gear rows as the `GSTSlotGearDb` table
pub fn render_slot_gear(rows: &[SlotGearRow]) -> String {
    let mut table = LuaTable::open("GSTSlotGearDb");
    for row in rows {
        table.record(row);
    }
    table.close("\n\n")
}
