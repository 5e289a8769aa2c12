//! Enchant usage per spec, bracket and slot
//!
//! Every permanent enchantment on every histogram entry contributes that
//! entry's count and percentage to its aggregate. Percentages are summed as
//! they are, without renormalizing, so an enchant used on two variants of a
//! slot reports the combined share.

use std::collections::HashMap;

use gst_common::model::{Enchantment, SlotHistogram};
use gst_common::specs::leading_int;
use gst_common::{EnchantKey, EnchantPolicy};
use tracing::debug;

use super::BracketSnapshot;
use crate::enchant_names::EnchantNameResolver;
use crate::lua::{LuaRecord, LuaTable, LuaValue};

/// Enchantments that show up on gear but mean nothing for players
pub const IGNORED_ENCHANTS: [u32; 2] = [7933, 7924];

/// Accumulated usage of one enchantment within a slot
#[derive(Debug, Clone)]
pub struct EnchantAggregate<'a> {
    /// First enchantment seen for the key
    pub enchant: &'a Enchantment,
    pub count: u64,
    pub percent: f64,
}

/// One row of the enchant table
#[derive(Debug, Clone, PartialEq)]
pub struct EnchantUsageRow {
    pub bracket: String,
    pub spec_id: i64,
    pub slot_type: String,
    pub enchant_id: u32,
    pub enchant_name: String,
    pub enchant_slot_id: u32,
    pub enchant_slot_type: String,
    pub percent: f64,
    pub rank: usize,
}

impl LuaRecord for EnchantUsageRow {
    fn fields(&self) -> Vec<(&'static str, LuaValue<'_>)> {
        vec![
            ("bracket", LuaValue::Str(&self.bracket)),
            ("specId", LuaValue::Int(self.spec_id)),
            ("slotType", LuaValue::Str(&self.slot_type)),
            ("enchantId", LuaValue::Int(i64::from(self.enchant_id))),
            ("enchantName", LuaValue::Str(&self.enchant_name)),
            ("enchantSlotId", LuaValue::Int(i64::from(self.enchant_slot_id))),
            ("enchantSlotType", LuaValue::Str(&self.enchant_slot_type)),
            ("percent", LuaValue::Percent(self.percent)),
            ("rank", LuaValue::Int(self.rank as i64)),
        ]
    }
}

fn counts(enchant: &Enchantment) -> bool {
    enchant.is_permanent() && !IGNORED_ENCHANTS.contains(&enchant.enchantment_id)
}

/// Aggregate the enchantments of one slot histogram, highest percentage first
///
/// Ties keep first-seen order.
pub fn aggregate_enchants(histogram: &SlotHistogram, key: EnchantKey) -> Vec<EnchantAggregate<'_>> {
    let mut aggregates: Vec<EnchantAggregate<'_>> = Vec::new();
    let mut index: HashMap<(u32, Option<&str>, &str), usize> = HashMap::new();

    for entry in &histogram.histo {
        for enchant in entry.item.enchantments().iter().filter(|e| counts(e)) {
            let slot_name = match key {
                EnchantKey::SlotAndType => Some(entry.item.slot_name()),
                EnchantKey::TypeOnly => None,
            };
            let agg_key = (
                enchant.enchantment_id,
                slot_name,
                enchant.enchantment_slot.kind.as_str(),
            );

            match index.get(&agg_key) {
                Some(&pos) => {
                    aggregates[pos].count += entry.count;
                    aggregates[pos].percent += entry.percent;
                }
                None => {
                    index.insert(agg_key, aggregates.len());
                    aggregates.push(EnchantAggregate {
                        enchant,
                        count: entry.count,
                        percent: entry.percent,
                    });
                }
            }
        }
    }

    aggregates.sort_by(|a, b| b.percent.total_cmp(&a.percent));
    aggregates
}

/// Build enchant rows for every bracket, spec and slot
pub fn compile_enchant_usage(
    brackets: &[BracketSnapshot],
    resolver: &EnchantNameResolver,
    policy: EnchantPolicy,
) -> Vec<EnchantUsageRow> {
    let mut rows = Vec::new();

    for snapshot in brackets {
        let bracket = snapshot.bracket.table_name();
        for record in &snapshot.records {
            for histogram in record.histo_maps.iter().filter(|h| !h.histo.is_empty()) {
                let aggregates = aggregate_enchants(histogram, policy.key);
                let limit = policy.cap.unwrap_or(aggregates.len());
                debug!(
                    bracket = %bracket,
                    spec = %record.spec_id,
                    slot = %histogram.slot_type,
                    enchants = aggregates.len(),
                    "Aggregated enchants"
                );

                for (idx, agg) in aggregates.iter().take(limit).enumerate() {
                    rows.push(EnchantUsageRow {
                        bracket: bracket.clone(),
                        spec_id: leading_int(&record.spec_id),
                        slot_type: histogram.slot_type.clone(),
                        enchant_id: agg.enchant.enchantment_id,
                        enchant_name: resolver.resolve(agg.enchant).to_string(),
                        enchant_slot_id: agg.enchant.enchantment_slot.id,
                        enchant_slot_type: agg.enchant.enchantment_slot.kind.clone(),
                        percent: agg.percent,
                        rank: idx + 1,
                    });
                }
            }
        }
    }

    rows
}

/// Render enchant rows as the `GSTEnchantsDb` table
pub fn render_enchant_usage(rows: &[EnchantUsageRow]) -> String {
    let mut table = LuaTable::open("GSTEnchantsDb");
    for row in rows {
        table.record(row);
    }
    table.close("\n")
}
