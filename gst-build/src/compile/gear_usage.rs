//! Per-bracket gear usage tables
//!
//! One line per item variant keyed by `<specId><variantId>`, carrying the
//! usage percentage, the rank within its slot and, for everything but the
//! top entry, a pointer to the best-in-slot item.

use gst_common::model::SpecRecord;
use tracing::debug;

use super::slot_aggregator::{slot_groups, RankedEntry};
use super::stat_tag::{stat_tag, StatLabel};
use crate::lua::{percent, LuaTable};

/// Usage of one item variant
#[derive(Debug, Clone, PartialEq)]
pub struct GearUsageRow {
    pub key: String,
    pub percent: f64,
    /// 1-based position in its slot
    pub rank: usize,
    /// Empty for best-in-slot, otherwise describes the best-in-slot entry
    pub best_in_slot: String,
}

/// A line of a gear usage table
#[derive(Debug, Clone, PartialEq)]
pub enum GearUsageLine {
    /// Number of profiles compared for a spec
    ProfileCount { spec_id: String, count: u64 },
    Usage(GearUsageRow),
}

/// Tooltip text pointing at the best-in-slot entry from a lower rank
///
/// `#n` is the annotated entry's own 1-based rank.
pub fn best_in_slot_note(best: &RankedEntry<'_>, rank: usize) -> String {
    format!(
        "{} ({}) ({}% - #{})",
        best.entry.item.name,
        stat_tag(&best.entry.item, StatLabel::Short),
        percent(best.entry.percent),
        rank
    )
}

/// Build the gear usage lines of one bracket snapshot
pub fn compile_gear_usage(snapshot: &[SpecRecord]) -> Vec<GearUsageLine> {
    let mut lines = Vec::new();

    for record in snapshot {
        if let Some(count) = record.profiles_compared_count.filter(|&c| c > 0) {
            lines.push(GearUsageLine::ProfileCount {
                spec_id: record.spec_id.clone(),
                count,
            });
        }

        for group in slot_groups(record) {
            let Some(best) = group.entries.first() else {
                continue;
            };
            debug!(spec = %record.spec_id, slot = ?group.kind, entries = group.entries.len(), "Ranking slot");

            for (idx, ranked) in group.entries.iter().enumerate() {
                let rank = idx + 1;
                lines.push(GearUsageLine::Usage(GearUsageRow {
                    key: format!("{}{}", record.spec_id, ranked.entry.id),
                    percent: ranked.entry.percent,
                    rank,
                    best_in_slot: if rank == 1 {
                        String::new()
                    } else {
                        best_in_slot_note(best, rank)
                    },
                }));
            }
        }
    }

    lines
}

/// Render gear usage lines as the `db_name` table
pub fn render_gear_usage(db_name: &str, lines: &[GearUsageLine]) -> String {
    let mut table = LuaTable::open(db_name);
    for line in lines {
        match line {
            GearUsageLine::ProfileCount { spec_id, count } => {
                table.scalar(&format!("{}_profileCount", spec_id), count);
            }
            GearUsageLine::Usage(row) => {
                table.usage(&row.key, row.percent, row.rank, &row.best_in_slot);
            }
        }
    }
    table.close("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(id: &str, name: &str, count: u64, percent: f64) -> serde_json::Value {
        json!({
            "id": id,
            "count": count,
            "percent": percent,
            "item": {
                "name": name,
                "item": {"id": 100},
                "stats": [
                    {"type": {"type": "HASTE_RATING", "name": "Haste"}, "value": 120},
                    {"type": {"type": "MASTERY_RATING", "name": "Mastery"}, "value": 60}
                ]
            }
        })
    }

    fn usage_rows(lines: &[GearUsageLine]) -> Vec<&GearUsageRow> {
        lines
            .iter()
            .filter_map(|l| match l {
                GearUsageLine::Usage(row) => Some(row),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_ranks_and_best_in_slot_notes() {
        let snapshot: Vec<SpecRecord> = serde_json::from_value(json!([{
            "specId": "262",
            "histoMaps": [{
                "slotType": "HEAD",
                "histo": [
                    entry("1", "Crown of \"Storms\"", 55, 55.0),
                    entry("2", "Hood", 30, 30.0),
                    entry("3", "Cap", 15, 15.0)
                ]
            }]
        }]))
        .unwrap();

        let lines = compile_gear_usage(&snapshot);
        let rows = usage_rows(&lines);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].key, "2621");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[0].best_in_slot, "");
        assert_eq!(rows[1].rank, 2);
        assert_eq!(
            rows[1].best_in_slot,
            "Crown of \"Storms\" (Haste-Mastery) (55.0% - #2)"
        );
        assert_eq!(rows[2].rank, 3);
        assert_eq!(
            rows[2].best_in_slot,
            "Crown of \"Storms\" (Haste-Mastery) (55.0% - #3)"
        );

        let text = render_gear_usage("usageDbPvE", &lines);
        assert!(text.starts_with("usageDbPvE = {\n[\"2621\"] = {55.0, 1, \"\"},\n"));
        assert!(text.contains(
            "[\"2622\"] = {30.0, 2, \"Crown of \\\"Storms\\\" (Haste-Mastery) (55.0% - #2)\"},\n"
        ));
        assert!(text.ends_with("};"));
    }

    #[test]
    fn test_profile_count_line_only_when_present() {
        let snapshot: Vec<SpecRecord> = serde_json::from_value(json!([
            {"specId": "250", "histoMaps": [], "profilesComparedCount": 1234},
            {"specId": "251", "histoMaps": [], "profilesComparedCount": 0},
            {"specId": "252", "histoMaps": []}
        ]))
        .unwrap();

        let lines = compile_gear_usage(&snapshot);
        assert_eq!(
            lines,
            vec![GearUsageLine::ProfileCount {
                spec_id: "250".to_string(),
                count: 1234
            }]
        );
        assert_eq!(
            render_gear_usage("usageDb3v3", &lines),
            "usageDb3v3 = {\n[\"250_profileCount\"] = 1234,\n};"
        );
    }

    #[test]
    fn test_recompiled_slots_ranked_by_summed_count() {
        let snapshot: Vec<SpecRecord> = serde_json::from_value(json!([{
            "specId": "70",
            "histoMaps": [
                {"slotType": "TRINKET_1", "histo": [entry("10", "Idol", 8, 40.0), entry("11", "Badge", 6, 30.0)]},
                {"slotType": "TRINKET_2", "histo": [entry("11", "Badge", 7, 35.0)]},
                {"slotType": "BACK", "histo": [entry("20", "Cloak", 20, 100.0)]}
            ]
        }]))
        .unwrap();

        let lines = compile_gear_usage(&snapshot);
        let rows = usage_rows(&lines);
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["7020", "7011", "7010"]);
        assert_eq!(rows[1].rank, 1);
        assert_eq!(rows[1].percent, 30.0);
        assert_eq!(rows[2].rank, 2);
        assert_eq!(rows[2].best_in_slot, "Badge (Haste-Mastery) (30.0% - #2)");
    }
}
