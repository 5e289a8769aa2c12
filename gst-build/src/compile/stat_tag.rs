//! Secondary stat signatures
//!
//! Two variants of the same item often differ only in their secondary stat
//! allocation. The signature (`Haste-Vers`) tells them apart in tooltips.

use gst_common::model::{Item, Stat};

/// How each stat of a signature is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatLabel {
    /// `Crit`, `Haste`, `Mastery`, `Vers`
    Short,
    /// Raw upstream code, e.g. `HASTE_RATING`
    Code,
}

/// Secondary stats of an item, highest value first, joined by `-`
///
/// Primary stats and zero or missing values are ignored. Equal values keep
/// their upstream order. Items without stats yield an empty string.
pub fn stat_tag(item: &Item, label: StatLabel) -> String {
    let mut secondaries: Vec<&Stat> = item
        .stats()
        .iter()
        .filter(|s| s.descriptor.as_ref().is_some_and(|d| d.is_secondary()))
        .filter(|s| s.value_or_zero() > 0.0)
        .collect();

    // sort_by is stable, ties stay in list order
    secondaries.sort_by(|a, b| b.value_or_zero().total_cmp(&a.value_or_zero()));

    secondaries
        .iter()
        .filter_map(|s| s.descriptor.as_ref())
        .map(|d| match label {
            StatLabel::Short => d.short_name().unwrap_or(d.code.as_str()),
            StatLabel::Code => d.code.as_str(),
        })
        .collect::<Vec<_>>()
        .join("-")
}

/// Every non-primary stat name of an item, in upstream order, joined by `/`
pub fn stat_description(item: &Item) -> String {
    item.stats()
        .iter()
        .filter_map(|s| s.descriptor.as_ref())
        .filter(|d| !d.is_primary())
        .map(|d| d.display_name())
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(stats: serde_json::Value) -> Item {
        serde_json::from_value(json!({
            "name": "Band of Testing",
            "item": {"id": 5},
            "stats": stats
        }))
        .unwrap()
    }

    fn typed(code: &str, name: &str, value: i64) -> serde_json::Value {
        json!({"type": {"type": code, "name": name}, "value": value})
    }

    #[test]
    fn test_tag_orders_by_value_with_stable_ties() {
        let it = item(json!([
            typed("HASTE_RATING", "Haste", 120),
            typed("CRIT_RATING", "Critical Strike", 80),
            typed("VERSATILITY", "Versatility", 80),
        ]));
        assert_eq!(stat_tag(&it, StatLabel::Short), "Haste-Crit-Vers");
        assert_eq!(
            stat_tag(&it, StatLabel::Code),
            "HASTE_RATING-CRIT_RATING-VERSATILITY"
        );
    }

    #[test]
    fn test_tag_is_repeatable() {
        let it = item(json!([
            typed("MASTERY_RATING", "Mastery", 50),
            typed("HASTE_RATING", "Haste", 50),
        ]));
        let first = stat_tag(&it, StatLabel::Short);
        assert_eq!(first, "Mastery-Haste");
        assert_eq!(stat_tag(&it, StatLabel::Short), first);
    }

    #[test]
    fn test_tag_ignores_primary_and_zero_values() {
        let it = item(json!([
            typed("INTELLECT", "Intellect", 500),
            typed("STAMINA", "Stamina", 900),
            typed("CRIT_RATING", "Critical Strike", 0),
            {"type": {"type": "MASTERY_RATING", "name": "Mastery"}},
            typed("VERSATILITY", "Versatility", 30),
        ]));
        assert_eq!(stat_tag(&it, StatLabel::Short), "Vers");
    }

    #[test]
    fn test_tag_accepts_bare_string_types() {
        let it = item(json!([
            {"type": "HASTE_RATING", "value": 10},
            {"type": "CRIT_RATING", "value": 20},
        ]));
        assert_eq!(stat_tag(&it, StatLabel::Short), "Crit-Haste");
    }

    #[test]
    fn test_missing_stats_degrade_to_empty() {
        let it: Item = serde_json::from_value(json!({
            "name": "Plain Cloak",
            "item": {"id": 6}
        }))
        .unwrap();
        assert_eq!(stat_tag(&it, StatLabel::Short), "");
        assert_eq!(stat_tag(&it, StatLabel::Code), "");
        assert_eq!(stat_description(&it), "");
    }

    #[test]
    fn test_description_skips_primary_stats() {
        let it = item(json!([
            typed("STAMINA", "Stamina", 900),
            typed("AGILITY", "Agility", 400),
            typed("HASTE_RATING", "Haste", 120),
            typed("VERSATILITY", "Versatility", 80),
            typed("AVOIDANCE_RATING", "Avoidance", 40),
        ]));
        assert_eq!(stat_description(&it), "Haste/Versatility/Avoidance");
    }

    #[test]
    fn test_description_uses_code_for_bare_types() {
        let it = item(json!([
            {"type": "MASTERY_RATING", "value": 15},
            {"type": "Stamina", "value": 100},
        ]));
        assert_eq!(stat_description(&it), "MASTERY_RATING");
    }
}
