//! Recompiled slots
//!
//! The game treats the two finger slots and the two trinket slots as
//! interchangeable, so usage is reported per virtual slot. Entries for the
//! same variant in either physical slot are merged by summing counts, then
//! ranked by count since percentages of different slots are not comparable.

use std::collections::HashMap;

use gst_common::model::{HistoEntry, SpecRecord};
use gst_common::slots::RecompiledSlot;

/// A histogram entry with its effective usage count
#[derive(Debug, Clone, Copy)]
pub struct RankedEntry<'a> {
    pub entry: &'a HistoEntry,
    /// Summed count across merged physical slots
    pub count: u64,
}

/// Which slot a ranked sequence describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupKind<'a> {
    /// A physical slot, by upstream slot code
    Slot(&'a str),
    Recompiled(RecompiledSlot),
}

/// Ranked entries of one effective slot; index 0 is best-in-slot
#[derive(Debug, Clone)]
pub struct SlotGroup<'a> {
    pub kind: GroupKind<'a>,
    pub entries: Vec<RankedEntry<'a>>,
}

/// Merge entries by variant id and sort by descending summed count
///
/// The first occurrence of a variant keeps its item and percentage. The sort
/// is stable, so equal counts keep first-seen order.
pub fn merge_entries<'a, I>(entries: I) -> Vec<RankedEntry<'a>>
where
    I: IntoIterator<Item = &'a HistoEntry>,
{
    let mut merged: Vec<RankedEntry<'a>> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();

    for entry in entries {
        match index.get(entry.id.as_str()) {
            Some(&pos) => merged[pos].count += entry.count,
            None => {
                index.insert(entry.id.as_str(), merged.len());
                merged.push(RankedEntry {
                    entry,
                    count: entry.count,
                });
            }
        }
    }

    merged.sort_by(|a, b| b.count.cmp(&a.count));
    merged
}

/// Effective slot sequences of a spec
///
/// Regular slots come first in upstream order with their entries untouched,
/// followed by the merged finger group and the merged trinket group.
pub fn slot_groups(record: &SpecRecord) -> Vec<SlotGroup<'_>> {
    let mut groups = Vec::new();
    let mut fingers: Vec<&HistoEntry> = Vec::new();
    let mut trinkets: Vec<&HistoEntry> = Vec::new();

    for histo_map in &record.histo_maps {
        match histo_map.slot().and_then(|s| s.recompiled()) {
            Some(RecompiledSlot::Finger) => fingers.extend(histo_map.histo.iter()),
            Some(RecompiledSlot::Trinket) => trinkets.extend(histo_map.histo.iter()),
            None => groups.push(SlotGroup {
                kind: GroupKind::Slot(&histo_map.slot_type),
                entries: histo_map
                    .histo
                    .iter()
                    .map(|entry| RankedEntry {
                        entry,
                        count: entry.count,
                    })
                    .collect(),
            }),
        }
    }

    groups.push(SlotGroup {
        kind: GroupKind::Recompiled(RecompiledSlot::Finger),
        entries: merge_entries(fingers),
    });
    groups.push(SlotGroup {
        kind: GroupKind::Recompiled(RecompiledSlot::Trinket),
        entries: merge_entries(trinkets),
    });

    groups
}
