//! Talent loadouts of top players
//!
//! Each spec record links a handful of top characters. Their active talent
//! code is looked up one character at a time through the talent cache.

use std::cmp::Reverse;

use gst_common::specs::{class_id_for_spec, leading_int};
use tracing::{debug, info};

use super::BracketSnapshot;
use crate::lua::{LuaRecord, LuaTable, LuaValue};
use crate::sources::ProfileSource;
use crate::talent_cache::TalentCodeCache;

/// Characters looked up per spec record
pub const TOP_LINKS_PER_SPEC: usize = 5;

/// One row of the loadout table
#[derive(Debug, Clone, PartialEq)]
pub struct LoadoutRow {
    pub bracket: String,
    /// Position of the link, kept even when earlier links were skipped
    pub rank: usize,
    /// `name-realm`
    pub name: String,
    pub code: String,
    pub class_id: u32,
    pub spec_id: i64,
}

impl LuaRecord for LoadoutRow {
    fn fields(&self) -> Vec<(&'static str, LuaValue<'_>)> {
        vec![
            ("bracket", LuaValue::Str(&self.bracket)),
            ("rank", LuaValue::Int(self.rank as i64)),
            ("name", LuaValue::Str(&self.name)),
            ("code", LuaValue::Str(&self.code)),
            ("classId", LuaValue::Int(i64::from(self.class_id))),
            ("specId", LuaValue::Int(self.spec_id)),
        ]
    }
}

/// Look up talent codes for the top links of every spec record
///
/// Lookups run sequentially. A link without a usable code emits no row.
pub async fn compile_loadouts<S>(
    brackets: &[BracketSnapshot],
    profiles: &S,
    cache: &mut TalentCodeCache,
) -> Vec<LoadoutRow>
where
    S: ProfileSource + ?Sized,
{
    let mut rows = Vec::new();

    for snapshot in brackets {
        let bracket = snapshot.bracket.table_name();
        for record in snapshot.records.iter().filter(|r| !r.links.is_empty()) {
            // Every link shares the record's played count, so this keeps link order
            let mut links = record.links.clone();
            links.sort_by_key(|_| Reverse(record.stats.played));

            for (idx, link) in links.iter().take(TOP_LINKS_PER_SPEC).enumerate() {
                let rank = idx + 1;
                let Some(code) = cache
                    .talent_code(profiles, &link.name, &link.realm, &record.spec_id)
                    .await
                else {
                    debug!(
                        bracket = %bracket,
                        spec = %record.spec_id,
                        character = %link.name,
                        realm = %link.realm,
                        rank,
                        "Skipping link without talent code"
                    );
                    continue;
                };

                rows.push(LoadoutRow {
                    bracket: bracket.clone(),
                    rank,
                    name: format!("{}-{}", link.name, link.realm),
                    code,
                    class_id: class_id_for_spec(&record.spec_id),
                    spec_id: leading_int(&record.spec_id),
                });
            }
        }
    }

    info!(rows = rows.len(), "Compiled loadouts");
    rows
}

/// Render loadout rows as the `GSTLoadoutsDb` table
pub fn render_loadouts(rows: &[LoadoutRow]) -> String {
    let mut table = LuaTable::open("GSTLoadoutsDb");
    for row in rows {
        table.record(row);
    }
    table.close("\n")
}
