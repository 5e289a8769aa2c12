//! Artifact compilers
//!
//! Each compiler walks fetched bracket snapshots and produces the rows of one
//! Lua table. Compilers are pure apart from the loadout compiler, which looks
//! up talent codes through a [`ProfileSource`](crate::sources::ProfileSource).

pub mod bracket_names;
pub mod enchant_usage;
pub mod gear_usage;
pub mod loadouts;
pub mod slot_aggregator;
pub mod slot_gear;
pub mod stat_tag;

use gst_common::model::Snapshot;
use gst_common::Bracket;

/// A fetched snapshot together with the bracket it belongs to
#[derive(Debug, Clone)]
pub struct BracketSnapshot {
    pub bracket: Bracket,
    pub records: Snapshot,
}
