//! # gst-build
//!
//! Builds the gear stat tables loaded by the in-game addon: per-bracket gear
//! usage, top player talent loadouts, enchant usage and per-slot gear
//! variants, all as Lua table literals.

pub mod compile;
pub mod enchant_names;
pub mod lua;
pub mod pipeline;
pub mod sources;
pub mod talent_cache;

pub use pipeline::{run_build, run_brackets, BuildReport};
pub use sources::{FetchError, GearSource, HttpSource, ProfileSource};
