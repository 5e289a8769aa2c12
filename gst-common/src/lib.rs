//! # GST Common Library
//!
//! Shared code for the gear stat table builder:
//! - Snapshot and catalog payload models
//! - Equipment slot and bracket tables
//! - Specialization to class mapping
//! - Build configuration
//! - Common error type

pub mod brackets;
pub mod config;
pub mod error;
pub mod model;
pub mod slots;
pub mod specs;

pub use brackets::Bracket;
pub use config::{BuildConfig, EnchantKey, EnchantPolicy};
pub use error::{Error, Result};
pub use slots::EquipmentSlot;
