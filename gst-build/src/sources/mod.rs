//! Upstream data sources
//!
//! The build reads three kinds of external data: bracket snapshots, the
//! enchantment catalog and per-character specialization profiles. Each is
//! behind a trait so the pipeline can run against in-memory data.

pub mod http;

use async_trait::async_trait;
use gst_common::model::{CatalogEnchant, CharacterSpecializations, Snapshot};
use gst_common::Bracket;
use thiserror::Error;

pub use http::HttpSource;

/// Upstream fetch errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("API error {0}: {1}")]
    ApiError(u16, String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<FetchError> for gst_common::Error {
    fn from(err: FetchError) -> Self {
        gst_common::Error::Upstream(err.to_string())
    }
}

/// Snapshot store and enchantment catalog
#[async_trait]
pub trait GearSource: Send + Sync {
    /// Fetch the snapshot of one bracket
    async fn fetch_snapshot(&self, bracket: &Bracket) -> Result<Snapshot, FetchError>;

    /// Fetch the full enchantment catalog
    async fn fetch_enchant_catalog(&self) -> Result<Vec<CatalogEnchant>, FetchError>;
}

/// Per-character specialization profiles
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Base of the character profile URL, see [`specializations_url`]
    fn profile_base(&self) -> &str;

    /// Fetch the specialization payload at `url`
    async fn fetch_specializations(
        &self,
        url: &str,
    ) -> Result<CharacterSpecializations, FetchError>;
}

/// Specialization endpoint of a character
pub fn specializations_url(base: &str, realm: &str, character: &str) -> String {
    format!(
        "{}/{}/{}/specializations?namespace=profile-us&locale=en_US",
        base,
        realm,
        character.to_lowercase()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specializations_url_lowercases_name() {
        assert_eq!(
            specializations_url("https://profiles.example/character", "area-52", "Thrallmar"),
            "https://profiles.example/character/area-52/thrallmar/specializations?namespace=profile-us&locale=en_US"
        );
    }

    #[test]
    fn test_fetch_error_becomes_upstream_error() {
        let err: gst_common::Error = FetchError::ApiError(503, "busy".to_string()).into();
        assert!(matches!(err, gst_common::Error::Upstream(ref msg) if msg == "API error 503: busy"));
    }
}
