//! Talent code memoization
//!
//! Top players show up in several brackets, so the same character profile is
//! requested many times per build. Results, including misses, are kept for
//! the lifetime of one build so no request is repeated.

use std::collections::HashMap;

use tracing::{debug, info, warn};

use crate::sources::{specializations_url, ProfileSource};

/// Per-build cache of talent lookups keyed by `<url>#<specId>`
#[derive(Debug, Default)]
pub struct TalentCodeCache {
    entries: HashMap<String, Option<String>>,
}

/// Summary of cache contents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheReport {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl CacheReport {
    fn share(part: usize, total: usize) -> String {
        if total == 0 {
            "0.0".to_string()
        } else {
            format!("{:.1}", part as f64 / total as f64 * 100.0)
        }
    }

    pub fn success_percent(&self) -> String {
        Self::share(self.successful, self.total)
    }

    pub fn failed_percent(&self) -> String {
        Self::share(self.failed, self.total)
    }
}

impl TalentCodeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Active talent code of `character`-`realm` for `spec_id`
    ///
    /// A missing spec, a missing active loadout or a failed request all yield
    /// `None` and are cached as such.
    pub async fn talent_code<S>(
        &mut self,
        source: &S,
        character: &str,
        realm: &str,
        spec_id: &str,
    ) -> Option<String>
    where
        S: ProfileSource + ?Sized,
    {
        let url = specializations_url(source.profile_base(), realm, character);
        let cache_key = format!("{}#{}", url, spec_id);

        if let Some(cached) = self.entries.get(&cache_key) {
            debug!(key = %cache_key, "Using cached talent code");
            return cached.clone();
        }

        debug!(key = %cache_key, "Fetching talent code");
        let code = match source.fetch_specializations(&url).await {
            Ok(profile) => match profile.active_talent_code(spec_id) {
                Ok(code) => Some(code.to_string()),
                Err(miss) => {
                    info!(key = %cache_key, reason = ?miss, "No talent code");
                    None
                }
            },
            Err(e) => {
                warn!(url = %url, error = %e, "Failed to fetch talent code");
                None
            }
        };

        self.entries.insert(cache_key, code.clone());
        code
    }

    pub fn report(&self) -> CacheReport {
        let failed = self.entries.values().filter(|v| v.is_none()).count();
        CacheReport {
            total: self.entries.len(),
            successful: self.entries.len() - failed,
            failed,
        }
    }

    /// Log the cache summary
    pub fn log_report(&self) {
        let report = self.report();
        info!("=== Talent Code Cache Report ===");
        info!("Total talent code requests: {}", report.total);
        info!(
            "Successful talent codes: {} ({}%)",
            report.successful,
            report.success_percent()
        );
        info!(
            "Failed/null talent codes: {} ({}%)",
            report.failed,
            report.failed_percent()
        );
    }
}
