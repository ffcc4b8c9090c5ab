//! Typed view of a deep link's well-known parameters.
//!
//! The parser keeps every key; this module picks out the ones the viewer acts on
//! (`repo`, `orig`) and falls back to the user's configuration for missing values.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::QviewkitConfig;
use crate::link::ParsedLink;

/// Measurement repository the data can be fetched from.
pub const REPO_KEY: &str = "repo";
/// Host the link was generated on.
pub const ORIGIN_KEY: &str = "orig";

/// What a viewer needs to open the linked measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkTarget {
    pub id: String,
    pub repo: Option<String>,
    pub origin: Option<String>,
    /// Creation time when the id is a qkit measurement identifier.
    pub timestamp: Option<u64>,
    /// Parameters without a dedicated field, sorted by key.
    pub extra: BTreeMap<String, String>,
}

impl LinkTarget {
    pub fn resolve(link: &ParsedLink, cfg: &QviewkitConfig) -> Self {
        let repo = link
            .get(REPO_KEY)
            .map(str::to_string)
            .or_else(|| cfg.default_repo.clone());
        let origin = link
            .get(ORIGIN_KEY)
            .map(str::to_string)
            .or_else(|| cfg.default_origin.clone());

        let extra = link
            .params()
            .iter()
            .filter(|(k, _)| k.as_str() != REPO_KEY && k.as_str() != ORIGIN_KEY)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        tracing::debug!(
            id = link.id(),
            repo = repo.as_deref().unwrap_or("-"),
            "resolved deep link"
        );

        Self {
            id: link.id().to_string(),
            repo,
            origin,
            timestamp: link.timestamp(),
            extra,
        }
    }
}
