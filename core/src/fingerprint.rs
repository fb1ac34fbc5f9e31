//! Structural fingerprints of query expressions, used as cache keys.

use sha2::{Digest, Sha256};

use crate::error::{FluentQueryError, Result};
use crate::expression::QueryExpression;

/// Which execution path a cached result belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RetrievalMode {
    /// A single backend call
    Page,
    /// Every page, concatenated
    All,
}

impl RetrievalMode {
    const fn as_str(self) -> &'static str {
        match self {
            RetrievalMode::Page => "page",
            RetrievalMode::All => "all",
        }
    }
}

/// SHA-256 over the canonical JSON encoding of `query`, as lowercase hex.
///
/// Column sets are ordered sets and attribute maps are sorted, so two
/// expressions produce the same fingerprint exactly when they are equal.
pub fn fingerprint(query: &QueryExpression) -> Result<String> {
    let canonical =
        serde_json::to_vec(query).map_err(|e| FluentQueryError::Fingerprint(e.to_string()))?;
    let digest = Sha256::digest(&canonical);
    Ok(digest.iter().map(|b| format!("{b:02x}")).collect())
}

/// Cache key for `query` executed through `mode`.
pub fn cache_key(query: &QueryExpression, mode: RetrievalMode) -> Result<String> {
    Ok(format!(
        "{}:{}:{}",
        mode.as_str(),
        query.entity_name,
        fingerprint(query)?
    ))
}
