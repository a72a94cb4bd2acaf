//! Search report: a JSON summary of one run with a deterministic digest.
//!
//! The digest covers the normative fields only. Wall-clock time is reported
//! in [`SearchReport::to_json_value`] but never hashed, so two runs of the
//! same search over the same world yield the same digest.

use serde_json::{json, Value};
use sha2::{Digest, Sha256};
use wayfarer_search::error::SearchError;
use wayfarer_search::metrics::SearchMetrics;

use crate::error::RunError;

/// Domain prefix for search report hashing. Null-terminated.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"WAYFARER::SEARCH_REPORT::V1\0";

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Goal reached.
    Found,
    /// Frontier exhausted without reaching the goal.
    Unreachable,
    /// Depth limit hit before the goal or exhaustion.
    DepthLimitReached,
    /// Expansion budget spent.
    ExpansionBudgetExceeded,
    /// Any other failure, with its rendered message.
    Failed { detail: String },
}

impl RunOutcome {
    #[must_use]
    pub fn from_result(result: &Result<(), SearchError>) -> Self {
        match result {
            Ok(()) => Self::Found,
            Err(SearchError::Unreachable) => Self::Unreachable,
            Err(SearchError::DepthLimitReached { .. }) => Self::DepthLimitReached,
            Err(SearchError::ExpansionBudgetExceeded { .. }) => Self::ExpansionBudgetExceeded,
            Err(other) => Self::Failed {
                detail: other.to_string(),
            },
        }
    }

    /// Stable snake-case label used in JSON.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Found => "found",
            Self::Unreachable => "unreachable",
            Self::DepthLimitReached => "depth_limit_reached",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Summary of a single search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchReport {
    pub algorithm: String,
    pub outcome: RunOutcome,
    /// Number of states on the path, 0 when no path was found.
    pub path_len: usize,
    pub path_cost: Option<f64>,
    pub expanded: u64,
    pub branches: u64,
    pub memory: usize,
    /// Wall-clock seconds. Excluded from the digest.
    pub elapsed_secs: f64,
}

impl SearchReport {
    #[must_use]
    pub fn new(
        algorithm: &str,
        result: &Result<(), SearchError>,
        metrics: &SearchMetrics,
        path_len: usize,
    ) -> Self {
        Self {
            algorithm: algorithm.to_string(),
            outcome: RunOutcome::from_result(result),
            path_len,
            path_cost: metrics.path_cost,
            expanded: metrics.expanded,
            branches: metrics.branches,
            memory: metrics.memory,
            elapsed_secs: metrics.timer(),
        }
    }

    #[must_use]
    pub fn is_found(&self) -> bool {
        self.outcome == RunOutcome::Found
    }

    /// Full report, including timing.
    #[must_use]
    pub fn to_json_value(&self) -> Value {
        let mut value = self.normative_json();
        if let Value::Object(map) = &mut value {
            map.insert("elapsed_secs".into(), json!(self.elapsed_secs));
        }
        value
    }

    fn normative_json(&self) -> Value {
        let mut value = json!({
            "schema_version": "search_report.v1",
            "algorithm": self.algorithm,
            "outcome": self.outcome.as_str(),
            "path_len": self.path_len,
            "path_cost": self.path_cost,
            "expanded": self.expanded,
            "branches": self.branches,
            "memory": self.memory,
        });
        if let (RunOutcome::Failed { detail }, Value::Object(map)) = (&self.outcome, &mut value) {
            map.insert("detail".into(), json!(detail));
        }
        value
    }

    /// Sorted-key compact JSON of the normative fields.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Serialization`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, RunError> {
        Ok(serde_json::to_vec(&self.normative_json())?)
    }

    /// `"sha256:<hex>"` over [`DOMAIN_SEARCH_REPORT`] followed by the
    /// canonical bytes.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Serialization`] if serialization fails.
    pub fn digest(&self) -> Result<String, RunError> {
        let bytes = self.to_canonical_json_bytes()?;
        let mut hasher = Sha256::new();
        hasher.update(DOMAIN_SEARCH_REPORT);
        hasher.update(&bytes);
        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}
