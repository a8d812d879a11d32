//! Catalog configuration.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use catalog_core::{DomainError, DomainResult};

/// Maximum number of candidates a search considers unless configured otherwise.
pub const DEFAULT_RESULT_LIMIT: usize = 10;

pub const RESULT_LIMIT_ENV: &str = "CATALOG_RESULT_LIMIT";
pub const SELECTION_POLICY_ENV: &str = "CATALOG_SELECTION_POLICY";

/// Order in which matching products are considered before the result window
/// is cut.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Ascending product id.
    #[default]
    Id,
    /// Order in which products were added. A product deleted and added again
    /// counts as new.
    Insertion,
}

impl FromStr for SelectionPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(Self::Id),
            "insertion" => Ok(Self::Insertion),
            other => Err(DomainError::validation(format!(
                "unknown selection policy '{other}' (expected 'id' or 'insertion')"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub result_limit: usize,
    pub selection: SelectionPolicy,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            result_limit: DEFAULT_RESULT_LIMIT,
            selection: SelectionPolicy::default(),
        }
    }
}

impl CatalogConfig {
    pub fn with_result_limit(mut self, result_limit: usize) -> Self {
        self.result_limit = result_limit;
        self
    }

    pub fn with_selection(mut self, selection: SelectionPolicy) -> Self {
        self.selection = selection;
        self
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.result_limit == 0 {
            return Err(DomainError::validation("result_limit must be positive"));
        }
        Ok(())
    }

    /// Build from `CATALOG_RESULT_LIMIT` / `CATALOG_SELECTION_POLICY`.
    ///
    /// Unset or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`CatalogConfig::from_env`], reading values through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(RESULT_LIMIT_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(limit) if limit > 0 => config.result_limit = limit,
                _ => tracing::warn!(
                    value = %raw,
                    default = DEFAULT_RESULT_LIMIT,
                    "{RESULT_LIMIT_ENV} is not a positive integer; using default"
                ),
            }
        }

        if let Some(raw) = lookup(SELECTION_POLICY_ENV) {
            match raw.parse::<SelectionPolicy>() {
                Ok(selection) => config.selection = selection,
                Err(e) => tracing::warn!(error = %e, "{SELECTION_POLICY_ENV} ignored; using default"),
            }
        }

        config
    }
}
