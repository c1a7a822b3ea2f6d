use serde::{Deserialize, Serialize};

use crate::shared::errors::{AppError, AppResult};

/// How query tokens combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Every token must match some field (AND of per-token ORs)
    #[default]
    Strict,
    /// Any variant of the query or of any token may match (one big OR)
    Broad,
}

impl MatchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchMode::Strict => "strict",
            MatchMode::Broad => "broad",
        }
    }
}

/// Query for searching series by title
#[derive(Debug, Clone)]
pub struct SearchSeriesQuery {
    /// Raw user text; never normalized before tokenizing
    pub text: String,
    pub mode: MatchMode,
}

impl SearchSeriesQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            mode: MatchMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: MatchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reject empty and whitespace-only text
    pub fn validate(&self) -> AppResult<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
