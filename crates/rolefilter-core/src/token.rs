use serde::{Deserialize, Serialize};
use std::fmt;

/// A single search-filter literal: one status/step pair the host query
/// engine matches on, rendered as `'<status>':'<step>'`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterToken {
    pub status: String,
    pub step: String,
}

impl FilterToken {
    pub fn new(status: impl Into<String>, step: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            step: step.into(),
        }
    }

    /// The literal form consumed by the query engine.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FilterToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}':'{}'", self.status, self.step)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
