// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tunables for the search service.
//!
//! Defaults match the public API contract: 50 results per page (max 100),
//! 10 autocomplete suggestions (max 20), autocomplete needs 2+ characters.
//! A config can be deserialized from JSON; missing fields take the defaults.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Default page size for `search`.
pub const DEFAULT_LIMIT: usize = 50;

/// Upper bound for `search` page size.
pub const MAX_LIMIT: usize = 100;

/// Default number of autocomplete suggestions.
pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Upper bound for autocomplete suggestions.
pub const MAX_AUTOCOMPLETE_LIMIT: usize = 20;

/// Autocomplete queries shorter than this return nothing.
pub const MIN_AUTOCOMPLETE_CHARS: usize = 2;

/// Candidate count above which scoring fans out to the rayon pool.
pub const PARALLEL_THRESHOLD: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchConfig {
    pub default_limit: usize,
    pub max_limit: usize,
    pub default_autocomplete_limit: usize,
    pub max_autocomplete_limit: usize,
    pub min_autocomplete_chars: usize,
    pub parallel_threshold: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
            max_limit: MAX_LIMIT,
            default_autocomplete_limit: DEFAULT_AUTOCOMPLETE_LIMIT,
            max_autocomplete_limit: MAX_AUTOCOMPLETE_LIMIT,
            min_autocomplete_chars: MIN_AUTOCOMPLETE_CHARS,
            parallel_threshold: PARALLEL_THRESHOLD,
        }
    }
}

impl SearchConfig {
    /// Check that limits are non-zero, maximums stay under the public API caps
    /// (`MAX_LIMIT`, `MAX_AUTOCOMPLETE_LIMIT`) and defaults fit under their
    /// maximums.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("defaultLimit", self.default_limit),
            ("maxLimit", self.max_limit),
            ("defaultAutocompleteLimit", self.default_autocomplete_limit),
            ("maxAutocompleteLimit", self.max_autocomplete_limit),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { field });
            }
        }

        for (field, value, cap) in [
            ("maxLimit", self.max_limit, MAX_LIMIT),
            ("maxAutocompleteLimit", self.max_autocomplete_limit, MAX_AUTOCOMPLETE_LIMIT),
        ] {
            if value > cap {
                return Err(ConfigError::AboveCap { field, value, cap });
            }
        }

        if self.default_limit > self.max_limit {
            return Err(ConfigError::DefaultAboveMax {
                default_field: "defaultLimit",
                default: self.default_limit,
                max_field: "maxLimit",
                max: self.max_limit,
            });
        }

        if self.default_autocomplete_limit > self.max_autocomplete_limit {
            return Err(ConfigError::DefaultAboveMax {
                default_field: "defaultAutocompleteLimit",
                default: self.default_autocomplete_limit,
                max_field: "maxAutocompleteLimit",
                max: self.max_autocomplete_limit,
            });
        }

        Ok(())
    }

    /// `max_limit`, never above `MAX_LIMIT` even for an unvalidated config.
    pub fn search_limit_cap(&self) -> usize {
        self.max_limit.min(MAX_LIMIT)
    }

    /// `max_autocomplete_limit`, never above `MAX_AUTOCOMPLETE_LIMIT`.
    pub fn autocomplete_limit_cap(&self) -> usize {
        self.max_autocomplete_limit.min(MAX_AUTOCOMPLETE_LIMIT)
    }
}
