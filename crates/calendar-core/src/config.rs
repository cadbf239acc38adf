//! Tunable limits and defaults for the calendar core.
//!
//! Every field has a default, so an empty JSON object (`{}`) is a complete
//! configuration. The defaults reproduce the widget's stock behaviour.

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, Result};

/// Runtime configuration shared by the validator, drafts and view helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Longest accepted title, in characters.
    pub max_title_chars: usize,
    /// Longest accepted description, in characters.
    pub max_description_chars: usize,
    /// Events shown in a month cell before the rest collapse into "+N more".
    pub visible_events_per_cell: usize,
    /// Length of a freshly opened draft.
    pub default_duration_minutes: i64,
    pub default_color: String,
    /// Generated ids look like `{id_prefix}-{uuid}`.
    pub id_prefix: String,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            max_title_chars: 100,
            max_description_chars: 500,
            visible_events_per_cell: 3,
            default_duration_minutes: 60,
            default_color: "#3b82f6".to_string(),
            id_prefix: "evt".to_string(),
        }
    }
}

impl CalendarConfig {
    /// Parse a JSON document and check it with [`CalendarConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make the validator or views degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.max_title_chars == 0 {
            return Err(CalendarError::InvalidConfig(
                "max_title_chars must be at least 1".to_string(),
            ));
        }
        if self.max_description_chars == 0 {
            return Err(CalendarError::InvalidConfig(
                "max_description_chars must be at least 1".to_string(),
            ));
        }
        if self.visible_events_per_cell == 0 {
            return Err(CalendarError::InvalidConfig(
                "visible_events_per_cell must be at least 1".to_string(),
            ));
        }
        if self.default_duration_minutes <= 0 {
            return Err(CalendarError::InvalidConfig(format!(
                "default_duration_minutes must be positive, got {}",
                self.default_duration_minutes
            )));
        }
        Ok(())
    }
}
