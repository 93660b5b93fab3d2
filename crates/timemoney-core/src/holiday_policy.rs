//! Named holiday lists loaded from configuration.

use serde::{Deserialize, Serialize};

use crate::{CalendarDate, CoreError};

/// A named set of holidays, typically one market's or one jurisdiction's.
///
/// ```json
/// { "name": "us-2011", "holidays": ["2011-07-04", "2011-09-05"] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayPolicy {
    pub name: String,
    #[serde(default)]
    pub holidays: Vec<CalendarDate>,
}

impl HolidayPolicy {
    pub fn new(name: impl Into<String>, holidays: Vec<CalendarDate>) -> Self {
        Self {
            name: name.into(),
            holidays,
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(input)?)
    }

    pub fn to_json_string(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string(self)?)
    }
}
