//! Provider-agnostic job representation handed to the aggregation layer.

use crate::Result;
use chrono::{DateTime, NaiveDate, Utc};
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

/// Normalized job posting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Job {
    /// Job title
    pub title: String,
    /// Display name, mirrors the title for most providers
    pub name: String,
    /// Description or snippet
    pub description: String,
    /// Link to the posting
    pub url: String,
    /// Identifier of the posting at the source
    pub source_id: String,
    /// Location as reported by the source
    pub location: String,
    /// Hiring company
    pub company: Option<String>,
    /// City parsed from the location
    pub city: Option<String>,
    /// State parsed from the location
    pub state: Option<String>,
    /// Posting date exactly as the source reported it
    pub date_posted_raw: Option<String>,
    /// Posting date, when the source string could be understood
    pub date_posted: Option<DateTime<Utc>>,
}

impl Job {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// JSON Schema describing a serialized job
    pub fn json_schema() -> Result<serde_json::Value> {
        Ok(serde_json::to_value(schema_for!(Self))?)
    }

    pub fn set_city(&mut self, city: impl Into<String>) -> &mut Self {
        self.city = Some(city.into());
        self
    }

    pub fn set_state(&mut self, state: impl Into<String>) -> &mut Self {
        self.state = Some(state.into());
        self
    }

    pub fn set_company(&mut self, company: impl Into<String>) -> &mut Self {
        self.company = Some(company.into());
        self
    }

    /// Record the posting date from its string form.
    ///
    /// The string is kept verbatim; `date_posted` is only filled when it
    /// parses as RFC 2822, RFC 3339 or a bare `YYYY-MM-DD` date.
    pub fn set_date_posted_as_string(&mut self, date: impl Into<String>) -> &mut Self {
        let date = date.into();
        self.date_posted = parse_posted_date(&date);
        self.date_posted_raw = Some(date);
        self
    }
}

fn parse_posted_date(date: &str) -> Option<DateTime<Utc>> {
    let date = date.trim();
    if date.is_empty() {
        return None;
    }

    DateTime::parse_from_rfc2822(date)
        .or_else(|_| DateTime::parse_from_rfc3339(date))
        .map(|parsed| parsed.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .ok()
                .and_then(|day| day.and_hms_opt(0, 0, 0))
                .map(|midnight| midnight.and_utc())
        })
}
