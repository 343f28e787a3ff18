//! Calendar dates as they appear in content files.
//!
//! Content authors write dates at whatever precision they have: `2024`,
//! `2024-03`, `2024-03-15`, or a full RFC 3339 timestamp. [`ContentDate`] keeps
//! the original text for output and a parsed [`NaiveDate`] for ordering. A
//! partial date resolves to the first day of its period.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ContentDate {
    raw: String,
    date: NaiveDate,
}

impl ContentDate {
    /// Parse a content date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` when `raw` matches none of the accepted
    /// formats or names an impossible day.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        let date = parse_date(trimmed).ok_or_else(|| CoreError::InvalidDate {
            value: raw.to_string(),
        })?;
        Ok(Self {
            raw: trimmed.to_string(),
            date,
        })
    }

    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.date_naive());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(naive.date());
    }
    if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(day);
    }

    let mut parts = s.split('-');
    let year = parts.next()?;
    if year.len() != 4 {
        return None;
    }
    let year: i32 = year.parse().ok()?;
    let month: u32 = match parts.next() {
        Some(m) if m.len() == 2 => m.parse().ok()?,
        Some(_) => return None,
        None => 1,
    };
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, 1)
}

impl TryFrom<String> for ContentDate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ContentDate> for String {
    fn from(value: ContentDate) -> Self {
        value.raw
    }
}

impl fmt::Display for ContentDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialOrd for ContentDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Orders by calendar date, then by the original text so that `Ord` agrees
/// with `Eq`.
impl Ord for ContentDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.raw.cmp(&other.raw))
    }
}
