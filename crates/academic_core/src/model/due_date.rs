//! Calendar due dates and quick date presets.
//!
//! # Responsibility
//! - Parse strict `YYYY-MM-DD` input from the terminal layer.
//! - Keep persisted values that no longer parse instead of dropping records.
//!
//! # Invariants
//! - New assignments always carry `DueDate::Date`.
//! - `DueDate::Unparsed` only originates from persisted data and sorts after
//!   every valid date.

use super::validation::ValidationError;
use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";
const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Assignment due date as stored in the durable file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DueDate {
    /// Valid calendar date.
    Date(NaiveDate),
    /// Persisted text that is not a calendar date.
    Unparsed(String),
}

impl DueDate {
    /// Parses terminal input as a calendar date.
    ///
    /// # Errors
    /// - `ValidationError::InvalidDate` when `input` is not `YYYY-MM-DD`.
    pub fn parse(input: &str) -> Result<NaiveDate, ValidationError> {
        let trimmed = input.trim();
        NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT)
            .map_err(|_| ValidationError::InvalidDate(trimmed.to_string()))
    }

    /// Returns the calendar date, or `None` for unparsed persisted text.
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(date) => Some(*date),
            Self::Unparsed(_) => None,
        }
    }

    /// Ordering key: unparsed values behave as the latest representable date.
    pub fn sort_key(&self) -> NaiveDate {
        self.as_date().unwrap_or(NaiveDate::MAX)
    }

    /// Renders the date as `March 10, 2025`, or the raw text when unparsed.
    pub fn format_long(&self) -> String {
        match self {
            Self::Date(date) => date.format(LONG_DATE_FORMAT).to_string(),
            Self::Unparsed(raw) => raw.clone(),
        }
    }
}

impl Display for DueDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Date(date) => write!(f, "{}", date.format(ISO_DATE_FORMAT)),
            Self::Unparsed(raw) => write!(f, "{raw}"),
        }
    }
}

impl From<NaiveDate> for DueDate {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<String> for DueDate {
    fn from(value: String) -> Self {
        match Self::parse(&value) {
            Ok(date) => Self::Date(date),
            Err(_) => Self::Unparsed(value),
        }
    }
}

impl From<DueDate> for String {
    fn from(value: DueDate) -> Self {
        match value {
            DueDate::Unparsed(raw) => raw,
            date => date.to_string(),
        }
    }
}

/// Shortcut due dates relative to the current day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuePreset {
    Tomorrow,
    InThreeDays,
    NextWeek,
    InTwoWeeks,
}

impl DuePreset {
    /// Presets in menu order.
    pub const ALL: [Self; 4] = [
        Self::Tomorrow,
        Self::InThreeDays,
        Self::NextWeek,
        Self::InTwoWeeks,
    ];

    /// Human-readable preset label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tomorrow => "Tomorrow",
            Self::InThreeDays => "In 3 days",
            Self::NextWeek => "Next week",
            Self::InTwoWeeks => "In 2 weeks",
        }
    }

    /// Stable keyword accepted by [`FromStr`].
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Tomorrow => "tomorrow",
            Self::InThreeDays => "3d",
            Self::NextWeek => "1w",
            Self::InTwoWeeks => "2w",
        }
    }

    /// Day offset from `today`.
    pub fn days(self) -> u64 {
        match self {
            Self::Tomorrow => 1,
            Self::InThreeDays => 3,
            Self::NextWeek => 7,
            Self::InTwoWeeks => 14,
        }
    }

    /// Resolves the preset against an explicit reference day.
    ///
    /// Saturates at `NaiveDate::MAX`.
    pub fn resolve(self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(self.days()))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Resolves the preset against the local current day.
    pub fn resolve_today(self) -> NaiveDate {
        self.resolve(Local::now().date_naive())
    }
}

impl FromStr for DuePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tomorrow" | "1d" => Ok(Self::Tomorrow),
            "3d" | "in-3-days" => Ok(Self::InThreeDays),
            "1w" | "next-week" => Ok(Self::NextWeek),
            "2w" | "in-2-weeks" => Ok(Self::InTwoWeeks),
            other => Err(format!(
                "unknown due preset `{other}`; expected tomorrow|3d|1w|2w"
            )),
        }
    }
}
