//! Core data types for tracked items
//!
//! A record is immutable once stored; classification and tag are derived
//! on demand from the record's date text and the current time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single tracked item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Record {
    pub(crate) name: String,
    /// Raw date text, expected to be YYYY-MM-DD but not validated
    pub(crate) date: String,
}

impl Record {
    pub(crate) fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Record {
            name: name.into(),
            date: date.into(),
        }
    }
}

/// Days remaining until a record's date, or `Invalid` when it cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Classification {
    DaysLeft(i64),
    Invalid,
}

impl Classification {
    pub(crate) fn days_left(self) -> Option<i64> {
        match self {
            Classification::DaysLeft(days) => Some(days),
            Classification::Invalid => None,
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Classification::DaysLeft(days) => write!(f, "{days}"),
            Classification::Invalid => f.write_str(crate::consts::INVALID),
        }
    }
}

/// Presentation category of a listing row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Tag {
    Invalid,
    Expired,
    Warning,
    Normal,
}

impl Tag {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Tag::Invalid => "invalid",
            Tag::Expired => "expired",
            Tag::Warning => "warning",
            Tag::Normal => "normal",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the sorted listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DisplayRow {
    pub(crate) record: Record,
    pub(crate) classification: Classification,
    pub(crate) tag: Tag,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_display() {
        assert_eq!(Classification::DaysLeft(-3).to_string(), "-3");
        assert_eq!(Classification::DaysLeft(12).to_string(), "12");
        assert_eq!(Classification::Invalid.to_string(), "Invalid");
    }

    #[test]
    fn classification_days_left() {
        assert_eq!(Classification::DaysLeft(4).days_left(), Some(4));
        assert_eq!(Classification::Invalid.days_left(), None);
    }

    #[test]
    fn tag_names() {
        assert_eq!(Tag::Invalid.to_string(), "invalid");
        assert_eq!(Tag::Expired.to_string(), "expired");
        assert_eq!(Tag::Warning.to_string(), "warning");
        assert_eq!(Tag::Normal.to_string(), "normal");
    }

    #[test]
    fn tag_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&Tag::Warning).unwrap(),
            r#""warning""#
        );
    }
}
