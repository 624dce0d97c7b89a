//! In-memory expiration store
//!
//! Owns the tracked records for the lifetime of the process. Every listing
//! re-sorts the backing vector by raw date text, so the store order after a
//! listing is the display order.

use chrono::NaiveDateTime;

use crate::consts::WARNING_DAYS;
use crate::core::classify::{classify, tag_for};
use crate::core::types::{Classification, DisplayRow, Record};
use crate::error::AppError;
use crate::utils::debug_enabled;

#[derive(Debug, Default)]
pub(crate) struct ExpirationStore {
    records: Vec<Record>,
}

impl ExpirationStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn records(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn contains_name(&self, name: &str) -> bool {
        self.records.iter().any(|r| r.name == name)
    }

    /// Append a record. Both fields are trimmed and must be non-empty; the
    /// date is not checked for format.
    pub(crate) fn add(&mut self, name: &str, date: &str) -> Result<(), AppError> {
        let name = name.trim();
        let date = date.trim();
        if name.is_empty() || date.is_empty() {
            return Err(AppError::Validation);
        }
        self.records.push(Record::new(name, date));
        if debug_enabled() {
            eprintln!("[DEBUG] Added {name:?} ({date}), {} items", self.len());
        }
        Ok(())
    }

    /// Sort by date text (plain string order, persisted) and classify each row
    pub(crate) fn list_sorted_for_display(&mut self, now: NaiveDateTime) -> Vec<DisplayRow> {
        self.records.sort_by(|a, b| a.date.cmp(&b.date));
        self.records
            .iter()
            .map(|record| {
                let classification = classify(&record.date, now);
                DisplayRow {
                    record: record.clone(),
                    classification,
                    tag: tag_for(classification),
                }
            })
            .collect()
    }

    /// Remove every record with exactly this name. Returns how many were removed.
    pub(crate) fn delete(&mut self, name: &str) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.name != name);
        let removed = before - self.records.len();
        if debug_enabled() {
            eprintln!("[DEBUG] Deleted {removed} item(s) named {name:?}");
        }
        removed
    }

    pub(crate) fn clear_all(&mut self) {
        if debug_enabled() {
            eprintln!("[DEBUG] Cleared {} item(s)", self.records.len());
        }
        self.records.clear();
    }

    /// Alert lines for parseable items within the warning window, expired
    /// ones included, in current store order.
    pub(crate) fn expiring_soon(&self, now: NaiveDateTime) -> Vec<String> {
        self.records
            .iter()
            .filter_map(|record| match classify(&record.date, now) {
                Classification::DaysLeft(days) if days <= WARNING_DAYS => {
                    let status = if days < 0 {
                        "EXPIRED".to_string()
                    } else {
                        format!("in {days} days")
                    };
                    Some(format!("• {} - {} ({status})", record.name, record.date))
                }
                _ => None,
            })
            .collect()
    }
}
