//! Days-left computation and tag assignment

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::consts::{DATE_FORMAT, WARNING_DAYS};
use crate::core::types::{Classification, Tag};
use crate::utils::debug_enabled;

/// Current local wall-clock time, including time of day
pub(crate) fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Whole days from `now` until midnight of `date_text`.
///
/// `now` keeps its time of day, so a date equal to today yields -1 for any
/// moment after midnight. Partial days round toward negative infinity.
pub(crate) fn classify(date_text: &str, now: NaiveDateTime) -> Classification {
    if !has_date_shape(date_text) {
        if debug_enabled() {
            eprintln!("[DEBUG] Unparsable date {date_text:?}: not YYYY-MM-DD");
        }
        return Classification::Invalid;
    }
    let date = match NaiveDate::parse_from_str(date_text, DATE_FORMAT) {
        Ok(d) => d,
        Err(err) => {
            if debug_enabled() {
                eprintln!("[DEBUG] Unparsable date {date_text:?}: {err}");
            }
            return Classification::Invalid;
        }
    };

    let delta = date.and_time(NaiveTime::MIN) - now;
    Classification::DaysLeft(floor_days(delta))
}

/// Four-digit year, then one or two digit month and day. chrono alone also
/// takes short years, signs and inner whitespace.
fn has_date_shape(text: &str) -> bool {
    let digits = |part: &str, min: usize, max: usize| {
        (min..=max).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
    };
    let mut parts = text.split('-');
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day), None) => {
            digits(year, 4, 4) && digits(month, 1, 2) && digits(day, 1, 2)
        }
        _ => false,
    }
}

fn floor_days(delta: TimeDelta) -> i64 {
    let days = delta.num_days();
    match TimeDelta::try_days(days) {
        Some(whole) if delta < whole => days - 1,
        _ => days,
    }
}

/// Presentation tag: the first matching rule wins
pub(crate) fn tag_for(classification: Classification) -> Tag {
    match classification {
        Classification::Invalid => Tag::Invalid,
        Classification::DaysLeft(days) if days < 0 => Tag::Expired,
        Classification::DaysLeft(days) if days <= WARNING_DAYS => Tag::Warning,
        Classification::DaysLeft(_) => Tag::Normal,
    }
}
