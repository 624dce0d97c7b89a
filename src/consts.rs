/// Date format for expiration dates: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Items with this many days left or fewer are flagged as expiring soon
pub(crate) const WARNING_DAYS: i64 = 7;

/// Display text for dates that cannot be parsed
pub(crate) const INVALID: &str = "Invalid";
