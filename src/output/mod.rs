mod alert;
mod format;
mod json;
mod table;

pub(crate) use alert::expiring_alert;
pub(crate) use json::render_listing_json;
pub(crate) use table::render_listing_table;
