//! Core module - expiration records, classification, and the store

mod classify;
mod store;
mod types;

pub(crate) use classify::local_now;
pub(crate) use store::ExpirationStore;
pub(crate) use types::{DisplayRow, Tag};

#[cfg(test)]
pub(crate) use types::{Classification, Record};
