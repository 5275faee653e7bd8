//! Core building blocks: identifier derivation, date formatting, record
//! normalization and batch reconciliation. These are pure and consumed by the
//! high-level `api` module.
pub mod batch;
pub mod date;
pub mod identity;
pub mod params;
pub mod record;
