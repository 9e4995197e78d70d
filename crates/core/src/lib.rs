//! Core calculations for Tally.
//!
//! Pure functions with no I/O and no shared state; every call is safe to
//! make from any thread.
//!
//! # Modules
//!
//! - `currency` - Half-up currency rounding and percentages
//! - `calendar` - Business-day arithmetic and date parsing
//! - `text` - Slugs, truncation, and word splitting

pub mod calendar;
pub mod currency;
pub mod text;
