//! Store lookup implementations
//!
//! One lookup variant per distribution store: a JSON API client for the
//! App Store and a listing-page scraper for the Play Store. Both implement
//! [`lookup::StoreLookup`] and perform exactly one HTTP round trip per call.

pub mod app_store;
pub mod error;
pub mod extract;
pub mod lookup;
pub mod play_store;

pub use app_store::AppStoreLookup;
pub use play_store::PlayStoreLookup;
