//! Update-availability checking against app distribution stores
//!
//! This crate answers one question: does the store currently publish a
//! newer release than the installed build? It fetches the published
//! version through the store's channel (JSON lookup API for the App Store,
//! listing-page scraping for the Play Store), normalizes both sides into
//! integer segment sequences, and applies a fixed ordering rule.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Presenter  │────▶│   Resolver   │────▶│ StoreLookup │
//! │ (external)  │     │ (orchestrate)│     │   (fetch)   │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!        ▲                    │                   │
//!        │                    ▼                   ▼
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │VersionStatus│◀────│  Comparator  │     │  Extractor  │
//! │  (record)   │     │ (version cmp)│     │ (scraping)  │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`resolver`]: dispatches per platform and assembles the status record
//! - [`store`]: per-store lookup clients and the scraping extractor
//! - [`version`]: version string parsing and the ordering rule
//! - [`types`]: `Platform`, `AppIdentity`, `VersionStatus`
//! - [`config`]: endpoints, timeout, and scraping markers
//!
//! The resolver never fails: every lookup error is absorbed into an
//! inconclusive [`VersionStatus`] whose `can_update()` is false, so callers
//! simply skip the update prompt when the stores are unreachable.

pub mod config;
pub mod resolver;
pub mod store;
pub mod types;
pub mod version;

pub use config::LookupConfig;
pub use resolver::VersionStatusResolver;
pub use types::{AppIdentity, Platform, VersionStatus};
