//! Data model for a single update check

use std::fmt;

use tracing::warn;

use crate::version::{comparator, parser};

/// Host platform an update check runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Android,
    Ios,
    /// Catch-all for hosts with no known store; never a dispatch key
    Unsupported,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Android => write!(f, "android"),
            Platform::Ios => write!(f, "ios"),
            Platform::Unsupported => write!(f, "unsupported"),
        }
    }
}

/// Installed application identity, read from the host's package metadata
/// by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppIdentity {
    /// Version string of the installed build
    pub version: String,
    /// Platform bundle/package identifier
    pub bundle_id: String,
    /// Per-store identifier overrides (some apps publish under ids that
    /// differ from the bundle id)
    pub android_id: Option<String>,
    pub ios_id: Option<String>,
}

impl AppIdentity {
    pub fn new(version: impl Into<String>, bundle_id: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            bundle_id: bundle_id.into(),
            android_id: None,
            ios_id: None,
        }
    }

    /// Store identifier for the given platform, preferring the override.
    pub fn id_for(&self, platform: Platform) -> &str {
        let override_id = match platform {
            Platform::Android => self.android_id.as_deref(),
            Platform::Ios => self.ios_id.as_deref(),
            Platform::Unsupported => None,
        };
        override_id.unwrap_or(&self.bundle_id)
    }
}

/// Outcome of one update check. Constructed fresh per check, never mutated,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStatus {
    /// Version string of the installed build
    pub local_version: String,
    /// Version currently published in the store; absent when the lookup
    /// failed (an inconclusive check)
    pub store_version: Option<String>,
    /// Canonical listing URL on a successful lookup, a store-launch hint
    /// otherwise, empty for an unsupported platform
    pub store_link: String,
    pub platform: Platform,
}

impl VersionStatus {
    /// Whether the store publishes a newer release than the installed one.
    ///
    /// An absent store version falls back to the local string at this point
    /// of decision, so an inconclusive check compares equal and reports no
    /// update. A malformed version string on either side also reports no
    /// update; remote data must never crash a user-facing check.
    pub fn can_update(&self) -> bool {
        let store = self.store_version.as_deref();
        let local = match parser::parse(Some(self.local_version.as_str())) {
            Ok(local) => local,
            Err(e) => {
                warn!("unusable local version: {e}");
                return false;
            }
        };
        match parser::parse(store.or(Some(self.local_version.as_str()))) {
            Ok(store) => comparator::can_update(&local, &store),
            Err(e) => {
                warn!("unusable store version: {e}");
                false
            }
        }
    }
}
