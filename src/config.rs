use serde::Deserialize;

// =============================================================================
// Time-related constants
// =============================================================================

/// Timeout for store lookup requests in milliseconds (10 seconds)
pub const LOOKUP_TIMEOUT_MS: u64 = 10_000;

// =============================================================================
// Endpoint constants
// =============================================================================

/// Default base URL for the App Store lookup API
pub const APP_STORE_BASE_URL: &str = "https://itunes.apple.com";

/// Default country code for App Store lookups
pub const APP_STORE_COUNTRY: &str = "us";

/// Default base URL for Play Store listing pages
pub const PLAY_STORE_BASE_URL: &str = "https://play.google.com";

// =============================================================================
// Play Store markup markers
// =============================================================================
// Class names taken from the live listing page. The page has no stable
// public schema, so every marker is configuration rather than a literal.

/// Class marking a metadata row container on the listing page
pub const PLAY_CONTAINER_CLASS: &str = "hAyfc";

/// Class marking the label element inside a metadata row
pub const PLAY_LABEL_CLASS: &str = "BgcNfc";

/// Class marking the value element inside a metadata row
pub const PLAY_VALUE_CLASS: &str = "htlgb";

/// Label texts meaning "Current Version"; the store localizes this label,
/// so the set grows per supported storefront language.
pub const PLAY_VERSION_LABELS: &[&str] = &["Current Version", "현재 버전"];

/// Lookup configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LookupConfig {
    /// Request timeout in milliseconds
    pub timeout_ms: Timeout,
    pub app_store: AppStoreConfig,
    pub play_store: PlayStoreConfig,
}

/// Newtype so the timeout default survives `#[serde(default)]` on the parent
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
pub struct Timeout(pub u64);

impl Default for Timeout {
    fn default() -> Self {
        Self(LOOKUP_TIMEOUT_MS)
    }
}

/// App Store lookup API configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct AppStoreConfig {
    pub base_url: String,
    pub country: String,
}

impl Default for AppStoreConfig {
    fn default() -> Self {
        Self {
            base_url: APP_STORE_BASE_URL.to_string(),
            country: APP_STORE_COUNTRY.to_string(),
        }
    }
}

/// Play Store listing page configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayStoreConfig {
    pub base_url: String,
    pub markers: PlayMarkers,
}

impl Default for PlayStoreConfig {
    fn default() -> Self {
        Self {
            base_url: PLAY_STORE_BASE_URL.to_string(),
            markers: PlayMarkers::default(),
        }
    }
}

/// Markup markers the scraping extractor depends on
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PlayMarkers {
    pub container_class: String,
    pub label_class: String,
    pub value_class: String,
    pub accepted_labels: Vec<String>,
}

impl Default for PlayMarkers {
    fn default() -> Self {
        Self {
            container_class: PLAY_CONTAINER_CLASS.to_string(),
            label_class: PLAY_LABEL_CLASS.to_string(),
            value_class: PLAY_VALUE_CLASS.to_string(),
            accepted_labels: PLAY_VERSION_LABELS.iter().map(ToString::to_string).collect(),
        }
    }
}
