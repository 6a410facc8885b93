//! Store lookup trait for fetching the published version of an app

#[cfg(test)]
use mockall::automock;

use crate::store::error::LookupError;

/// Release information published by a store for one app
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRelease {
    /// Version string as published by the store
    pub version: String,
    /// Canonical URL of the store listing
    pub link: String,
}

/// Trait for fetching the currently published release from a store
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait StoreLookup: Send + Sync {
    /// Fetches the published release for an app
    ///
    /// # Arguments
    /// * `app_id` - The store-specific application identifier
    ///              (e.g., "com.example.app" for the Play Store)
    ///
    /// # Returns
    /// * `Ok(StoreRelease)` - Published version and listing link
    /// * `Err(LookupError)` - If the fetch or extraction fails
    async fn fetch(&self, app_id: &str) -> Result<StoreRelease, LookupError>;
}
