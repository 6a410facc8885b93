//! Update-check orchestration
//!
//! The resolver owns one [`StoreLookup`] per supported platform in a closed
//! dispatch table and turns a lookup outcome into a [`VersionStatus`]. Its
//! contract is total: any lookup failure degrades into an inconclusive
//! status (store fields absent) instead of an error, because a transient
//! store-side change must never break the host application's check.

use std::collections::HashMap;
use std::time::Duration;

use tracing::warn;

use crate::config::LookupConfig;
use crate::store::error::LookupError;
use crate::store::lookup::StoreLookup;
use crate::store::{AppStoreLookup, PlayStoreLookup};
use crate::types::{AppIdentity, Platform, VersionStatus};

pub struct VersionStatusResolver {
    lookups: HashMap<Platform, Box<dyn StoreLookup>>,
}

impl VersionStatusResolver {
    pub fn new(config: LookupConfig) -> Self {
        let timeout = Duration::from_millis(config.timeout_ms.0);
        let mut lookups: HashMap<Platform, Box<dyn StoreLookup>> = HashMap::new();
        lookups.insert(
            Platform::Ios,
            Box::new(AppStoreLookup::new(config.app_store, timeout)),
        );
        lookups.insert(
            Platform::Android,
            Box::new(PlayStoreLookup::new(config.play_store, timeout)),
        );
        Self { lookups }
    }

    /// Build a resolver over an explicit dispatch table. Adding a further
    /// store means inserting another entry, not touching resolve().
    pub fn with_lookups(lookups: HashMap<Platform, Box<dyn StoreLookup>>) -> Self {
        Self { lookups }
    }

    /// Runs one update check and always produces a status.
    ///
    /// Platforms without a dispatch entry and failed lookups both yield an
    /// inconclusive status; see the module docs.
    pub async fn resolve(&self, platform: Platform, identity: &AppIdentity) -> VersionStatus {
        let app_id = identity.id_for(platform);

        let Some(lookup) = self.lookups.get(&platform) else {
            warn!("{}", LookupError::PlatformUnsupported(platform));
            return VersionStatus {
                local_version: identity.version.clone(),
                store_version: None,
                store_link: String::new(),
                platform,
            };
        };

        match lookup.fetch(app_id).await {
            Ok(release) => VersionStatus {
                local_version: identity.version.clone(),
                store_version: Some(release.version),
                store_link: release.link,
                platform,
            },
            Err(e) => {
                warn!("store lookup failed for {app_id}: {e}");
                VersionStatus {
                    local_version: identity.version.clone(),
                    store_version: None,
                    store_link: launch_hint(platform, app_id),
                    platform,
                }
            }
        }
    }
}

impl Default for VersionStatusResolver {
    fn default() -> Self {
        Self::new(LookupConfig::default())
    }
}

/// Store-launch hint used as the link when no canonical listing URL could
/// be fetched.
fn launch_hint(platform: Platform, app_id: &str) -> String {
    match platform {
        Platform::Android => format!("market://details?id={app_id}"),
        Platform::Ios => format!("itms-apps://itunes.apple.com/app/id{app_id}"),
        Platform::Unsupported => String::new(),
    }
}
