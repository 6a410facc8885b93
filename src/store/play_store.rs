//! Play Store listing page scraper

use std::time::Duration;

use tracing::warn;

use crate::config::PlayStoreConfig;
use crate::store::error::LookupError;
use crate::store::extract::{ClassMarkerExtractor, VersionExtractor};
use crate::store::lookup::{StoreLookup, StoreRelease};

/// Lookup implementation that scrapes the public Play Store listing page.
///
/// The Play Store has no version lookup API, so the published version is
/// read out of the listing markup via a [`VersionExtractor`]. The listing
/// URL itself doubles as the returned store link.
pub struct PlayStoreLookup {
    client: reqwest::Client,
    base_url: String,
    extractor: Box<dyn VersionExtractor>,
}

impl PlayStoreLookup {
    pub fn new(config: PlayStoreConfig, timeout: Duration) -> Self {
        let extractor = Box::new(ClassMarkerExtractor::new(&config.markers));
        Self::with_extractor(config, timeout, extractor)
    }

    /// Swap in a different extraction strategy, e.g. after a page redesign.
    pub fn with_extractor(
        config: PlayStoreConfig,
        timeout: Duration,
        extractor: Box<dyn VersionExtractor>,
    ) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("store-version-check")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            base_url: config.base_url,
            extractor,
        }
    }
}

#[async_trait::async_trait]
impl StoreLookup for PlayStoreLookup {
    async fn fetch(&self, app_id: &str) -> Result<StoreRelease, LookupError> {
        let url = format!("{}/store/apps/details?id={}", self.base_url, app_id);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("play store listing returned status {}: {}", status, url);
            return Err(LookupError::NotFound {
                app_id: app_id.to_string(),
            });
        }

        let body = response.text().await?;
        let version = self.extractor.extract(&body)?;

        Ok(StoreRelease { version, link: url })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayMarkers;
    use mockito::{Matcher, Server};

    const LISTING_BODY: &str = r#"<html><body>
        <div class="hAyfc"><div class="BgcNfc">Updated</div><span class="htlgb">March 3, 2020</span></div>
        <div class="hAyfc"><div class="BgcNfc">Current Version</div><span class="htlgb"><div><span class="htlgb">2.4.1</span></div></span></div>
    </body></html>"#;

    fn lookup_for(server: &Server) -> PlayStoreLookup {
        let config = PlayStoreConfig {
            base_url: server.url(),
            markers: PlayMarkers::default(),
        };
        PlayStoreLookup::new(config, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn fetch_scrapes_version_and_returns_listing_url_as_link() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/store/apps/details")
            .match_query(Matcher::UrlEncoded("id".into(), "com.example.app".into()))
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body(LISTING_BODY)
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let release = lookup.fetch("com.example.app").await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.version, "2.4.1");
        assert_eq!(
            release.link,
            format!("{}/store/apps/details?id=com.example.app", server.url())
        );
    }

    #[tokio::test]
    async fn fetch_returns_not_found_on_error_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/store/apps/details")
            .match_query(Matcher::Any)
            .with_status(404)
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let result = lookup.fetch("com.example.missing").await;

        mock.assert_async().await;
        assert!(
            matches!(result, Err(LookupError::NotFound { app_id }) if app_id == "com.example.missing")
        );
    }

    #[tokio::test]
    async fn fetch_fails_cleanly_when_markup_has_no_version_row() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/store/apps/details")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html><body><p>A redesigned page</p></body></html>")
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let result = lookup.fetch("com.example.app").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(LookupError::VersionLabelNotFound)));
    }

    #[tokio::test]
    async fn fetch_uses_injected_extraction_strategy() {
        struct FixedExtractor;

        impl VersionExtractor for FixedExtractor {
            fn extract(&self, _html: &str) -> Result<String, LookupError> {
                Ok("9.9.9".to_string())
            }
        }

        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/store/apps/details")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html></html>")
            .create_async()
            .await;

        let config = PlayStoreConfig {
            base_url: server.url(),
            markers: PlayMarkers::default(),
        };
        let lookup =
            PlayStoreLookup::with_extractor(config, Duration::from_secs(5), Box::new(FixedExtractor));
        let release = lookup.fetch("com.example.app").await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.version, "9.9.9");
    }
}
