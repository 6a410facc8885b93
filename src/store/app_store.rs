//! App Store lookup API implementation

use std::time::Duration;

use serde::Deserialize;
use tracing::warn;

use crate::config::AppStoreConfig;
use crate::store::error::LookupError;
use crate::store::lookup::{StoreLookup, StoreRelease};

/// Response from the App Store lookup API
#[derive(Debug, Deserialize)]
struct LookupResponse {
    results: Vec<LookupResult>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LookupResult {
    version: String,
    track_view_url: String,
}

/// Lookup implementation for the App Store JSON API
pub struct AppStoreLookup {
    client: reqwest::Client,
    config: AppStoreConfig,
}

impl AppStoreLookup {
    pub fn new(config: AppStoreConfig, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("store-version-check")
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            config,
        }
    }
}

#[async_trait::async_trait]
impl StoreLookup for AppStoreLookup {
    async fn fetch(&self, app_id: &str) -> Result<StoreRelease, LookupError> {
        let url = format!(
            "{}/lookup?id={}&country={}",
            self.config.base_url, app_id, self.config.country
        );

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("app store lookup returned status {}: {}", status, url);
            return Err(LookupError::NotFound {
                app_id: app_id.to_string(),
            });
        }

        let lookup: LookupResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse app store lookup response: {}", e);
            LookupError::MalformedResponse(e.to_string())
        })?;

        let Some(first) = lookup.results.into_iter().next() else {
            return Err(LookupError::MalformedResponse(format!(
                "empty results array for {app_id}"
            )));
        };

        Ok(StoreRelease {
            version: first.version,
            link: first.track_view_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn lookup_for(server: &Server) -> AppStoreLookup {
        let config = AppStoreConfig {
            base_url: server.url(),
            country: "us".to_string(),
        };
        AppStoreLookup::new(config, Duration::from_secs(5))
    }

    #[tokio::test]
    async fn fetch_returns_version_and_listing_link() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("id".into(), "com.example.app".into()),
                Matcher::UrlEncoded("country".into(), "us".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "resultCount": 1,
                    "results": [
                        {
                            "version": "2.4.1",
                            "trackViewUrl": "https://apps.apple.com/us/app/id1234"
                        }
                    ]
                }"#,
            )
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let release = lookup.fetch("com.example.app").await.unwrap();

        mock.assert_async().await;
        assert_eq!(release.version, "2.4.1");
        assert_eq!(release.link, "https://apps.apple.com/us/app/id1234");
    }

    #[tokio::test]
    async fn fetch_returns_not_found_on_error_status() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup")
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
    async fn fetch_returns_malformed_response_for_empty_results() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"resultCount": 0, "results": []}"#)
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let result = lookup.fetch("com.example.app").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(LookupError::MalformedResponse(_))));
    }

    #[tokio::test]
    async fn fetch_returns_malformed_response_for_invalid_json() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("GET", "/lookup")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("not json at all")
            .create_async()
            .await;

        let lookup = lookup_for(&server);
        let result = lookup.fetch("com.example.app").await;

        mock.assert_async().await;
        assert!(matches!(result, Err(LookupError::MalformedResponse(_))));
    }
}
