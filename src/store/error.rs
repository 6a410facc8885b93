use thiserror::Error;

use crate::types::Platform;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(reqwest::Error),

    #[error("Store lookup timed out")]
    Timeout,

    #[error("App not found in store: {app_id}")]
    NotFound { app_id: String },

    #[error("Invalid response: {0}")]
    MalformedResponse(String),

    #[error("No current-version row found in listing page")]
    VersionLabelNotFound,

    #[error("No store known for platform: {0}")]
    PlatformUnsupported(Platform),
}

impl From<reqwest::Error> for LookupError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(e)
        }
    }
}
