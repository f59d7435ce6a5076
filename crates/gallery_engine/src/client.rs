use std::time::Duration;

use url::Url;

use gallery_core::PhotoRecord;

use crate::types::FetchError;

/// Fixed production host serving the photo listing.
pub const DEFAULT_BASE_URL: &str = "https://android-kotlin-fun-mars-server.appspot.com";

const PHOTOS_PATH: &str = "photos";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url is valid"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// HTTP client for the photo listing endpoint.
#[derive(Debug, Clone)]
pub struct PhotoApiClient {
    http: reqwest::Client,
    photos_url: Url,
}

impl PhotoApiClient {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let photos_url = settings
            .base_url
            .join(PHOTOS_PATH)
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        Ok(Self { http, photos_url })
    }

    /// Fetches the complete photo listing with a single GET.
    ///
    /// No query parameters, body, or auth headers; the listing is a JSON
    /// array where each element decodes into a [`PhotoRecord`].
    pub async fn fetch_photos(&self) -> Result<Vec<PhotoRecord>, FetchError> {
        log::debug!("GET {}", self.photos_url);
        let response = self
            .http
            .get(self.photos_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Protocol(format!("http status {status}")));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        serde_json::from_slice(&body)
            .map_err(|err| FetchError::Protocol(format!("malformed photo listing: {err}")))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    FetchError::Transport(err.to_string())
}
