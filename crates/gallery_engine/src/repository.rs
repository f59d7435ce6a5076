use async_trait::async_trait;

use gallery_core::PhotoRecord;

use crate::client::PhotoApiClient;
use crate::types::FetchError;

/// Capability to fetch the current photo listing.
///
/// The feed depends on this trait alone, never on the transport, so tests
/// substitute fixed or failing sources freely.
#[async_trait]
pub trait PhotoRepository: Send + Sync {
    async fn photos(&self) -> Result<Vec<PhotoRecord>, FetchError>;
}

/// Production repository: delegates to the HTTP client unchanged.
#[derive(Debug, Clone)]
pub struct NetworkPhotoRepository {
    client: PhotoApiClient,
}

impl NetworkPhotoRepository {
    pub fn new(client: PhotoApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PhotoRepository for NetworkPhotoRepository {
    async fn photos(&self) -> Result<Vec<PhotoRecord>, FetchError> {
        self.client.fetch_photos().await
    }
}
