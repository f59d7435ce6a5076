use std::sync::Arc;

use gallery_engine::{
    ClientSettings, FetchError, NetworkPhotoRepository, PhotoApiClient, PhotoRepository,
};

/// Application-level dependency wiring.
///
/// Constructed once at startup, in dependency order: client, then
/// repository. The feed only ever sees the repository capability.
pub struct AppContainer {
    pub photo_repository: Arc<dyn PhotoRepository>,
}

impl AppContainer {
    pub fn new(settings: ClientSettings) -> Result<Self, FetchError> {
        let client = PhotoApiClient::new(settings)?;
        Ok(Self {
            photo_repository: Arc::new(NetworkPhotoRepository::new(client)),
        })
    }
}
