//! Gallery engine: HTTP photo client, repository capability, and the fetch feed.
mod client;
mod feed;
mod repository;
mod types;

pub use client::{ClientSettings, PhotoApiClient, DEFAULT_BASE_URL};
pub use feed::PhotoFeed;
pub use repository::{NetworkPhotoRepository, PhotoRepository};
pub use types::FetchError;
