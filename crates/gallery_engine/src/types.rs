/// Failure raised at the client boundary.
///
/// These are the only two failure kinds the engine recognizes; everything
/// above the client collapses them into the detail-free error state, so the
/// carried message exists for logging only.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum FetchError {
    /// Connectivity or IO-level failure: the request never completed.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered, but with a non-success status or a body that
    /// does not decode as a photo listing.
    #[error("protocol failure: {0}")]
    Protocol(String),
}
