use crate::photo::PhotoRecord;

/// Outcome of the most recent fetch attempt, as seen by observers.
///
/// Exactly one value is current at any time. Every attempt starts at
/// `Loading` and ends at exactly one of the terminal variants.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    /// A fetch attempt is in flight.
    #[default]
    Loading,
    /// The attempt completed; photos are in server response order.
    Success(Vec<PhotoRecord>),
    /// The attempt failed. No detail is retained.
    Error,
}

impl FetchState {
    /// Collapse a fetch outcome into the terminal state for the attempt.
    ///
    /// The error value is discarded entirely, whatever its type; callers that
    /// want diagnostics must log them before concluding.
    pub fn conclude<E>(outcome: Result<Vec<PhotoRecord>, E>) -> Self {
        match outcome {
            Ok(photos) => FetchState::Success(photos),
            Err(_) => FetchState::Error,
        }
    }

    /// True once an attempt has finished, successfully or not.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    /// The fetched photos, when the last attempt succeeded.
    pub fn photos(&self) -> Option<&[PhotoRecord]> {
        match self {
            FetchState::Success(photos) => Some(photos),
            _ => None,
        }
    }
}
