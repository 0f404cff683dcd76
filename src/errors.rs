use thiserror::Error;

/// Errors raised by listing sources
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("listing {0} not found")]
    NotFound(u64),

    #[error("failed to read listings from {path}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse listings from {path}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by the saved-listings store
#[derive(Debug, Error)]
pub enum SavedError {
    #[error("listing {0} is already saved")]
    AlreadySaved(u64),

    #[error("listing {0} is not in the saved list")]
    NotSaved(u64),

    #[error("saved listings storage unavailable: {0}")]
    Storage(#[from] std::io::Error),

    #[error("saved listings file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
