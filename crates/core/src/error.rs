use crate::reference::DatasetKind;

/// Message used when the profile API answers with HTTP 429.
pub const RATE_LIMITED_MESSAGE: &str = "Rate limited by Enka API. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnkaError {
    /// The request never produced a usable response (network, DNS, TLS,
    /// unreadable body).
    #[error("Network error: {0}")]
    Transport(String),

    /// The API answered with a non-2xx status.
    #[error("API request failed ({status}): {message}")]
    ApiStatus { status: u16, message: String },

    /// A success response that lacks mandatory fields.
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    #[error("{dataset} entry not found for ID: {id}")]
    MappingNotFound { dataset: DatasetKind, id: String },

    #[error("Unknown quality type {label:?} for character {id}")]
    UnknownQuality { id: String, label: String },

    /// A reference dataset could not be downloaded or decoded.
    #[error("Failed to fetch {dataset} reference data: {reason}")]
    ReferenceFetch { dataset: DatasetKind, reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    Unexpected(String),
}

impl EnkaError {
    /// `true` for HTTP 429 answers from the profile API.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, EnkaError::ApiStatus { status: 429, .. })
    }

    /// Domain errors travel through every layer unchanged. Anything else
    /// gets wrapped at the façade.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            EnkaError::Transport(_)
                | EnkaError::ApiStatus { .. }
                | EnkaError::InvalidResponse(_)
                | EnkaError::MappingNotFound { .. }
                | EnkaError::UnknownQuality { .. }
                | EnkaError::ReferenceFetch { .. }
                | EnkaError::InvalidConfig(_)
        )
    }
}
