use thiserror::Error;

/// Recoverable failures surfaced by the shortening pipeline and the
/// credential store. Callers always keep their original data and may retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BingoError {
    #[error("add an API key before converting topics")]
    MissingApiKey,

    #[error("shortening provider returned a malformed response: {0}")]
    MalformedResponse(String),

    #[error("credential store unavailable: {0}")]
    StoreUnavailable(String),
}
