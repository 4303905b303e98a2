use thiserror::Error;

/// Coarse classification of a [`VigilError`], used by the poll loop to pick a
/// handling policy and by log lines to name what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required configuration missing at startup. Fatal.
    Configuration,
    /// Network-level failure talking to the review API.
    Transport,
    /// The review API answered, but not with a usable response.
    Protocol,
    /// The response decoded fine but violates the documented shape.
    Contract,
    /// The notification channel itself rejected the message. Log-only.
    Delivery,
}

#[derive(Debug, Error)]
pub enum VigilError {
    #[error("{0} environment variable is required and must be non-empty")]
    MissingConfig(&'static str),

    #[error("request to the review API failed: {0}")]
    Transport(String),

    #[error("review API returned HTTP {0}")]
    ApiStatus(u16),

    #[error("review API response is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("review API response is not a JSON object")]
    NotAnObject,

    #[error("review API response is missing the `{0}` key")]
    MissingKey(&'static str),

    #[error("`homeworks` in the review API response is not a list")]
    HomeworksNotAList,

    #[error("`current_date` in the review API response is not a unix timestamp")]
    BadTimestamp,

    #[error("unknown homework status {0:?}")]
    UnknownStatus(String),

    #[error("homework record has no `homework_name`")]
    MissingName,

    #[error("failed to deliver notification: {0}")]
    Delivery(String),
}

impl VigilError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            VigilError::MissingConfig(_) => ErrorKind::Configuration,
            VigilError::Transport(_) => ErrorKind::Transport,
            VigilError::ApiStatus(_) | VigilError::Decode(_) => ErrorKind::Protocol,
            VigilError::NotAnObject
            | VigilError::MissingKey(_)
            | VigilError::HomeworksNotAList
            | VigilError::BadTimestamp
            | VigilError::UnknownStatus(_)
            | VigilError::MissingName => ErrorKind::Contract,
            VigilError::Delivery(_) => ErrorKind::Delivery,
        }
    }
}
