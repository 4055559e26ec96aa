use thiserror::Error;

/// Precondition violations on the caller-supplied profile.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    #[error("profile has no interests")]
    MissingInterests,

    #[error("profile has no skills")]
    MissingSkills,
}

/// Failures of the upstream text-generation call. None of these reach the
/// caller of `IdeaRequestService::generate`; they select the fallback path.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Transport(String),

    #[error("upstream returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response envelope: {0}")]
    Envelope(String),

    #[error("no JSON array found in model output")]
    NoArray,

    #[error("model returned an empty idea list")]
    EmptyIdeas,
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LlmError::Envelope(err.to_string())
        } else {
            LlmError::Transport(err.to_string())
        }
    }
}
