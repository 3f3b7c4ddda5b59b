use thiserror::Error;

/// Failures an analysis run can surface.
///
/// There is no local recovery anywhere: a run either completes or fails with
/// one of these, and the caller sees the failure unmodified.
#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("Python parsing error: {message}")]
    Parse { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse error from a rendered parser diagnostic
pub fn parse_error(message: impl Into<String>) -> SignatureError {
    SignatureError::Parse {
        message: message.into(),
    }
}
