use thiserror::Error;

/// Transport-level probe failures. HTTP-level failures (bad status,
/// unparseable body) are not errors; they travel as `ProbeResponse::Failed`.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("request timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(reqwest::Error),
}

impl From<reqwest::Error> for ProbeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout
        } else {
            ProbeError::Transport(err)
        }
    }
}
