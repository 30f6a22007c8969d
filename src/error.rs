use std::io;

use thiserror::Error;

/// Everything that can abort a run. There is no recovery path: each
/// variant propagates to the caller and ends the program.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS or protocol failure, including non-success
    /// statuses reported through `error_for_status`.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The estimation body did not have the expected shape.
    #[error("unexpected response shape: {0}")]
    Format(#[from] serde_json::Error),

    /// A response line was not valid UTF-8.
    #[error("line {line} of the response is not valid UTF-8")]
    Decode { line: u64 },

    /// Reading the stream or writing the sink failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}
