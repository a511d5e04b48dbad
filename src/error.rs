use arrow::error::ArrowError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{count} of {total} fixed cases produced an unexpected distance")]
    Mismatches { count: usize, total: usize },

    #[error("failed to write harness report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Arrow IPC export failed: {0}")]
    Arrow(#[from] ArrowError),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
