use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to allocate {size} bytes for the input image")]
    Allocation { size: u64 },

    #[error("{signature} signature not found in image. Nothing to do")]
    AnchorNotFound { signature: &'static str },

    #[error("Invalid search window {start:#x}..{end:#x} for image of {len:#x} bytes")]
    InvalidWindow { start: usize, end: usize, len: usize },

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is a "file not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::Io(e) if e.kind() == std::io::ErrorKind::NotFound)
    }
}
