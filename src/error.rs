use std::io;

use thiserror::Error;

/// Failures surfaced to callers of the extraction pipeline.
///
/// Missing grid geometry and unreadable cells are not errors: they produce
/// empty rosters and zero/empty fields respectively.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("empty input document")]
    EmptyInput,

    #[error("input is not a PDF document: {0}")]
    NotPdf(String),

    #[error("invalid option: {0}")]
    InvalidOption(String),

    #[error("failed to rasterize page: {0}")]
    Rasterize(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

impl RosterError {
    /// True for problems with the submitted document or options.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput | Self::NotPdf(_) | Self::InvalidOption(_)
        )
    }

    /// HTTP-style status code for the request surface.
    pub fn status(&self) -> u16 {
        if self.is_client_error() {
            400
        } else {
            500
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
