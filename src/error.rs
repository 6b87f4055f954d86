use std::path::{Path, PathBuf};

use thiserror::Error;

/// Specialized [`Result`] for `img-view` crate.
pub type ViewResult<T> = Result<T, ViewError>;

/// Errors on `img-view` crate.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Error)]
pub enum ViewError {
    /// The input is missing, in an unsupported format, or corrupt.
    #[error("cannot open image `{}`: {reason}", path.display())]
    UnreadableImage { path: PathBuf, reason: String },

    /// The image could not be written to the requested output path.
    #[error("cannot save image to `{}`: {reason}", path.display())]
    Write { path: PathBuf, reason: String },

    /// The image could not be handed to an external viewer.
    #[error("cannot display image: {0}")]
    Display(String),
}

impl ViewError {
    pub(crate) fn new_unreadable(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::UnreadableImage {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn new_write(path: impl AsRef<Path>, reason: impl ToString) -> Self {
        Self::Write {
            path: path.as_ref().to_path_buf(),
            reason: reason.to_string(),
        }
    }

    pub(crate) fn new_display(reason: impl ToString) -> Self {
        Self::Display(reason.to_string())
    }
}
