use std::io;
use std::path::PathBuf;

use image::ImageError;

/// Failure converting one candidate file. The run reports it and moves on.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    #[error("{0}")]
    Decode(#[source] ImageError),
    #[error("{0}")]
    Encode(#[source] ImageError),
    #[error("{0}")]
    Remove(#[source] io::Error),
}

impl FileError {
    /// Which step failed, for logs.
    pub fn stage(&self) -> &'static str {
        match self {
            FileError::Decode(_) => "decode",
            FileError::Encode(_) => "encode",
            FileError::Remove(_) => "remove",
        }
    }
}

/// Failure that aborts the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read directory `{}`", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write conversion report")]
    Report(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
