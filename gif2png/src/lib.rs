pub mod config;
pub mod convert;
pub mod error;
pub mod image;

// Re-export commonly used types
pub use config::{ConvertConfig, DEFAULT_DIRECTORY};
pub use convert::{convert, Summary};
pub use error::{Error, FileError};
pub use crate::image::PngCompression;
