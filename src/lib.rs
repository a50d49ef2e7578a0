pub mod diagnostics;
pub mod filter;
pub mod input;
pub mod registration;

use std::path::PathBuf;

pub use input::*;

/// Where the registration descriptor is read from.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    /// Standard input, read to end-of-input.
    Stdin,
    /// A file on disk.
    File(PathBuf),
}

impl From<Option<PathBuf>> for InputSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => InputSource::File(path),
            None => InputSource::Stdin,
        }
    }
}
