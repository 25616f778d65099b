use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to turn a file into an HTML document.
///
/// Decoding cannot fail, so the only failure is reading the file itself.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The file could not be opened or read.
    #[error("failed to read {}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}
