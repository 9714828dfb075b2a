use std::path::PathBuf;

use thiserror::Error;

/// Fatal error kinds for a decant run.
///
/// Per-page extraction failure is deliberately absent: a page that yields no
/// text contributes an empty segment instead of aborting the run.
#[derive(Error, Debug)]
pub enum DecantError {
    #[error("failed to open PDF {path:?}")]
    Input {
        path: PathBuf,
        #[source]
        source: lopdf::Error,
    },

    #[error("PDF {path:?} is encrypted; password handling is not supported")]
    Encrypted { path: PathBuf },

    #[error("failed to write output file {path:?}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
