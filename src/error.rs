use std::path::PathBuf;

/// Errors raised by the locator.
///
/// A missing QR code is not an error: the search reports it as `None`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A tuning value is out of range or bounds are inverted.
    #[error("invalid locator configuration: {0}")]
    InvalidConfig(String),

    /// The diagnostics output directory could not be prepared.
    #[error("cannot create diagnostics directory {}", path.display())]
    DiagnosticsDir {
        /// Directory that was requested
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Pixel data could not be packed into the clip image.
    #[error("image conversion failed: {0}")]
    Conversion(String),

    /// The corner quad admits no perspective transform.
    #[error("degenerate corner quad")]
    DegenerateQuad,
}

/// Result alias for locator operations
pub type Result<T> = std::result::Result<T, Error>;
