//! Error types for icon generation

use thiserror::Error;

/// Result type alias for icon generation operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating the icon set.
///
/// Glyph-overlay failures are deliberately not represented here: a missing
/// letter degrades the icon (see `RenderedIcon::glyph_drawn`) instead of
/// failing the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// PNG encoding support is missing from this build
    #[error("PNG encoding is unavailable: {0}")]
    CapabilityError(String),

    /// PNG serialization failed for an icon
    #[error("Failed to encode icon: {0}")]
    EncodeError(String),

    /// Writing an icon file failed
    #[error("Failed to write icon: {0}")]
    WriteError(String),
}
