//! Error types for camsim.

use thiserror::Error;

/// The error type for camera model operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CamsimError {
    /// The configured camera type does not name any lens preset.
    #[error("unknown camera type '{0}' - run with --list_presets to see the supported lenses")]
    UnknownPreset(String),
}

/// A specialized Result type for camera model operations.
pub type Result<T> = std::result::Result<T, CamsimError>;
