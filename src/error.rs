//! Error types for skyburst.
//!
//! The animation engine itself never fails; these cover the edges around it:
//! reading and writing the INI configuration and encoding canvas snapshots.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or saving the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or parsed as INI.
    #[error("Failed to load config file {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },
    /// The file could not be written.
    #[error("Failed to save config file {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A color value is not `#RRGGBB` / `#RRGGBBAA`.
    #[error("Invalid color value: {0:?}")]
    InvalidColor(String),
}

/// Errors that can occur while writing a PNG snapshot of the canvas.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The engine has no drawing surface (zero-area viewport).
    #[error("No drawing surface to snapshot")]
    NoCanvas,
    /// PNG encoding or file output failed.
    #[error("Failed to write snapshot: {0}")]
    Image(#[from] image::ImageError),
}
