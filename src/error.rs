//! Error types for `heatmap-gradients`.

use thiserror::Error;

/// Broad classes of [`Error`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed a value the operation cannot work with.
    InvalidArgument,
    /// The colormap could not be resolved to at least one color.
    Lookup,
    /// A colormap data file could not be understood.
    Parse,
    /// Reading a colormap data file failed.
    Io,
}

/// The error type for gradient sampling and formatting.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    /// A gradient needs at least one point.
    #[error("the number of points must be positive")]
    InvalidPoints,

    /// A declaration without colors would not compile.
    #[error("cannot format a gradient without colors")]
    EmptyGradient,

    /// The registry does not know the colormap.
    #[error("unknown colormap “{name}”")]
    ColormapNotFound {
        /// The name that was looked up.
        name: String,
    },

    /// The registry knows the colormap but it has no entries.
    #[error("colormap “{name}” has no colors")]
    EmptyColormap {
        /// The name of the colormap.
        name: String,
    },

    /// The document does not have the shape of a colormap file.
    #[error("invalid colormap file: {0}")]
    InvalidColormapFile(String),

    /// One color of a colormap file could not be read.
    #[error("colormap “{colormap}”, color {index}: {reason}")]
    MalformedColor {
        /// The colormap holding the color.
        colormap: String,
        /// Position of the color in the colormap.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// Hjson syntax error.
    #[error("Hjson error: {0}")]
    Hjson(#[from] serde_hjson::Error),

    /// IO error while reading a colormap file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns the class of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidPoints | Error::EmptyGradient => ErrorKind::InvalidArgument,
            Error::ColormapNotFound { .. } | Error::EmptyColormap { .. } => ErrorKind::Lookup,
            Error::InvalidColormapFile(_)
            | Error::MalformedColor { .. }
            | Error::Hjson(_) => ErrorKind::Parse,
            Error::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type for `heatmap-gradients` operations.
pub type Result<T> = std::result::Result<T, Error>;
