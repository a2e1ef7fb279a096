//! Error handling for FigureKit
//!
//! Provides error types for every layer of the drawing engine:
//! - Figure errors (construction, grouping, linking)
//! - Persistence errors (loading and saving documents)
//! - Clipboard errors (copy/paste transport)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Figure error type
///
/// Raised by the factory and by storage operations that need a particular
/// selection shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FigureError {
    /// No constructor is registered under this tool name
    #[error("Unknown tool: {name}")]
    UnknownTool {
        /// The requested tool name.
        name: String,
    },

    /// A group needs at least two members
    #[error("Need at least two figures to create a group, got {count}")]
    GroupTooSmall {
        /// Number of figures offered.
        count: usize,
    },

    /// Ungrouping needs exactly one selected group
    #[error("Must be exactly one selected group to ungroup")]
    NotAGroup,

    /// Arrow tools link exactly two figures
    #[error("Need exactly two selected figures to apply arrows, got {count}")]
    ArrowNeedsPair {
        /// Number of figures selected.
        count: usize,
    },

    /// The figure id is not present in storage
    #[error("Figure {id} not found")]
    NotFound {
        /// The missing figure id.
        id: u64,
    },
}

/// Persistence error type
///
/// Loading is all-or-nothing: any of these aborts the whole load.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// An item carries no `_type` discriminator
    #[error("Missing _type in serialized item")]
    MissingType,

    /// The `_type` discriminator names no known figure
    #[error("No registered figure type {type_name}")]
    UnknownType {
        /// The unrecognised discriminator.
        type_name: String,
    },

    /// The document root is not a JSON array
    #[error("Expected a JSON array of figures")]
    NotAnArray,

    /// An item is malformed or lacks a required field
    #[error("Invalid {type_name}: {source}")]
    InvalidFigure {
        /// Discriminator of the failing item.
        type_name: String,
        /// Underlying decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// JSON syntax or encoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error while reading or writing a document
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Clipboard error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// Clipboard holds no text
    #[error("Clipboard is empty")]
    Empty,

    /// Clipboard text did not contain any figure
    #[error("No figure found in clipboard data")]
    NoFigure,

    /// The platform clipboard could not be reached
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Main error type for FigureKit
#[derive(Error, Debug)]
pub enum Error {
    /// Figure error
    #[error(transparent)]
    Figure(#[from] FigureError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Clipboard error
    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this error aborted a document load
    pub fn is_load_failure(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }
}

/// Result type alias using FigureKit's Error type
pub type Result<T> = std::result::Result<T, Error>;
