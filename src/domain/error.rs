//! Error types for the vitrine catalog browser.
//!
//! This module defines the centralized error type [`VitrineError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.

use thiserror::Error;

/// The main error type for vitrine operations.
///
/// This enum consolidates all error conditions that can occur while the browser
/// runs, from catalog loading to terminal setup. The `Network`, `Status`, and
/// `Malformed` variants form the load-failure taxonomy: any of them is fatal to
/// catalog functionality for the session, but never to the process. The UI
/// degrades to an inline error message instead of crashing.
#[derive(Debug, Error)]
pub enum VitrineError {
    /// The catalog source could not be reached.
    ///
    /// Covers connection failures, DNS errors, and unreadable files. The string
    /// describes the underlying transport failure.
    #[error("catalog source unreachable: {0}")]
    Network(String),

    /// The catalog source answered with a non-success HTTP status.
    #[error("catalog request returned HTTP status {0}")]
    Status(u16),

    /// The catalog payload was retrieved but is not a well-formed listing array.
    #[error("catalog payload is malformed: {0}")]
    Malformed(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or application failed.
    ///
    /// Occurs when a built-in or custom theme cannot be parsed. The string
    /// contains a description of what went wrong.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background loader thread failed.
    ///
    /// Occurs when the main loop cannot post to or receive from the worker
    /// channel, typically because the other end hung up.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Terminal setup or restore failed.
    ///
    /// Raised when raw mode or the alternate screen cannot be entered or left.
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// A specialized `Result` type for vitrine operations.
///
/// This is a type alias for `std::result::Result<T, VitrineError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, VitrineError>;
