//! Observability support: file-based tracing.
//!
//! The browser owns the terminal, so diagnostics go to a log file instead of
//! stdout/stderr. See [`init::init_tracing`].

pub mod init;

pub use init::init_tracing;
