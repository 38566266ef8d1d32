//! Infrastructure layer: platform utilities with no domain knowledge.
//!
//! - [`paths`]: data/log directory resolution and tilde expansion

pub mod paths;

pub use paths::{data_dir, expand_tilde, logs_dir};
