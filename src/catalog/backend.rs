//! Catalog source abstraction.
//!
//! This module defines the [`CatalogBackend`] trait that abstracts over the
//! places a listing catalog can come from. The browser loads the catalog
//! exactly once; backends are read-only and report failures through the
//! load-error taxonomy in [`crate::domain::error`].
//!
//! # Design Philosophy
//!
//! The trait is deliberately minimal: one fetch operation and a human-readable
//! location. It exists so the worker thread and the tests can swap sources
//! without touching the application layer.

use crate::domain::error::Result;
use crate::domain::Listing;

/// Abstraction over catalog sources.
///
/// # Implementations
///
/// - [`FileCatalog`](crate::catalog::FileCatalog): local JSON file (default)
/// - [`HttpCatalog`](crate::catalog::HttpCatalog): JSON document over HTTP(S)
pub trait CatalogBackend: Send {
    /// Fetches the complete listing array from the source.
    ///
    /// # Errors
    ///
    /// Returns `Network`/`Io` when the source is unreachable, `Status` for a
    /// non-success HTTP answer, and `Malformed` when the payload is not a
    /// well-formed listing array.
    fn fetch(&self) -> Result<Vec<Listing>>;

    /// Human-readable location of the source, used in user-facing failure
    /// text and log lines.
    fn location(&self) -> String;
}
