//! Catalog source layer.
//!
//! One trait, two backends: listing catalogs come either from a local JSON
//! file or from an HTTP(S) URL. [`open`] picks the backend from the source
//! string the user passed on the command line.

pub mod backend;
pub mod file;
pub mod http;

pub use backend::CatalogBackend;
pub use file::FileCatalog;
pub use http::HttpCatalog;

use std::path::PathBuf;

use crate::infrastructure::paths::expand_tilde;

/// Opens a catalog backend for a source string.
///
/// Strings starting with `http://` or `https://` select the HTTP backend;
/// anything else is treated as a filesystem path, with a leading `~` expanded
/// to the user's home directory.
#[must_use]
pub fn open(source: &str) -> Box<dyn CatalogBackend> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Box::new(HttpCatalog::new(source.to_string()))
    } else {
        Box::new(FileCatalog::new(PathBuf::from(expand_tilde(source))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: the source scheme selects the backend
    #[test]
    fn open_selects_backend_by_scheme() {
        assert_eq!(open("https://example.test/listings.json").location(),
            "https://example.test/listings.json");
        assert_eq!(open("listings.json").location(), "listings.json");
    }
}
