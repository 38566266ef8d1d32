//! Local JSON file catalog source.

use std::path::PathBuf;

use crate::catalog::backend::CatalogBackend;
use crate::domain::error::{Result, VitrineError};
use crate::domain::Listing;

/// Catalog source backed by a JSON file on disk.
///
/// The file must contain a single JSON array of listing objects. The whole
/// document is read and parsed in one step; there is no incremental loading.
pub struct FileCatalog {
    /// Path to the JSON document.
    path: PathBuf,
}

impl FileCatalog {
    /// Creates a file-backed catalog source.
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CatalogBackend for FileCatalog {
    fn fetch(&self) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("catalog_fetch_file", path = ?self.path).entered();

        let contents = std::fs::read_to_string(&self.path)?;
        let listings: Vec<Listing> = serde_json::from_str(&contents)
            .map_err(|e| VitrineError::Malformed(e.to_string()))?;

        tracing::debug!(count = listings.len(), "catalog file parsed");
        Ok(listings)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"[
        {
            "id": 1,
            "name": "Corner Cuts",
            "location": "Old Town",
            "price": "R$ 40,00",
            "rating": 4.5,
            "description": "Walk-ins welcome.",
            "image": "images/corner.jpg",
            "services": ["Beard Trim", "Hot Towel"]
        }
    ]"#;

    /// What: a well-formed file parses into listings with all fields populated
    #[test]
    fn fetch_parses_listing_array() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(SAMPLE.as_bytes()).expect("write sample");

        let catalog = FileCatalog::new(file.path().to_path_buf());
        let listings = catalog.fetch().expect("fetch");

        assert_eq!(listings.len(), 1);
        assert_eq!(listings[0].id, 1);
        assert_eq!(listings[0].name, "Corner Cuts");
        assert_eq!(listings[0].services, vec!["Beard Trim", "Hot Towel"]);
    }

    /// What: a payload that is not a listing array maps to Malformed
    #[test]
    fn fetch_reports_malformed_payload() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(b"{ not json ").expect("write junk");

        let catalog = FileCatalog::new(file.path().to_path_buf());
        match catalog.fetch() {
            Err(VitrineError::Malformed(_)) => {}
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    /// What: a missing file maps to the IO load-failure path
    #[test]
    fn fetch_reports_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let catalog = FileCatalog::new(dir.path().join("absent.json"));
        match catalog.fetch() {
            Err(VitrineError::Io(_)) => {}
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
