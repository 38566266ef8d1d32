//! HTTP(S) catalog source.

use crate::catalog::backend::CatalogBackend;
use crate::domain::error::{Result, VitrineError};
use crate::domain::Listing;

/// Catalog source fetched over HTTP(S) with a blocking request.
///
/// The request runs on the worker thread, so blocking here never stalls the
/// interaction loop. Any non-success status routes to the load-failure path;
/// there is no retry and no timeout beyond the client default.
pub struct HttpCatalog {
    /// Source URL, including scheme.
    url: String,
}

impl HttpCatalog {
    /// Creates an HTTP-backed catalog source.
    #[must_use]
    pub fn new(url: String) -> Self {
        Self { url }
    }
}

impl CatalogBackend for HttpCatalog {
    fn fetch(&self) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("catalog_fetch_http", url = %self.url).entered();

        let response = reqwest::blocking::get(&self.url)
            .map_err(|e| VitrineError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VitrineError::Status(status.as_u16()));
        }

        let listings: Vec<Listing> = response
            .json()
            .map_err(|e| VitrineError::Malformed(e.to_string()))?;

        tracing::debug!(count = listings.len(), "catalog document fetched");
        Ok(listings)
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}
