//! Message types for the background catalog loader.
//!
//! This module defines the request/response protocol between the interaction
//! loop and the worker thread that performs the one-time catalog fetch. The
//! protocol is intentionally small: the load is the only suspension point the
//! browser has, and a failed load is terminal for the session (no retry
//! message exists).

use crate::domain::Listing;

/// Requests sent from the interaction loop to the worker thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Fetch the complete catalog from the configured source.
    ///
    /// Posted exactly once, at startup.
    LoadCatalog,
}

/// Responses sent from the worker thread back to the interaction loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkerResponse {
    /// The catalog was fetched and parsed successfully.
    CatalogLoaded {
        /// The full listing store, in source order.
        listings: Vec<Listing>,
    },

    /// The catalog could not be loaded.
    ///
    /// Carries the underlying error text for the diagnostic log; the
    /// user-facing message is composed by the application layer, which knows
    /// the configured source.
    LoadFailed {
        /// Description of the load failure.
        message: String,
    },
}
