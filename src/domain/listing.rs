//! Listing domain model and match predicates.
//!
//! This module defines the core `Listing` type representing one business in the
//! catalog. Listings are immutable after the initial load; the predicates here
//! are the building blocks of the filter pipeline and carry its matching
//! semantics (case-insensitive substring text match, inclusive rating bound,
//! service subset).

use serde::{Deserialize, Serialize};

/// One business listing in the catalog.
///
/// Deserialized directly from the catalog document and never mutated afterwards.
/// The `id` is expected to be unique; uniqueness is not enforced, and a duplicate
/// id resolves to the first match when the detail overlay looks a listing up.
///
/// `price` is kept as the source's currency-formatted text (e.g. `"R$ 35,00"`);
/// it is displayed verbatim and only parsed numerically when sorting by price.
/// `services` preserves the source order for display, but order never matters
/// for matching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub name: String,
    pub location: String,
    pub price: String,
    pub rating: f64,
    pub description: String,
    pub image: String,
    pub services: Vec<String>,
}

impl Listing {
    /// Creates a listing with empty description, image, and services.
    ///
    /// Primarily useful for building fixtures; real listings come from the
    /// catalog document via serde.
    #[must_use]
    pub fn new(
        id: i64,
        name: impl Into<String>,
        location: impl Into<String>,
        price: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            location: location.into(),
            price: price.into(),
            rating,
            description: String::new(),
            image: String::new(),
            services: Vec::new(),
        }
    }

    /// Returns whether the listing matches a lowercased, trimmed text query.
    ///
    /// The query matches if it is a substring of the lowercased name, the
    /// lowercased location, or the lowercased price text. An empty query
    /// matches every listing.
    ///
    /// The caller is responsible for lowercasing and trimming the query once;
    /// the pipeline does this before scanning the store.
    ///
    /// # Example
    ///
    /// ```
    /// use vitrine::domain::Listing;
    ///
    /// let listing = Listing::new(1, "Corner Cuts", "Old Town", "R$ 40,00", 4.5);
    /// assert!(listing.matches_text("corner"));
    /// assert!(listing.matches_text("old t"));
    /// assert!(listing.matches_text("40,00"));
    /// assert!(listing.matches_text(""));
    /// assert!(!listing.matches_text("plaza"));
    /// ```
    #[must_use]
    pub fn matches_text(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(query)
            || self.location.to_lowercase().contains(query)
            || self.price.to_lowercase().contains(query)
    }

    /// Returns whether the listing's rating meets a minimum threshold.
    ///
    /// The bound is inclusive: a listing rated exactly at the threshold passes.
    #[must_use]
    pub fn meets_rating(&self, min_rating: f64) -> bool {
        self.rating >= min_rating
    }

    /// Returns whether the listing offers every service in `required`.
    ///
    /// An empty `required` slice passes vacuously.
    #[must_use]
    pub fn offers_all(&self, required: &[String]) -> bool {
        required.iter().all(|service| self.services.contains(service))
    }

    /// Returns the rating formatted for display, e.g. `"★ 4.8"`.
    #[must_use]
    pub fn rating_label(&self) -> String {
        format!("★ {:.1}", self.rating)
    }
}
