//! The filter/sort pipeline.
//!
//! This module is the core of the browser: a pure, deterministic function from
//! `(listings, criteria, sort key)` to an ordered result sequence. It has no
//! side effects and is re-invoked after every change to the criteria or the
//! sort key; callers own the resulting `Vec`.
//!
//! # Filtering
//!
//! Three predicates combine with logical AND (see [`crate::domain::Listing`]
//! for their exact semantics): text match, inclusive rating bound, and service
//! subset. An empty filtered result is a valid empty sequence; presenting a
//! "no results" message is the render surface's job, not the pipeline's.
//!
//! # Sorting
//!
//! Sorting happens only after filtering and is stable, so ties keep the
//! relative order they had in the store. Price text that cannot be parsed
//! numerically never aborts the sort: the affected entries stay in the output
//! and order after all parsable prices.

use std::cmp::Ordering;

use crate::domain::criteria::{FilterCriteria, SortKey};
use crate::domain::listing::Listing;

/// Applies the filter criteria and sort key to the listing store.
///
/// Returns the listings that pass all three filter predicates, ordered by
/// `sort`. With default criteria and [`SortKey::Original`] this is the whole
/// store in store order.
///
/// # Example
///
/// ```
/// use vitrine::domain::{pipeline, FilterCriteria, Listing, SortKey};
///
/// let store = vec![
///     Listing::new(1, "Zeta", "North", "R$ 50,00", 4.0),
///     Listing::new(2, "Alpha", "South", "R$ 10,00", 4.8),
/// ];
/// let criteria = FilterCriteria { min_rating: 4.5, ..FilterCriteria::default() };
///
/// let results = pipeline::apply(&store, &criteria, SortKey::Original);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].name, "Alpha");
/// ```
#[must_use]
pub fn apply(listings: &[Listing], criteria: &FilterCriteria, sort: SortKey) -> Vec<Listing> {
    let _span = tracing::debug_span!(
        "pipeline_apply",
        total = listings.len(),
        query_len = criteria.query.len(),
        min_rating = criteria.min_rating,
        required_services = criteria.services.len(),
        sort = ?sort
    )
    .entered();

    let query = criteria.query.trim().to_lowercase();

    let mut results: Vec<Listing> = listings
        .iter()
        .filter(|listing| {
            listing.matches_text(&query)
                && listing.meets_rating(criteria.min_rating)
                && listing.offers_all(&criteria.services)
        })
        .cloned()
        .collect();

    match sort {
        SortKey::Original => {}
        SortKey::RatingDesc => results.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::PriceAsc => results.sort_by(|a, b| compare_prices(&a.price, &b.price)),
        SortKey::NameAsc => {
            results.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
    }

    tracing::debug!(filtered = results.len(), "pipeline applied");
    results
}

/// Parses currency-formatted price text into a numeric value.
///
/// Skips everything up to the first ASCII digit (currency symbol and spacing),
/// treats a comma as the decimal separator, and parses the remainder as `f64`.
/// Returns `None` for text with no digits or with trailing junk after the
/// number.
///
/// # Example
///
/// ```
/// use vitrine::domain::pipeline::parse_price;
///
/// assert_eq!(parse_price("R$ 35,00"), Some(35.0));
/// assert_eq!(parse_price("R$35,50"), Some(35.5));
/// assert_eq!(parse_price("consult us"), None);
/// ```
#[must_use]
pub fn parse_price(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let digits_start = trimmed.find(|c: char| c.is_ascii_digit())?;
    trimmed[digits_start..].trim().replace(',', ".").parse().ok()
}

/// Total order over price text for `PriceAsc`.
///
/// Parsable prices compare numerically; unparsable text compares greater than
/// any parsable price and equal to other unparsable text, so anomalous entries
/// land at the end in their original relative order.
fn compare_prices(a: &str, b: &str) -> Ordering {
    match (parse_price(a), parse_price(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> Vec<Listing> {
        let mut zeta = Listing::new(1, "Zeta Cuts", "Riverside", "R$ 50,00", 4.0);
        zeta.services = vec!["Beard Trim".to_string(), "Hot Towel".to_string()];

        let mut alpha = Listing::new(2, "Alpha Lounge", "Old Town", "R$ 10,00", 4.8);
        alpha.services = vec!["Beard Trim".to_string()];

        let mut mu = Listing::new(3, "Mu Studio", "Harbor District", "R$ 30,00", 3.5);
        mu.services = vec!["Hot Towel".to_string(), "Hair Dye".to_string()];

        vec![zeta, alpha, mu]
    }

    fn names(results: &[Listing]) -> Vec<&str> {
        results.iter().map(|l| l.name.as_str()).collect()
    }

    /// What: default criteria + Original order return the full store untouched
    #[test]
    fn identity_filter_returns_store_in_original_order() {
        let store = store();
        let results = apply(&store, &FilterCriteria::default(), SortKey::Original);
        assert_eq!(results, store);
    }

    /// What: text query matches name, location, and price text, case-insensitively
    #[test]
    fn text_match_covers_name_location_and_price() {
        let store = store();

        let by_name = FilterCriteria { query: "ALPHA".into(), ..Default::default() };
        assert_eq!(names(&apply(&store, &by_name, SortKey::Original)), ["Alpha Lounge"]);

        let by_location = FilterCriteria { query: "harbor".into(), ..Default::default() };
        assert_eq!(names(&apply(&store, &by_location, SortKey::Original)), ["Mu Studio"]);

        let by_price = FilterCriteria { query: "50,00".into(), ..Default::default() };
        assert_eq!(names(&apply(&store, &by_price, SortKey::Original)), ["Zeta Cuts"]);
    }

    /// What: surrounding whitespace in the query is ignored
    #[test]
    fn text_query_is_trimmed() {
        let store = store();
        let criteria = FilterCriteria { query: "  mu  ".into(), ..Default::default() };
        assert_eq!(names(&apply(&store, &criteria, SortKey::Original)), ["Mu Studio"]);
    }

    /// What: every result meets the minimum rating; the bound is inclusive
    #[test]
    fn rating_threshold_is_inclusive() {
        let store = store();
        let criteria = FilterCriteria { min_rating: 4.0, ..Default::default() };
        let results = apply(&store, &criteria, SortKey::Original);
        assert_eq!(names(&results), ["Zeta Cuts", "Alpha Lounge"]);
        assert!(results.iter().all(|l| l.rating >= 4.0));
    }

    /// What: required services filter by subset; the empty set passes everything
    #[test]
    fn service_filter_requires_subset() {
        let store = store();

        let criteria = FilterCriteria {
            services: vec!["Beard Trim".into(), "Hot Towel".into()],
            ..Default::default()
        };
        assert_eq!(names(&apply(&store, &criteria, SortKey::Original)), ["Zeta Cuts"]);

        let empty = FilterCriteria::default();
        assert_eq!(apply(&store, &empty, SortKey::Original).len(), store.len());
    }

    /// What: the three predicates combine with AND
    #[test]
    fn predicates_combine_with_and() {
        let store = store();
        let criteria = FilterCriteria {
            query: "o".into(),
            min_rating: 4.0,
            services: vec!["Beard Trim".into()],
        };
        // "o" matches Alpha Lounge and Mu Studio; the rating bound drops Mu
        let results = apply(&store, &criteria, SortKey::Original);
        assert_eq!(names(&results), ["Alpha Lounge"]);
    }

    /// What: rating sort puts higher ratings first, adjacent pairs non-increasing
    #[test]
    fn rating_sort_is_descending() {
        let store = store();
        let results = apply(&store, &FilterCriteria::default(), SortKey::RatingDesc);
        assert_eq!(names(&results), ["Alpha Lounge", "Zeta Cuts", "Mu Studio"]);
        for pair in results.windows(2) {
            assert!(pair[0].rating >= pair[1].rating);
        }
    }

    /// What: price sort orders R$ 10,00 / R$ 30,00 / R$ 50,00 ascending
    #[test]
    fn price_sort_is_ascending() {
        let store = store();
        let results = apply(&store, &FilterCriteria::default(), SortKey::PriceAsc);
        assert_eq!(names(&results), ["Alpha Lounge", "Mu Studio", "Zeta Cuts"]);
    }

    /// What: name sort yields Alpha / Mu / Zeta
    #[test]
    fn name_sort_is_ascending() {
        let store = store();
        let results = apply(&store, &FilterCriteria::default(), SortKey::NameAsc);
        assert_eq!(names(&results), ["Alpha Lounge", "Mu Studio", "Zeta Cuts"]);
    }

    /// What: sorting an already-sorted sequence by the same key is a no-op
    #[test]
    fn sorting_is_idempotent() {
        let store = store();
        for key in SortKey::ALL {
            let once = apply(&store, &FilterCriteria::default(), key);
            let twice = apply(&once, &FilterCriteria::default(), key);
            assert_eq!(once, twice, "sort by {key:?} not idempotent");
        }
    }

    /// What: unparsable price text stays in the output and sorts last
    #[test]
    fn unparsable_prices_sort_last() {
        let mut store = store();
        store.push(Listing::new(4, "Gratis Corner", "Market Square", "on request", 4.1));
        let results = apply(&store, &FilterCriteria::default(), SortKey::PriceAsc);
        assert_eq!(results.len(), 4);
        assert_eq!(results.last().map(|l| l.name.as_str()), Some("Gratis Corner"));
    }

    /// What: stable sort preserves store order among equal ratings
    #[test]
    fn ties_keep_store_order() {
        let store = vec![
            Listing::new(1, "First", "A", "R$ 20,00", 4.0),
            Listing::new(2, "Second", "B", "R$ 25,00", 4.0),
            Listing::new(3, "Third", "C", "R$ 15,00", 4.0),
        ];
        let results = apply(&store, &FilterCriteria::default(), SortKey::RatingDesc);
        assert_eq!(names(&results), ["First", "Second", "Third"]);
    }

    /// What: price parsing handles the expected currency shapes and rejects junk
    #[test]
    fn parse_price_cases() {
        assert_eq!(parse_price("R$ 35,00"), Some(35.0));
        assert_eq!(parse_price("R$ 9,90"), Some(9.9));
        assert_eq!(parse_price("  R$   120,00 "), Some(120.0));
        assert_eq!(parse_price("42"), Some(42.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("sob consulta"), None);
        assert_eq!(parse_price("R$ 35,00 - R$ 50,00"), None);
    }

    /// What: filtering to nothing yields a valid empty sequence, not an error
    #[test]
    fn empty_result_is_empty_sequence() {
        let store = store();
        let criteria = FilterCriteria { query: "nowhere".into(), ..Default::default() };
        assert!(apply(&store, &criteria, SortKey::Original).is_empty());
    }
}
