//! Filter criteria and sort key types.
//!
//! This module defines the explicit state object the filter pipeline consumes.
//! There is no hidden process-wide filter: the application holds one
//! [`FilterCriteria`] value, mutates it in response to events, and passes it
//! into [`crate::domain::pipeline::apply`] on every change. This keeps the
//! pipeline a pure function that can be tested in isolation.

/// Current filter criteria.
///
/// All three predicates combine with logical AND. The defaults (empty query,
/// zero minimum rating, no required services) form the identity filter: every
/// listing passes, in store order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively as a substring of a
    /// listing's name, location, or price text. Possibly empty.
    pub query: String,

    /// Minimum rating threshold, inclusive. Default 0.0.
    pub min_rating: f64,

    /// Services a listing must all offer. Empty means no service constraint.
    pub services: Vec<String>,
}

/// Ordering applied to the filtered results.
///
/// `Original` performs no comparison at all and preserves the store order of
/// whatever survived filtering. The other keys sort stably, so ties keep
/// their original relative order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Keep the underlying store order.
    #[default]
    Original,
    /// Highest rating first.
    RatingDesc,
    /// Cheapest first; unparsable price text sorts after every parsable price.
    PriceAsc,
    /// Case-insensitive lexicographic by name.
    NameAsc,
}

impl SortKey {
    /// All sort keys in the order the sort buttons are displayed.
    pub const ALL: [Self; 4] = [
        Self::Original,
        Self::RatingDesc,
        Self::PriceAsc,
        Self::NameAsc,
    ];

    /// Short button label for the key.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::RatingDesc => "rating",
            Self::PriceAsc => "price",
            Self::NameAsc => "name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: default criteria are the identity filter inputs
    #[test]
    fn default_criteria_are_identity() {
        let criteria = FilterCriteria::default();
        assert!(criteria.query.is_empty());
        assert_eq!(criteria.min_rating, 0.0);
        assert!(criteria.services.is_empty());
    }

    /// What: default sort key preserves store order
    #[test]
    fn default_sort_key_is_original() {
        assert_eq!(SortKey::default(), SortKey::Original);
    }
}
