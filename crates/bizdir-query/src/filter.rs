//! Filter predicate over a single [`Business`].
//!
//! Every active clause must hold (AND); multi-valued clauses match when any
//! selected value matches (OR). Inactive clauses never reject.

use std::collections::BTreeSet;

use bizdir_core::{clamp_rating, Business};
use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::clock::weekday_name;

/// Structured, non-text filter selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Subcategory identifiers; empty means unrestricted.
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub locations: BTreeSet<String>,
    #[serde(default)]
    pub min_rating: Option<f64>,
    #[serde(default)]
    pub open_now: bool,
    #[serde(default)]
    pub verified_only: bool,
    #[serde(default)]
    pub has_offers: bool,
}

impl FilterCriteria {
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.categories.insert(category.into());
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }

    #[must_use]
    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    /// Drop blank set members and clamp the rating floor into `[0, 5]`.
    ///
    /// A NaN floor is treated as no floor.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.categories = normalize_set(self.categories);
        self.locations = normalize_set(self.locations);
        self.min_rating = self
            .min_rating
            .filter(|r| !r.is_nan())
            .map(clamp_rating);
        self
    }

    /// True when no clause is active.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.categories.is_empty()
            && self.locations.is_empty()
            && self.min_rating.is_none()
            && !self.open_now
            && !self.verified_only
            && !self.has_offers
    }
}

fn normalize_set(values: BTreeSet<String>) -> BTreeSet<String> {
    values
        .into_iter()
        .filter(|v| !v.trim().is_empty())
        .collect()
}

/// Compiled predicate for one search text, criteria and day.
#[derive(Debug, Clone)]
pub struct Predicate<'a> {
    needle: Option<String>,
    criteria: &'a FilterCriteria,
    today: &'static str,
}

impl<'a> Predicate<'a> {
    #[must_use]
    pub fn new(search_text: &str, criteria: &'a FilterCriteria, today: Weekday) -> Self {
        let trimmed = search_text.trim();
        let needle = (!trimmed.is_empty()).then(|| trimmed.to_lowercase());
        Self {
            needle,
            criteria,
            today: weekday_name(today),
        }
    }

    #[must_use]
    pub fn matches(&self, business: &Business) -> bool {
        self.matches_search(business)
            && self.matches_category(business)
            && self.matches_location(business)
            && self.matches_rating(business)
            && self.matches_verified(business)
            && self.matches_open_now(business)
            && self.matches_offers(business)
    }

    fn matches_search(&self, business: &Business) -> bool {
        let Some(needle) = self.needle.as_deref() else {
            return true;
        };
        let hit = |text: &str| text.to_lowercase().contains(needle);

        hit(&business.name)
            || hit(&business.description)
            || hit(&business.subcategory)
            || business.services.iter().any(|s| hit(s))
            || business.tags.iter().any(|t| hit(t))
    }

    fn matches_category(&self, business: &Business) -> bool {
        self.criteria.categories.is_empty()
            || self.criteria.categories.contains(&business.subcategory)
    }

    fn matches_location(&self, business: &Business) -> bool {
        self.criteria.locations.is_empty() || self.criteria.locations.contains(&business.location)
    }

    fn matches_rating(&self, business: &Business) -> bool {
        self.criteria
            .min_rating
            .is_none_or(|floor| business.rating >= floor)
    }

    fn matches_verified(&self, business: &Business) -> bool {
        !self.criteria.verified_only || business.verified
    }

    // Missing or unrecognized hours count as open; only an explicit "Closed" rejects.
    fn matches_open_now(&self, business: &Business) -> bool {
        !self.criteria.open_now
            || !business
                .hours_on(self.today)
                .is_some_and(|status| status.is_closed())
    }

    fn matches_offers(&self, business: &Business) -> bool {
        !self.criteria.has_offers || business.has_offers()
    }
}

/// Build the predicate as a plain closure.
pub fn build<'a>(
    search_text: &str,
    criteria: &'a FilterCriteria,
    today: Weekday,
) -> impl Fn(&Business) -> bool + 'a {
    let predicate = Predicate::new(search_text, criteria, today);
    move |business| predicate.matches(business)
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
