//! The authoritative description of what the listing should show.
//!
//! A [`QueryState`] is never edited in place by callers of the session; each
//! [`Transition`] yields a fresh state.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::filter::FilterCriteria;
use crate::sort::SortKey;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryState {
    pub search_text: String,
    pub criteria: FilterCriteria,
    pub sort_key: SortKey,
    pub page: NonZeroUsize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            page: NonZeroUsize::MIN,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Replace the search text and return to page one.
    SetSearchText(String),
    /// Replace the criteria wholesale and return to page one.
    SetFilters(FilterCriteria),
    /// Change ordering; the current page is kept.
    SetSortKey(SortKey),
    /// Jump to a page. Zero is ignored.
    SetPage(usize),
    ClearAll,
}

impl QueryState {
    /// Produce the state that results from applying `transition`.
    #[must_use]
    pub fn apply(&self, transition: Transition) -> QueryState {
        match transition {
            Transition::SetSearchText(text) => QueryState {
                search_text: text,
                page: NonZeroUsize::MIN,
                ..self.clone()
            },
            Transition::SetFilters(criteria) => QueryState {
                criteria: criteria.normalized(),
                page: NonZeroUsize::MIN,
                ..self.clone()
            },
            Transition::SetSortKey(sort_key) => QueryState {
                sort_key,
                ..self.clone()
            },
            Transition::SetPage(n) => match NonZeroUsize::new(n) {
                Some(page) => QueryState {
                    page,
                    ..self.clone()
                },
                None => self.clone(),
            },
            Transition::ClearAll => QueryState::default(),
        }
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == QueryState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn on_page_three() -> QueryState {
        QueryState {
            search_text: "coffee".to_string(),
            criteria: FilterCriteria::default().with_location("Lagos"),
            sort_key: SortKey::NameAscending,
            page: page(3),
        }
    }

    #[test]
    fn default_state() {
        let state = QueryState::default();
        assert!(state.search_text.is_empty());
        assert!(state.criteria.is_unrestricted());
        assert_eq!(state.sort_key, SortKey::RatingDescending);
        assert_eq!(state.page.get(), 1);
        assert!(state.is_default());
    }

    #[test]
    fn set_search_text_resets_page() {
        let next = on_page_three().apply(Transition::SetSearchText("tea".to_string()));
        assert_eq!(next.search_text, "tea");
        assert_eq!(next.page.get(), 1);
        assert_eq!(next.sort_key, SortKey::NameAscending);
    }

    #[test]
    fn set_filters_replaces_wholesale_and_resets_page() {
        let criteria = FilterCriteria::default().with_category("plumber");
        let next = on_page_three().apply(Transition::SetFilters(criteria.clone()));
        assert_eq!(next.criteria, criteria);
        assert!(next.criteria.locations.is_empty());
        assert_eq!(next.page.get(), 1);
        assert_eq!(next.search_text, "coffee");
    }

    #[test]
    fn set_filters_normalizes_input() {
        let criteria = FilterCriteria::default().with_min_rating(-1.0);
        let next = QueryState::default().apply(Transition::SetFilters(criteria));
        assert_eq!(next.criteria.min_rating, Some(0.0));
    }

    #[test]
    fn set_sort_key_keeps_page() {
        let next = on_page_three().apply(Transition::SetSortKey(SortKey::NewestFirst));
        assert_eq!(next.sort_key, SortKey::NewestFirst);
        assert_eq!(next.page.get(), 3);
    }

    #[test]
    fn set_page_zero_is_a_no_op() {
        let before = on_page_three();
        assert_eq!(before.apply(Transition::SetPage(0)), before);
        assert_eq!(before.apply(Transition::SetPage(7)).page.get(), 7);
    }

    #[test]
    fn clear_all_restores_defaults() {
        assert!(on_page_three().apply(Transition::ClearAll).is_default());
    }
}
