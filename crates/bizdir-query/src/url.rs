//! Query-string codec for [`QueryState`].
//!
//! ## Parameters
//!
//! | Key | Field | Omitted when |
//! |---|---|---|
//! | `q` | search text | empty |
//! | `category` (repeatable) | category set | set is empty |
//! | `location` (repeatable) | location set | set is empty |
//! | `min_rating` | rating floor | no floor |
//! | `open_now`, `verified`, `offers` | boolean flags, `1` when set | flag is off |
//! | `sort` | sort key slug | default sort |
//! | `page` | page number | page 1 |
//!
//! Encoding is canonical: parameters appear in the order above and set
//! members in sorted order, so two equal states always encode to the same
//! string. Decoding never fails; unknown keys, malformed values and invalid
//! UTF-8 are skipped and the field keeps its default.

use std::borrow::Cow;
use std::num::NonZeroUsize;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::filter::FilterCriteria;
use crate::sort::SortKey;
use crate::state::QueryState;

/// Everything except RFC 3986 unreserved characters is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub const PARAM_SEARCH: &str = "q";
pub const PARAM_CATEGORY: &str = "category";
pub const PARAM_LOCATION: &str = "location";
pub const PARAM_MIN_RATING: &str = "min_rating";
pub const PARAM_OPEN_NOW: &str = "open_now";
pub const PARAM_VERIFIED: &str = "verified";
pub const PARAM_OFFERS: &str = "offers";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_PAGE: &str = "page";

/// Canonical query string for `state`, without a leading `?`.
#[must_use]
pub fn encode(state: &QueryState) -> String {
    let mut pairs: Vec<(&str, Cow<'_, str>)> = Vec::new();
    let criteria = &state.criteria;

    if !state.search_text.is_empty() {
        pairs.push((PARAM_SEARCH, Cow::Borrowed(state.search_text.as_str())));
    }
    for category in &criteria.categories {
        pairs.push((PARAM_CATEGORY, Cow::Borrowed(category.as_str())));
    }
    for location in &criteria.locations {
        pairs.push((PARAM_LOCATION, Cow::Borrowed(location.as_str())));
    }
    if let Some(floor) = criteria.min_rating {
        pairs.push((PARAM_MIN_RATING, Cow::Owned(floor.to_string())));
    }
    if criteria.open_now {
        pairs.push((PARAM_OPEN_NOW, Cow::Borrowed("1")));
    }
    if criteria.verified_only {
        pairs.push((PARAM_VERIFIED, Cow::Borrowed("1")));
    }
    if criteria.has_offers {
        pairs.push((PARAM_OFFERS, Cow::Borrowed("1")));
    }
    if state.sort_key != SortKey::default() {
        pairs.push((PARAM_SORT, Cow::Borrowed(state.sort_key.slug())));
    }
    if state.page != NonZeroUsize::MIN {
        pairs.push((PARAM_PAGE, Cow::Owned(state.page.to_string())));
    }

    pairs
        .iter()
        .map(|(key, value)| format!("{key}={}", utf8_percent_encode(value, COMPONENT)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build a state from a query string. A leading `?` is accepted.
#[must_use]
pub fn decode(query: &str) -> QueryState {
    let mut state = QueryState::default();
    let mut criteria = FilterCriteria::default();

    for (key, value) in parse_pairs(query) {
        match key.as_str() {
            PARAM_SEARCH => state.search_text = value,
            PARAM_CATEGORY => {
                criteria.categories.insert(value);
            }
            PARAM_LOCATION => {
                criteria.locations.insert(value);
            }
            PARAM_MIN_RATING => {
                if let Ok(floor) = value.trim().parse::<f64>() {
                    criteria.min_rating = Some(floor);
                }
            }
            PARAM_OPEN_NOW => criteria.open_now = parse_flag(&value),
            PARAM_VERIFIED => criteria.verified_only = parse_flag(&value),
            PARAM_OFFERS => criteria.has_offers = parse_flag(&value),
            PARAM_SORT => {
                if let Some(key) = SortKey::from_slug(value.trim()) {
                    state.sort_key = key;
                }
            }
            PARAM_PAGE => {
                if let Some(page) = value
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(NonZeroUsize::new)
                {
                    state.page = page;
                }
            }
            _ => {}
        }
    }

    state.criteria = criteria.normalized();
    state
}

/// The query portion of a URL: after `?`, before any `#`. Empty when absent.
#[must_use]
pub fn query_part(url: &str) -> &str {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    without_fragment
        .split_once('?')
        .map_or("", |(_, query)| query)
}

/// `url` with its query replaced by `query`; path and fragment are kept.
#[must_use]
pub fn with_query(url: &str, query: &str) -> String {
    let (head, fragment) = match url.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (url, None),
    };
    let path = head.split_once('?').map_or(head, |(path, _)| path);

    let mut out = String::with_capacity(path.len() + query.len() + 2);
    out.push_str(path);
    if !query.is_empty() {
        out.push('?');
        out.push_str(query);
    }
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}

fn parse_pairs(query: &str) -> impl Iterator<Item = (String, String)> + '_ {
    query
        .trim_start_matches('?')
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            Some((decode_component(raw_key)?, decode_component(raw_value)?))
        })
}

fn decode_component(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}

fn parse_flag(raw: &str) -> bool {
    let value = raw.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
#[path = "url_test.rs"]
mod tests;
