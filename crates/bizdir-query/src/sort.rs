use std::cmp::Ordering;

use bizdir_core::Business;
use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    RatingDescending,
    ReviewCountDescending,
    NameAscending,
    NewestFirst,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::RatingDescending,
        SortKey::ReviewCountDescending,
        SortKey::NameAscending,
        SortKey::NewestFirst,
    ];

    /// Short form used in URLs.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            SortKey::RatingDescending => "rating",
            SortKey::ReviewCountDescending => "reviews",
            SortKey::NameAscending => "name",
            SortKey::NewestFirst => "newest",
        }
    }

    #[must_use]
    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.slug() == raw)
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

pub type Comparator = fn(&Business, &Business) -> Ordering;

#[must_use]
pub fn comparator(key: SortKey) -> Comparator {
    match key {
        SortKey::RatingDescending => by_rating_desc,
        SortKey::ReviewCountDescending => by_reviews_desc,
        SortKey::NameAscending => by_name_asc,
        SortKey::NewestFirst => by_newest,
    }
}

/// Stable in-place sort; equal keys keep catalog order.
pub fn sort_businesses(items: &mut [&Business], key: SortKey) {
    let cmp = comparator(key);
    items.sort_by(|a, b| cmp(a, b));
}

fn by_rating_desc(a: &Business, b: &Business) -> Ordering {
    b.rating.total_cmp(&a.rating)
}

fn by_reviews_desc(a: &Business, b: &Business) -> Ordering {
    b.review_count.cmp(&a.review_count)
}

// Accents and case are ignored first, then accented after plain, then
// lowercase before uppercase.
fn by_name_asc(a: &Business, b: &Business) -> Ordering {
    primary_key(&a.name)
        .cmp(primary_key(&b.name))
        .then_with(|| folded(&a.name).cmp(folded(&b.name)))
        .then_with(|| b.name.cmp(&a.name))
}

fn primary_key(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}

// Identifier stands in for creation time.
fn by_newest(a: &Business, b: &Business) -> Ordering {
    b.id.cmp(&a.id)
}
