use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::category::Category;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Stable catalog identifier. Higher values were added to the directory later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessId(pub u64);

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    #[serde(default)]
    pub category: Category,
    pub subcategory: String,
    #[serde(default)]
    pub description: String,
    pub location: String,
    pub rating: f64,
    #[serde(default)]
    pub review_count: u32,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Day name (`"Monday"`) to `"Closed"`, `"24 Hours"` or a time range.
    #[serde(default)]
    pub hours: BTreeMap<String, String>,
    #[serde(default)]
    pub pricing: Option<String>,
    #[serde(default)]
    pub offers: Vec<String>,
}

impl Business {
    /// Look up the hours entry for a day name, ignoring ASCII case.
    #[must_use]
    pub fn hours_on(&self, day: &str) -> Option<DayStatus> {
        self.hours
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(day))
            .map(|(_, value)| DayStatus::parse(value))
    }

    #[must_use]
    pub fn has_offers(&self) -> bool {
        self.offers.iter().any(|o| !o.trim().is_empty())
    }

    /// Clamp the rating into `[0, 5]`; a NaN rating becomes 0.
    pub(crate) fn normalize(&mut self) {
        self.rating = clamp_rating(self.rating);
    }
}

#[must_use]
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        MIN_RATING
    } else {
        rating.clamp(MIN_RATING, MAX_RATING)
    }
}

/// Classified value of a single operating-hours entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayStatus {
    Closed,
    AllDay,
    Range(String),
}

impl DayStatus {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("closed") {
            DayStatus::Closed
        } else if trimmed.eq_ignore_ascii_case("24 hours") {
            DayStatus::AllDay
        } else {
            DayStatus::Range(trimmed.to_string())
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self, DayStatus::Closed)
    }
}
