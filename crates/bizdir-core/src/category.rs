use serde::{Deserialize, Serialize};

/// Top-level directory taxonomy.
///
/// Slugs that do not name a known category parse to [`Category::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    HomeServices,
    Restaurants,
    Health,
    Automotive,
    Beauty,
    Professional,
    Retail,
    Education,
    #[default]
    #[serde(other)]
    Other,
}

impl Category {
    /// Every category in display order, `Other` last.
    pub const ALL: [Category; 9] = [
        Category::HomeServices,
        Category::Restaurants,
        Category::Health,
        Category::Automotive,
        Category::Beauty,
        Category::Professional,
        Category::Retail,
        Category::Education,
        Category::Other,
    ];

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Category::HomeServices => "home-services",
            Category::Restaurants => "restaurants",
            Category::Health => "health",
            Category::Automotive => "automotive",
            Category::Beauty => "beauty",
            Category::Professional => "professional",
            Category::Retail => "retail",
            Category::Education => "education",
            Category::Other => "other",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::HomeServices => "Home Services",
            Category::Restaurants => "Restaurants & Food",
            Category::Health => "Health & Medical",
            Category::Automotive => "Automotive",
            Category::Beauty => "Beauty & Spa",
            Category::Professional => "Professional Services",
            Category::Retail => "Shopping & Retail",
            Category::Education => "Education",
            Category::Other => "Other",
        }
    }

    /// Parse a slug, case-insensitively. Unknown slugs map to `Other`.
    #[must_use]
    pub fn from_slug(raw: &str) -> Self {
        let wanted = raw.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.slug().eq_ignore_ascii_case(wanted))
            .unwrap_or_default()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}
