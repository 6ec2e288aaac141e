use std::collections::BTreeMap;

use bizdir_core::{Business, BusinessId, Category};

pub(crate) fn business(id: u64, name: &str, subcategory: &str, location: &str, rating: f64) -> Business {
    Business {
        id: BusinessId(id),
        name: name.to_string(),
        category: Category::Other,
        subcategory: subcategory.to_string(),
        description: String::new(),
        location: location.to_string(),
        rating,
        review_count: 0,
        verified: false,
        services: vec![],
        tags: vec![],
        hours: BTreeMap::new(),
        pricing: None,
        offers: vec![],
    }
}

pub(crate) fn with_reviews(mut b: Business, review_count: u32) -> Business {
    b.review_count = review_count;
    b
}
