use std::collections::BTreeMap;

use bizdir_core::{Business, BusinessId, Catalog, CatalogProvider, Category, StaticCatalogProvider};
use bizdir_query::{
    FilterCriteria, FixedClock, History, MemoryHistory, PageConfig, QuerySession, SortKey,
    Transition,
};
use chrono::Weekday;

fn entry(id: u64, name: &str, category: Category, subcategory: &str, rating: f64) -> Business {
    Business {
        id: BusinessId(id),
        name: name.to_string(),
        category,
        subcategory: subcategory.to_string(),
        description: String::new(),
        location: if id % 2 == 0 { "Lagos" } else { "Abuja" }.to_string(),
        rating,
        review_count: u32::try_from(id * 7).unwrap(),
        verified: id % 3 == 0,
        services: vec![],
        tags: vec![],
        hours: BTreeMap::new(),
        pricing: None,
        offers: vec![],
    }
}

fn fourteen_businesses() -> Catalog {
    StaticCatalogProvider::new(vec![
        entry(1, "Ace Plumbing", Category::HomeServices, "plumber", 4.2),
        entry(2, "Bright Sparks", Category::HomeServices, "electrician", 4.9),
        entry(3, "Pipe Masters", Category::HomeServices, "plumber", 4.7),
        entry(4, "Coffee Corner", Category::Restaurants, "cafe", 4.4),
        entry(5, "Mama Put Kitchen", Category::Restaurants, "restaurants", 4.1),
        entry(6, "Drip Fix", Category::HomeServices, "plumber", 3.6),
        entry(7, "Glow Spa", Category::Beauty, "spa", 4.8),
        entry(8, "Auto Pro", Category::Automotive, "mechanic", 3.9),
        entry(9, "City Clinic", Category::Health, "clinic", 4.6),
        entry(10, "Book Nook", Category::Retail, "bookstore", 4.0),
        entry(11, "Tutor Hub", Category::Education, "tutoring", 4.3),
        entry(12, "Ledger & Co", Category::Professional, "accounting", 4.5),
        entry(13, "Suya Spot", Category::Restaurants, "restaurants", 4.7),
        entry(14, "Fade Barbers", Category::Beauty, "barber", 4.2),
    ])
    .load()
    .expect("valid catalog")
}

fn session(url: &str) -> QuerySession<MemoryHistory, FixedClock> {
    QuerySession::create_with_clock(
        MemoryHistory::new(url),
        PageConfig::default(),
        FixedClock(Weekday::Wed),
    )
}

#[test]
fn plumber_filter_fits_on_one_page_sorted_by_rating() {
    let catalog = fourteen_businesses();
    let mut s = session("/listings");
    s.dispatch(Transition::SetFilters(
        FilterCriteria::default().with_category("plumber"),
    ));

    let snapshot = s.snapshot(catalog.businesses());
    assert_eq!(snapshot.page.total_pages, 1);
    assert_eq!(snapshot.page.items.len(), 3);
    assert_eq!(snapshot.page.items[0].name, "Pipe Masters");
    let top = snapshot.page.items[0].rating;
    assert!(snapshot.page.items.iter().all(|b| b.rating <= top));
}

#[test]
fn unfiltered_catalog_spans_two_pages() {
    let catalog = fourteen_businesses();
    let mut s = session("/listings");

    let first = s.snapshot(catalog.businesses());
    assert_eq!(first.page.total_matched, 14);
    assert_eq!(first.page.total_pages, 2);
    assert_eq!(first.page.items.len(), 12);

    s.dispatch(Transition::SetPage(2));
    let second = s.snapshot(catalog.businesses());
    assert_eq!(second.page.items.len(), 2);
    assert_eq!(s.history().current(), "/listings?page=2");
}

#[test]
fn deep_link_search_within_category() {
    let catalog = fourteen_businesses();
    let s = session("/listings?q=suya&category=restaurants");
    let snapshot = s.snapshot(catalog.businesses());
    assert_eq!(snapshot.page.total_matched, 1);
    assert_eq!(snapshot.page.items[0].id, BusinessId(13));
    assert_eq!(snapshot.canonical_query, "q=suya&category=restaurants");
}

#[test]
fn sort_change_on_page_two_stays_on_page_two() {
    let catalog = fourteen_businesses();
    let mut s = session("/listings?page=2");
    s.dispatch(Transition::SetSortKey(SortKey::NewestFirst));

    let snapshot = s.snapshot(catalog.businesses());
    assert_eq!(snapshot.page.page, 2);
    let ids: Vec<u64> = snapshot.page.items.iter().map(|b| b.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn stale_page_is_clamped_after_narrowing_by_navigation() {
    let catalog = fourteen_businesses();
    let mut s = session("/listings?page=2");
    s.history_mut().push("/listings?location=Lagos&page=2");
    s.on_navigation();

    let snapshot = s.snapshot(catalog.businesses());
    assert_eq!(snapshot.page.total_matched, 7);
    assert_eq!(snapshot.page.total_pages, 1);
    assert_eq!(snapshot.page.page, 1);
    assert_eq!(snapshot.page.items.len(), 7);
}

#[test]
fn no_matches_is_an_empty_page_not_an_error() {
    let catalog = fourteen_businesses();
    let s = session("/listings?q=submarine");
    let snapshot = s.snapshot(catalog.businesses());
    assert_eq!(snapshot.page.total_matched, 0);
    assert_eq!(snapshot.page.total_pages, 1);
    assert!(snapshot.page.items.is_empty());
}

#[test]
fn empty_catalog_behaves_like_no_matches() {
    let s = session("/listings?category=plumber");
    let snapshot = s.snapshot(Catalog::empty().businesses());
    assert_eq!(snapshot.page.total_pages, 1);
    assert!(snapshot.page.items.is_empty());
}

#[test]
fn snapshot_serializes_for_the_render_layer() {
    let catalog = fourteen_businesses();
    let s = session("/listings?verified=1&sort=reviews");
    let snapshot = s.snapshot(catalog.businesses());
    let json = serde_json::to_value(&snapshot).expect("serialize snapshot");
    assert_eq!(json["state"]["sort_key"], "review_count_descending");
    assert_eq!(json["state"]["criteria"]["verified_only"], true);
    assert_eq!(json["page"]["total_matched"], 4);
    assert_eq!(json["page"]["items"][0]["id"], 12);
}
