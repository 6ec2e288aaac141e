use std::collections::BTreeMap;

use bizdir_core::{Business, BusinessId, Catalog, Category};
use bizdir_query::{History, SortKey};

use super::*;

fn business(id: u64, name: &str, category: Category, location: &str, rating: f64) -> Business {
    Business {
        id: BusinessId(id),
        name: name.to_string(),
        category,
        subcategory: "plumber".to_string(),
        description: String::new(),
        location: location.to_string(),
        rating,
        review_count: 10,
        verified: id % 2 == 0,
        services: vec![],
        tags: vec![],
        hours: BTreeMap::new(),
        pricing: None,
        offers: vec![],
    }
}

fn parse_search(args: &[&str]) -> search::SearchArgs {
    let mut argv = vec!["bizdir-cli", "search"];
    argv.extend_from_slice(args);
    let cli = Cli::try_parse_from(argv).expect("expected valid cli args");
    match cli.command {
        Some(Commands::Search(args)) => args,
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bizdir-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_validate_with_catalog_path() {
    let cli = Cli::try_parse_from(["bizdir-cli", "validate", "--catalog", "/tmp/c.yaml"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Validate { catalog }) => {
            assert_eq!(catalog, std::path::PathBuf::from("/tmp/c.yaml"));
        }
        other => panic!("expected validate command, got {other:?}"),
    }
}

#[test]
fn parses_search_flags() {
    let args = parse_search(&[
        "--q",
        "pipe",
        "--category",
        "plumber",
        "--category",
        "electrician",
        "--open-now",
        "--sort",
        "name",
        "--page",
        "2",
    ]);
    assert_eq!(args.q.as_deref(), Some("pipe"));
    assert_eq!(args.category, vec!["plumber", "electrician"]);
    assert!(args.open_now);
    assert!(!args.verified);
    assert_eq!(args.sort, Some(SortKey::NameAscending));
    assert_eq!(args.page, Some(2));
}

#[test]
fn rejects_unknown_sort_key() {
    let result = Cli::try_parse_from(["bizdir-cli", "search", "--sort", "cheapest"]);
    assert!(result.is_err());
}

#[test]
fn starting_url_defaults_to_listing_path() {
    assert_eq!(search::starting_url(None), "/listings");
}

#[test]
fn starting_url_mounts_bare_query() {
    assert_eq!(
        search::starting_url(Some("q=suya&page=2")),
        "/listings?q=suya&page=2"
    );
}

#[test]
fn starting_url_keeps_full_url() {
    assert_eq!(
        search::starting_url(Some("/directory?q=suya")),
        "/directory?q=suya"
    );
}

#[test]
fn session_from_args_applies_flags_in_canonical_order() {
    let args = parse_search(&[
        "--location",
        "Lagos",
        "--q",
        "drip fix",
        "--min-rating",
        "4.5",
        "--verified",
    ]);
    let session = search::session_from_args(&args).expect("session");

    assert_eq!(session.state().search_text, "drip fix");
    assert!(session.state().criteria.verified_only);
    assert_eq!(
        session.history().current(),
        "/listings?q=drip%20fix&location=Lagos&min_rating=4.5&verified=1"
    );
}

#[test]
fn session_from_args_page_flag_survives_filters() {
    let args = parse_search(&["--url", "category=plumber&page=3", "--page", "2"]);
    let session = search::session_from_args(&args).expect("session");

    assert_eq!(session.state().page.get(), 2);
    assert_eq!(
        session.history().current(),
        "/listings?category=plumber&page=2"
    );
}

#[test]
fn session_from_args_without_flags_keeps_deep_link_page() {
    let args = parse_search(&["--url", "/listings?page=3"]);
    let session = search::session_from_args(&args).expect("session");

    assert_eq!(session.state().page.get(), 3);
    assert_eq!(session.history().current(), "/listings?page=3");
}

#[test]
fn session_from_args_rejects_zero_page_size() {
    let args = parse_search(&["--page-size", "0"]);
    assert!(search::session_from_args(&args).is_err());
}

#[test]
fn format_snapshot_numbers_rows_from_page_offset() {
    let businesses: Vec<Business> = (1..=5)
        .map(|id| {
            business(
                id,
                &format!("Shop {id}"),
                Category::HomeServices,
                "Lagos",
                5.0 - id as f64 * 0.1,
            )
        })
        .collect();
    let args = parse_search(&["--page-size", "2", "--page", "3"]);
    let session = search::session_from_args(&args).expect("session");
    let snapshot = session.snapshot(&businesses);

    let out = search::format_snapshot(&snapshot, 2, session.history().current());
    assert!(out.contains("  5. Shop 5 (plumber, Lagos)"), "{out}");
    assert!(out.contains("page 3/3, 5 matched"), "{out}");
    assert!(out.ends_with("url: /listings?page=3\n"), "{out}");
}

#[test]
fn format_snapshot_reports_empty_results() {
    let args = parse_search(&["--q", "nothing like this"]);
    let session = search::session_from_args(&args).expect("session");
    let snapshot = session.snapshot(&[]);

    let out = search::format_snapshot(&snapshot, 12, session.history().current());
    assert!(out.starts_with("no businesses match\n"));
    assert!(out.contains("page 1/1, 0 matched"));
}

#[test]
fn summarize_lists_nonempty_categories() {
    let catalog = Catalog::new(vec![
        business(1, "Ace Plumbing", Category::HomeServices, "Lagos", 4.2),
        business(2, "Mama Put", Category::Restaurants, "Abuja", 4.5),
        business(3, "Pipe Masters", Category::HomeServices, "Abuja", 4.7),
    ])
    .expect("catalog");

    let summary = validate::summarize(&catalog);
    assert!(summary.starts_with("3 businesses across 2 locations\n"));
    assert!(summary.contains(Category::HomeServices.label()));
    assert!(summary.contains(Category::Restaurants.label()));
    assert!(!summary.contains(Category::Automotive.label()));
}
