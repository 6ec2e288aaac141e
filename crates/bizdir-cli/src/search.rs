use std::fmt::Write as _;
use std::path::PathBuf;

use bizdir_core::{CatalogProvider, FileCatalogProvider};
use bizdir_query::{
    url, History, MemoryHistory, PageConfig, QuerySession, RenderSnapshot, SortKey, Transition,
};

const LISTING_PATH: &str = "/listings";

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SearchArgs {
    #[arg(long, env = "BIZDIR_CATALOG_PATH", default_value = "./config/catalog.yaml")]
    pub catalog: PathBuf,

    /// Listing URL or bare query string to start from
    #[arg(long)]
    pub url: Option<String>,

    #[arg(long)]
    pub q: Option<String>,

    #[arg(long)]
    pub category: Vec<String>,

    #[arg(long)]
    pub location: Vec<String>,

    #[arg(long)]
    pub min_rating: Option<f64>,

    #[arg(long)]
    pub open_now: bool,

    #[arg(long)]
    pub verified: bool,

    #[arg(long)]
    pub offers: bool,

    /// rating | reviews | name | newest
    #[arg(long, value_parser = parse_sort_key)]
    pub sort: Option<SortKey>,

    #[arg(long)]
    pub page: Option<usize>,

    #[arg(long, env = "BIZDIR_PAGE_SIZE", default_value_t = bizdir_core::DEFAULT_PAGE_SIZE)]
    pub page_size: usize,

    /// Print the render snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_sort_key(raw: &str) -> Result<SortKey, String> {
    SortKey::from_slug(raw).ok_or_else(|| format!("unknown sort key '{raw}'"))
}

/// Starting URL for the session; a bare query string is mounted on the listing path.
pub(crate) fn starting_url(raw: Option<&str>) -> String {
    match raw {
        None => LISTING_PATH.to_string(),
        Some(raw) if raw.contains('?') => raw.to_string(),
        Some(raw) => url::with_query(LISTING_PATH, raw),
    }
}

/// Build a session from the arguments, applying flags as user transitions.
pub(crate) fn session_from_args(args: &SearchArgs) -> anyhow::Result<QuerySession<MemoryHistory>> {
    let page_size = std::num::NonZeroUsize::new(args.page_size)
        .ok_or_else(|| anyhow::anyhow!("--page-size must be positive"))?;
    let history = MemoryHistory::new(starting_url(args.url.as_deref()));
    let mut session = QuerySession::create(history, PageConfig::new(page_size));

    if let Some(q) = args.q.as_ref().filter(|q| **q != session.state().search_text) {
        session.dispatch(Transition::SetSearchText(q.clone()));
    }

    let mut criteria = session.state().criteria.clone();
    criteria.categories.extend(args.category.iter().cloned());
    criteria.locations.extend(args.location.iter().cloned());
    if let Some(floor) = args.min_rating {
        criteria.min_rating = Some(floor);
    }
    criteria.open_now |= args.open_now;
    criteria.verified_only |= args.verified;
    criteria.has_offers |= args.offers;
    // SetFilters always resets the page, so skip it when nothing changed.
    let criteria = criteria.normalized();
    if criteria != session.state().criteria {
        session.dispatch(Transition::SetFilters(criteria));
    }

    if let Some(sort) = args.sort {
        session.dispatch(Transition::SetSortKey(sort));
    }
    if let Some(page) = args.page {
        session.dispatch(Transition::SetPage(page));
    }

    Ok(session)
}

pub(crate) fn run(args: &SearchArgs) -> anyhow::Result<()> {
    let catalog = FileCatalogProvider::new(&args.catalog).load()?;
    let session = session_from_args(args)?;
    let snapshot = session.snapshot(catalog.businesses());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        let page_size = session.config().page_size.get();
        print!(
            "{}",
            format_snapshot(&snapshot, page_size, session.history().current())
        );
    }
    Ok(())
}

pub(crate) fn format_snapshot(
    snapshot: &RenderSnapshot,
    page_size: usize,
    current_url: &str,
) -> String {
    let page = &snapshot.page;
    let mut out = String::new();
    if page.items.is_empty() {
        out.push_str("no businesses match\n");
    }

    let offset = (page.page - 1) * page_size;
    for (idx, b) in page.items.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>3}. {} ({}, {}) {:.1} stars, {} reviews{}",
            offset + idx + 1,
            b.name,
            b.subcategory,
            b.location,
            b.rating,
            b.review_count,
            if b.verified { ", verified" } else { "" }
        );
    }
    let _ = writeln!(
        out,
        "page {}/{}, {} matched",
        page.page, page.total_pages, page.total_matched
    );
    let _ = writeln!(out, "url: {current_url}");
    out
}
