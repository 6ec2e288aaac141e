use bizdir_core::Business;
use chrono::Weekday;
use serde::Serialize;

use crate::filter::Predicate;
use crate::paginate::{paginate, PageConfig, ResultPage};
use crate::sort::sort_businesses;
use crate::state::QueryState;
use crate::url;

/// Everything a presentation layer needs for one render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub state: QueryState,
    pub page: ResultPage<Business>,
    pub canonical_query: String,
}

/// Filter, order and paginate `catalog` for `state`.
#[must_use]
pub fn run_query(
    catalog: &[Business],
    state: &QueryState,
    config: PageConfig,
    today: Weekday,
) -> ResultPage<Business> {
    let predicate = Predicate::new(&state.search_text, &state.criteria, today);
    let mut matched: Vec<&Business> = catalog.iter().filter(|b| predicate.matches(b)).collect();
    sort_businesses(&mut matched, state.sort_key);

    let page = paginate(&matched, config.page_size, state.page.get());
    ResultPage {
        items: page.items.into_iter().cloned().collect(),
        total_matched: page.total_matched,
        total_pages: page.total_pages,
        page: page.page,
    }
}

#[must_use]
pub fn render(
    catalog: &[Business],
    state: &QueryState,
    config: PageConfig,
    today: Weekday,
) -> RenderSnapshot {
    RenderSnapshot {
        state: state.clone(),
        page: run_query(catalog, state, config, today),
        canonical_query: url::encode(state),
    }
}
