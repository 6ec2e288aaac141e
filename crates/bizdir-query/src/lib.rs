//! Query State Engine for directory listings.
//!
//! Derives a page of results from an in-memory catalog (filter, stable sort,
//! paginate) and keeps the query state synchronized with a shareable URL.

pub mod clock;
pub mod filter;
pub mod paginate;
pub mod pipeline;
pub mod sort;
pub mod state;
pub mod sync;
pub mod url;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use clock::{Clock, FixedClock, SystemClock};
pub use filter::{FilterCriteria, Predicate};
pub use paginate::{paginate, total_pages, PageConfig, ResultPage};
pub use pipeline::{render, run_query, RenderSnapshot};
pub use sort::{comparator, sort_businesses, SortKey};
pub use state::{QueryState, Transition};
pub use sync::{History, MemoryHistory, QuerySession, SyncPhase};
