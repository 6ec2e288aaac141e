//! Keeps a [`QueryState`] and the browser URL convergent.
//!
//! Two guards break the update loop:
//! - decode applies a state decoded from the URL only when it differs
//!   structurally from the current state;
//! - encode replaces the URL only when the canonical query string differs
//!   from the one currently shown.
//!
//! Both directions run to completion inside a single call, so the session is
//! observable only in [`SyncPhase::Synced`].

use bizdir_core::Business;

use crate::clock::{Clock, SystemClock};
use crate::paginate::PageConfig;
use crate::pipeline::{render, RenderSnapshot};
use crate::state::{QueryState, Transition};
use crate::url;

/// Navigation history owned by the host environment.
pub trait History {
    /// URL currently shown, e.g. `/listings?q=coffee`.
    fn current(&self) -> &str;

    /// Swap the current entry in place; no new entry is recorded.
    fn replace(&mut self, url: String);
}

/// In-process history with back/forward support.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
    replace_count: usize,
}

impl MemoryHistory {
    #[must_use]
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            index: 0,
            replace_count: 0,
        }
    }

    /// Record a new entry, dropping any forward entries.
    pub fn push(&mut self, url: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(url.into());
        self.index = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    pub fn forward(&mut self) -> bool {
        if self.index + 1 >= self.entries.len() {
            return false;
        }
        self.index += 1;
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn replace_count(&self) -> usize {
        self.replace_count
    }
}

impl History for MemoryHistory {
    fn current(&self) -> &str {
        &self.entries[self.index]
    }

    fn replace(&mut self, url: String) {
        self.entries[self.index] = url;
        self.replace_count += 1;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Synced,
    Diverging,
}

/// The owned store for one listing view.
///
/// Lifecycle: [`QuerySession::create`], any number of
/// [`dispatch`](QuerySession::dispatch) / [`on_navigation`](QuerySession::on_navigation)
/// calls, then [`dispose`](QuerySession::dispose).
#[derive(Debug)]
pub struct QuerySession<H: History, C: Clock = SystemClock> {
    state: QueryState,
    history: H,
    clock: C,
    config: PageConfig,
    phase: SyncPhase,
    generation: u64,
}

impl<H: History> QuerySession<H, SystemClock> {
    pub fn create(history: H, config: PageConfig) -> Self {
        Self::create_with_clock(history, config, SystemClock)
    }
}

impl<H: History, C: Clock> QuerySession<H, C> {
    /// Seed state from the URL the history currently shows.
    ///
    /// A non-canonical initial URL is replaced once with its canonical form.
    pub fn create_with_clock(history: H, config: PageConfig, clock: C) -> Self {
        let state = url::decode(url::query_part(history.current()));
        tracing::debug!(url = history.current(), "query session created");

        let mut session = Self {
            state,
            history,
            clock,
            config,
            phase: SyncPhase::Synced,
            generation: 0,
        };
        session.sync_url();
        session
    }

    #[must_use]
    pub fn state(&self) -> &QueryState {
        &self.state
    }

    #[must_use]
    pub fn phase(&self) -> SyncPhase {
        self.phase
    }

    /// Incremented on every accepted state change. A pending asynchronous
    /// fetch started at an older generation is stale.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn config(&self) -> PageConfig {
        self.config
    }

    #[must_use]
    pub fn history(&self) -> &H {
        &self.history
    }

    /// Mutable access for the host to record external navigation; follow it
    /// with [`on_navigation`](Self::on_navigation).
    pub fn history_mut(&mut self) -> &mut H {
        &mut self.history
    }

    /// Apply a user-driven transition. Returns whether the state changed.
    pub fn dispatch(&mut self, transition: Transition) -> bool {
        let next = self.state.apply(transition);
        if next == self.state {
            return false;
        }
        self.commit(next);
        self.sync_url();
        true
    }

    /// The shown URL changed outside the session (deep link, back/forward).
    /// Returns whether the state changed.
    pub fn on_navigation(&mut self) -> bool {
        let candidate = url::decode(url::query_part(self.history.current()));
        if candidate == self.state {
            tracing::debug!(url = self.history.current(), "navigation matches current state");
            return false;
        }
        self.commit(candidate);
        self.sync_url();
        true
    }

    /// Derive the visible page from `catalog`.
    #[must_use]
    pub fn snapshot(&self, catalog: &[Business]) -> RenderSnapshot {
        render(catalog, &self.state, self.config, self.clock.today())
    }

    /// End the session and hand the history back to the host.
    pub fn dispose(self) -> H {
        tracing::debug!(generation = self.generation, "query session disposed");
        self.history
    }

    fn commit(&mut self, next: QueryState) {
        self.phase = SyncPhase::Diverging;
        self.state = next;
        self.generation += 1;
        tracing::debug!(generation = self.generation, "query state updated");
    }

    fn sync_url(&mut self) {
        let canonical = url::encode(&self.state);
        let current = self.history.current();

        if url::query_part(current) != canonical {
            let next_url = url::with_query(current, &canonical);
            tracing::debug!(from = current, to = %next_url, "replacing url");
            self.history.replace(next_url);
        }

        debug_assert_eq!(url::decode(&canonical), self.state);
        self.phase = SyncPhase::Synced;
    }
}

#[cfg(test)]
#[path = "sync_test.rs"]
mod tests;
