//! Screen-lifetime context for the Community directory.
//!
//! Owns the store, fetcher, sentinel and query as one value: constructed on
//! mount, dropped on unmount. Dropping the context drops any in-flight fetch
//! future with it, so a late-arriving response can never act on a dead
//! screen.

use crate::config::Config;
use crate::errors::AppError;
use crate::fetch::{FetchState, PageFetcher};
use crate::models::{CurrentUser, Member};
use crate::search;
use crate::sentinel::ScrollSentinel;
use crate::store::MemberStore;

/// The Community screen's state: accumulated members, fetch machinery, the
/// scroll sentinel and the active search query.
pub struct Directory {
    store: MemberStore,
    fetcher: PageFetcher,
    sentinel: ScrollSentinel,
    query: String,
    asset_base: String,
    current_user: Option<CurrentUser>,
}

impl Directory {
    /// Mount the screen: empty store, cursor at page 1. Call
    /// [`Directory::load_first_page`] (or feed a visibility event) to start
    /// fetching.
    pub fn mount(config: &Config, current_user: Option<CurrentUser>) -> Result<Self, AppError> {
        Ok(Self {
            store: MemberStore::new(),
            fetcher: PageFetcher::new(config)?,
            sentinel: ScrollSentinel::new(),
            query: String::new(),
            asset_base: config.asset_base.clone(),
            current_user,
        })
    }

    /// Members visible after applying the current search query, in store
    /// order. Search narrows what is displayed, never what is requested.
    pub fn visible(&self) -> Vec<&Member> {
        search::filter(self.store.all(), &self.query)
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.fetcher.state()
    }

    /// Message of the last fetch failure, for the retry affordance.
    pub fn last_error(&self) -> Option<&str> {
        match self.fetcher.state() {
            FetchState::Errored(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn loaded_count(&self) -> usize {
        self.store.len()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Update the search query and re-point the sentinel at the filtered
    /// view's new tail.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
        self.retarget_sentinel();
    }

    /// Initial fetch on mount.
    pub async fn load_first_page(&mut self) {
        self.fetcher.request_next_page(&mut self.store).await;
        self.retarget_sentinel();
    }

    /// Feed a visibility change for the list tail. Fetches the next page
    /// when the sentinel fires (visibility edge while the fetcher is idle).
    pub async fn sentinel_visible(&mut self, visible: bool) {
        if self.sentinel.on_visibility(visible, self.fetcher.state()) {
            self.fetcher.request_next_page(&mut self.store).await;
            self.retarget_sentinel();
        }
    }

    /// Explicit retry after a fetch failure, e.g. from a "try again" button.
    pub async fn retry(&mut self) {
        if matches!(self.fetcher.state(), FetchState::Errored(_)) {
            self.fetcher.request_next_page(&mut self.store).await;
            self.retarget_sentinel();
        }
    }

    /// Full restart: clear the store, reset the cursor, refetch page 1.
    pub async fn refresh(&mut self) {
        self.store.clear();
        self.fetcher.reset();
        self.sentinel.observe_tail(None);
        self.load_first_page().await;
    }

    /// Whether the delete affordance is shown for this member. The server
    /// remains the authority on whether a delete actually succeeds.
    pub fn can_delete(&self, member: &Member) -> bool {
        self.current_user
            .as_ref()
            .is_some_and(|user| user.owns(member))
    }

    /// Delete a member, server-confirmed. The store is only mutated after
    /// the backend acknowledges, so a failed delete never desyncs the view.
    /// Returns whether the id was present locally.
    pub async fn delete(&mut self, id: &str) -> Result<bool, AppError> {
        self.fetcher.delete_member(id).await?;
        let removed = self.store.remove(id);
        self.retarget_sentinel();
        Ok(removed)
    }

    /// Resolve a member's avatar against the configured asset base.
    pub fn avatar_url(&self, member: &Member) -> Option<String> {
        member.avatar_url(&self.asset_base)
    }

    fn retarget_sentinel(&mut self) {
        let tail = self.visible().last().map(|m| m.id.clone());
        self.sentinel.observe_tail(tail.as_deref());
    }
}
