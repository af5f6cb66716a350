//! In-memory member store accumulated across pages.
//!
//! Ordered and deduplicated by id: insertion order is page-arrival order, and
//! an id that was already seen is never inserted again. Duplicate delivery of
//! a whole page is therefore a no-op.

use std::collections::HashSet;

use crate::models::Member;

/// Ordered, deduplicated collection of members.
#[derive(Debug, Default)]
pub struct MemberStore {
    members: Vec<Member>,
    seen: HashSet<String>,
}

impl MemberStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a page of members, skipping ids already present.
    ///
    /// Order of `new_members` is preserved among the inserted subset.
    /// Idempotent under resubmission of an already-seen page.
    pub fn append_page(&mut self, new_members: Vec<Member>) {
        for member in new_members {
            if self.seen.insert(member.id.clone()) {
                self.members.push(member);
            }
        }
    }

    /// Remove the member with the given id. Returns whether a removal
    /// occurred; absent ids are not an error (deletions may race with a
    /// stale view).
    pub fn remove(&mut self, id: &str) -> bool {
        if !self.seen.remove(id) {
            return false;
        }
        self.members.retain(|m| m.id != id);
        true
    }

    /// Read-only ordered snapshot of the current contents.
    pub fn all(&self) -> &[Member] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Drop all members, e.g. on a full screen refresh.
    pub fn clear(&mut self) {
        self.members.clear();
        self.seen.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str) -> Member {
        Member {
            id: id.to_string(),
            name: format!("Member {}", id),
            email: format!("{}@example.com", id),
            about: None,
            linkedin_url: None,
            github_url: None,
            avatar_ref: None,
            created_at: None,
        }
    }

    fn ids(store: &MemberStore) -> Vec<&str> {
        store.all().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_append_preserves_arrival_order() {
        let mut store = MemberStore::new();
        store.append_page(vec![member("1"), member("2"), member("3")]);
        store.append_page(vec![member("4"), member("5")]);

        assert_eq!(ids(&store), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_append_dedups_overlapping_pages() {
        let mut store = MemberStore::new();
        store.append_page(vec![member("1"), member("2")]);
        store.append_page(vec![member("2"), member("3"), member("1")]);

        // First-seen order, each id at most once
        assert_eq!(ids(&store), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_duplicate_page_delivery_is_idempotent() {
        let page: Vec<Member> = (1..=10).map(|i| member(&i.to_string())).collect();

        let mut store = MemberStore::new();
        store.append_page(page.clone());
        let before = ids(&store).into_iter().map(String::from).collect::<Vec<_>>();

        store.append_page(page);
        assert_eq!(store.len(), 10);
        assert_eq!(ids(&store), before);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut store = MemberStore::new();
        store.append_page(vec![member("1"), member("2")]);

        assert!(store.remove("1"));
        assert!(!store.remove("1"));
        assert!(!store.remove("missing"));
        assert_eq!(ids(&store), vec!["2"]);
    }

    #[test]
    fn test_removed_id_may_be_reinserted() {
        let mut store = MemberStore::new();
        store.append_page(vec![member("1")]);
        store.remove("1");
        store.append_page(vec![member("1")]);

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_clear_resets_dedup_state() {
        let mut store = MemberStore::new();
        store.append_page(vec![member("1"), member("2")]);
        store.clear();

        assert!(store.is_empty());
        store.append_page(vec![member("1")]);
        assert_eq!(store.len(), 1);
    }
}
