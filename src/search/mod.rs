//! Free-text filter over the loaded member list.
//!
//! Pure and synchronous: recomputed from scratch on every keystroke and every
//! store mutation. At directory scale (tens to low hundreds of loaded
//! members) a full recompute is both correct and fast; no incremental index
//! is kept.

use crate::models::Member;

/// Case-insensitive substring filter over name, email and about.
///
/// An empty or whitespace-only query returns the input unchanged; otherwise
/// the result is the subsequence of members matching the query in any of the
/// three fields, in their original relative order.
pub fn filter<'a>(members: &'a [Member], query: &str) -> Vec<&'a Member> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return members.iter().collect();
    }

    members
        .iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&needle)
                || m.email.to_lowercase().contains(&needle)
                || m.about
                    .as_deref()
                    .is_some_and(|about| about.to_lowercase().contains(&needle))
        })
        .collect()
}
