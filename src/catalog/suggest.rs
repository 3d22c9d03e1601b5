//! Suggestion engine over catalog names
//!
//! Case-insensitive substring matching, name-ascending, capped after
//! sorting. An empty query is a distinct state from a query with no
//! matches; the shell shows different messages for the two.

use super::CatalogStore;

/// Suggestions are truncated to this many names, after sorting.
pub const MAX_SUGGESTIONS: usize = 7;

/// Result of a suggestion query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Suggestions {
    /// Empty or whitespace-only query: prompt the operator to type
    Prompt,
    /// Non-empty query that matched nothing
    NoMatch,
    /// Matching names, ascending, at most [`MAX_SUGGESTIONS`]
    Matches(Vec<String>),
}

impl CatalogStore {
    /// Suggest catalog names containing `query`, ignoring case.
    pub fn suggest(&self, query: &str) -> Suggestions {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Suggestions::Prompt;
        }

        // Map iteration is already name-ascending, so truncation keeps
        // the first MAX_SUGGESTIONS of the sorted matches.
        let mut matches: Vec<String> = self
            .items
            .keys()
            .filter(|name| name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if matches.is_empty() {
            return Suggestions::NoMatch;
        }
        matches.truncate(MAX_SUGGESTIONS);
        Suggestions::Matches(matches)
    }
}
