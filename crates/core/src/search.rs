//! Free-text search over in-memory lists.
//!
//! Every list screen filters its last fetched collection with the same rule:
//! a case-insensitive substring match of the query against one or more text
//! fields of each entity. An empty query matches everything.

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// A search query, lowercased once when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// The query as the operator typed it.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// True when the query is empty or at least one field contains it.
    ///
    /// # Examples
    ///
    /// ```
    /// use harpal_core::search::SearchQuery;
    /// let q = SearchQuery::new("TECH");
    /// assert!(q.matches(["Technology"]));
    /// assert!(!q.matches(["Design"]));
    /// assert!(SearchQuery::default().matches(["anything"]));
    /// ```
    pub fn matches<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields
            .into_iter()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

impl From<&str> for SearchQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}
