//! Common types for management list operations.

use serde::{Deserialize, Serialize};

/// A SCIM list response.
///
/// Returned by [`CloudDirectoryUsersClient::list`](crate::management::CloudDirectoryUsersClient::list).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Total number of matching records on the server.
    #[serde(default)]
    pub total_results: u32,
    /// Number of records in this page.
    #[serde(default)]
    pub items_per_page: u32,
    /// Index of the first record in this page, as echoed by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
    /// SCIM schema URNs.
    #[serde(default)]
    pub schemas: Vec<String>,
    /// The records in this page.
    #[serde(rename = "Resources", default = "Vec::new")]
    pub resources: Vec<T>,
}

impl<T> Page<T> {
    /// Returns `true` if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.resources.len()
    }

    /// Returns the `startIndex` to request for the following page, if the
    /// server reports more records beyond this one.
    ///
    /// `requested_start` is the `start_index` this page was requested with.
    pub fn next_start_index(&self, requested_start: u32) -> Option<u32> {
        let start = self.start_index.unwrap_or(requested_start).max(1);
        let next = start.saturating_add(self.resources.len() as u32);
        (!self.resources.is_empty() && next <= self.total_results).then_some(next)
    }

    /// Returns `true` if more records follow this page.
    pub fn has_next(&self, requested_start: u32) -> bool {
        self.next_start_index(requested_start).is_some()
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            total_results: 0,
            items_per_page: 0,
            start_index: None,
            schemas: Vec::new(),
            resources: Vec::new(),
        }
    }
}

/// Offset pagination and filtering for SCIM list operations.
///
/// `start_index` is always sent and passed through unchanged (SCIM indexes
/// are 1-based). `count` is sent only when non-zero, `query` only when
/// non-empty.
///
/// ```rust
/// use appid::management::PageOptions;
///
/// let options = PageOptions::new(1).with_count(10).with_query("alice");
/// assert_eq!(
///     options.to_query(),
///     vec![
///         ("startIndex".to_string(), "1".to_string()),
///         ("count".to_string(), "10".to_string()),
///         ("query".to_string(), "alice".to_string()),
///     ]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Index of the first record to return.
    pub start_index: u32,
    /// Maximum number of records to return; `0` leaves it to the server.
    pub count: u32,
    /// Free-text filter; empty means no filter.
    pub query: String,
}

impl PageOptions {
    /// Creates options starting at `start_index`.
    pub fn new(start_index: u32) -> Self {
        Self {
            start_index,
            ..Self::default()
        }
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Sets the free-text filter.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// Returns the raw query pairs to send.
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![("startIndex".to_string(), self.start_index.to_string())];
        if self.count != 0 {
            query.push(("count".to_string(), self.count.to_string()));
        }
        if !self.query.is_empty() {
            query.push(("query".to_string(), self.query.clone()));
        }
        query
    }
}
