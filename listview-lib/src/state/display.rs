//! Data currently shown by the list.

use std::sync::Arc;

use chrono::DateTime;
use chrono::Utc;

use crate::error::Error;
use crate::model::Row;
use crate::page::FetchResult;
use crate::state::Pagination;

/// Rows, counts and status of the most recently applied fetch.
///
/// A result replaces the previous one wholesale. A failed fetch keeps the
/// previous rows and counts and records the error instead.
#[derive(Debug, Clone, Default)]
pub struct DisplayState {
    rows: Vec<Row>,
    total_count: usize,
    page_count: usize,
    loading: bool,
    error: Option<Arc<Error>>,
    fetched_at: Option<DateTime<Utc>>,
}

impl DisplayState {
    /// Returns the displayed rows.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Returns the total number of matching records on the server.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns `ceil(total_count / page_size)` of the last applied result.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Returns the total count once a result has been applied.
    pub fn known_total_count(&self) -> Option<usize> {
        self.fetched_at.map(|_| self.total_count)
    }

    /// Returns `true` while the latest request is outstanding.
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Returns the error of the latest request, if it failed.
    pub fn error(&self) -> Option<&Arc<Error>> {
        self.error.as_ref()
    }

    /// Returns when the displayed rows were received.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub(crate) fn apply_result(&mut self, result: FetchResult, pagination: Pagination) {
        self.page_count = result.page_count(pagination.page_size());
        self.total_count = result.total_count();
        self.rows = result.into_rows();
        self.loading = false;
        self.error = None;
        self.fetched_at = Some(Utc::now());
    }

    pub(crate) fn apply_failure(&mut self, error: Error) {
        self.loading = false;
        self.error = Some(Arc::new(error));
    }
}

/// One-based range of rows shown on the current page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    /// Position of the first row on the page.
    pub first: usize,
    /// Position of the last row on the page.
    pub last: usize,
    /// Total number of matching rows.
    pub total: usize,
}

impl PageRange {
    /// Computes the range for a page, or `None` if the page is past the end.
    pub fn new(pagination: Pagination, total: usize) -> Option<Self> {
        let offset = pagination.offset();
        if offset >= total {
            return None;
        }
        Some(Self {
            first: offset + 1,
            last: offset.saturating_add(pagination.page_size()).min(total),
            total,
        })
    }
}

impl std::fmt::Display for PageRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Showing {} to {} of {} entries", self.first, self.last, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::test_utils::posts;

    #[test]
    fn test_page_count_rounds_up() {
        let mut display = DisplayState::default();
        display.begin_loading();
        display.apply_result(FetchResult::new(posts(1..=10), 95), Pagination::new(0, 10));

        assert_eq!(display.page_count(), 10);
        assert_eq!(display.total_count(), 95);
        assert_eq!(display.rows().len(), 10);
        assert!(!display.loading());
        assert!(display.fetched_at().is_some());
    }

    #[test]
    fn test_failure_keeps_rows() {
        let mut display = DisplayState::default();
        display.apply_result(FetchResult::new(posts(1..=10), 95), Pagination::new(0, 10));

        display.begin_loading();
        display.apply_failure(ApiError::http(500, "boom").into());

        assert!(!display.loading());
        assert_eq!(display.rows().len(), 10);
        assert_eq!(display.page_count(), 10);
        assert_eq!(display.error().and_then(|e| e.status_code()), Some(500));

        display.apply_result(FetchResult::new(posts(11..=20), 95), Pagination::new(1, 10));
        assert!(display.error().is_none());
    }

    #[test]
    fn test_known_total_count_before_first_result() {
        let display = DisplayState::default();
        assert_eq!(display.page_count(), 0);
        assert_eq!(display.known_total_count(), None);
    }

    #[test]
    fn test_page_range() {
        let range = PageRange::new(Pagination::new(9, 10), 95).unwrap();
        assert_eq!((range.first, range.last, range.total), (91, 95, 95));
        assert_eq!(range.to_string(), "Showing 91 to 95 of 95 entries");

        assert_eq!(PageRange::new(Pagination::new(0, 10), 0), None);
        assert_eq!(PageRange::new(Pagination::new(10, 10), 95), None);
    }
}
