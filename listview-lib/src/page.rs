//! Result type of a single list fetch.

use crate::model::Row;

/// One page of rows together with the server-side total.
///
/// # Example
///
/// ```
/// use listview_lib::FetchResult;
/// use listview_lib::model::Row;
///
/// let result = FetchResult::new(vec![Row::new(1), Row::new(2)], 95);
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result.page_count(10), 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FetchResult {
    rows: Vec<Row>,
    /// Total matching records, from the `x-total-count` header.
    total_count: usize,
}

impl FetchResult {
    /// Creates a new result.
    pub fn new(rows: Vec<Row>, total_count: usize) -> Self {
        Self { rows, total_count }
    }

    /// Returns a reference to the rows in this page.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Consumes the result and returns the rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    /// Returns the total number of records matching the query.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the number of pages of `page_size` needed to show every record.
    pub fn page_count(&self, page_size: usize) -> usize {
        self.total_count.div_ceil(page_size.max(1))
    }

    /// Returns `true` if this page has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of rows in this page.
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}
