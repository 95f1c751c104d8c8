//! User-controlled list query state.

use crate::model::Column;
use crate::model::find_column;
use crate::query::SortSpec;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Zero-based page index and page size.
///
/// The page size is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Pagination {
    /// Creates a pagination state. A page size of 0 is raised to 1.
    pub fn new(page_index: usize, page_size: usize) -> Self {
        Self {
            page_index,
            page_size: page_size.max(1),
        }
    }

    /// Returns the zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages needed for `total_count` records.
    pub fn page_count(&self, total_count: usize) -> usize {
        total_count.div_ceil(self.page_size)
    }

    /// Returns the index of the first row on this page.
    pub fn offset(&self) -> usize {
        self.page_index.saturating_mul(self.page_size)
    }

    /// Changes the page size, keeping the current top row on screen.
    fn resized(self, page_size: usize) -> Self {
        let page_size = page_size.max(1);
        Self {
            page_index: self.offset() / page_size,
            page_size,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_SIZE)
    }
}

/// A user action that may change the [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the free-text search.
    Search(String),
    /// Replace the substring filter.
    Filter(String),
    /// Jump to a zero-based page.
    Page(usize),
    /// Jump to the first page.
    FirstPage,
    /// Go back one page.
    PreviousPage,
    /// Go forward one page.
    NextPage,
    /// Jump to the last known page.
    LastPage,
    /// Change the page size.
    PageSize(usize),
    /// Toggle sorting on a column header.
    ToggleSort {
        /// Column to toggle.
        column_id: String,
        /// Keep other sorted columns instead of replacing them.
        multi: bool,
    },
    /// Replace the sort specification.
    Sort(SortSpec),
}

/// What [`ViewState::compute_next`] needs to know beyond the state itself.
#[derive(Debug, Clone, Copy)]
pub struct Bounds<'a> {
    /// Total record count of the last applied result, if any.
    pub total_count: Option<usize>,
    /// Columns the sort controls know about.
    pub columns: &'a [Column],
}

/// The user-controlled input to a list query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pagination: Pagination,
    search_text: String,
    filter_text: String,
    sort: SortSpec,
}

impl ViewState {
    /// Creates the mount-time state with the given page size.
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(0, page_size),
            ..Default::default()
        }
    }

    /// Sets the pagination.
    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Sets the search text.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    /// Sets the filter text.
    pub fn with_filter(mut self, text: impl Into<String>) -> Self {
        self.filter_text = text.into();
        self
    }

    /// Sets the sort specification.
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = sort;
        self
    }

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Computes the state that results from applying `intent` to this state.
    ///
    /// This is the only way the controller changes its view state, so every
    /// update is derived from the latest value. Once a total count is known,
    /// page jumps are clamped to `[0, page_count - 1]`, with the page count
    /// taken at the current page size. Sort toggles on
    /// unknown or unsortable columns leave the state unchanged.
    pub fn compute_next(&self, intent: &Intent, bounds: Bounds<'_>) -> ViewState {
        let mut next = self.clone();
        let current = self.pagination;
        let page_count = bounds.total_count.map(|total| current.page_count(total));

        match intent {
            Intent::Search(text) => next.search_text = text.clone(),
            Intent::Filter(text) => next.filter_text = text.clone(),
            Intent::Page(index) => {
                next.pagination.page_index = clamp_page(*index, page_count);
            }
            Intent::FirstPage => next.pagination.page_index = 0,
            Intent::PreviousPage => {
                next.pagination.page_index = current.page_index.saturating_sub(1);
            }
            Intent::NextPage => {
                next.pagination.page_index =
                    clamp_page(current.page_index.saturating_add(1), page_count);
            }
            Intent::LastPage => {
                if let Some(count) = page_count {
                    next.pagination.page_index = count.saturating_sub(1);
                }
            }
            Intent::PageSize(size) => next.pagination = current.resized(*size),
            Intent::ToggleSort { column_id, multi } => {
                match find_column(bounds.columns, column_id) {
                    Some(column) if column.sortable => {
                        next.sort = self.sort.toggled(column, *multi);
                    }
                    _ => log::debug!("Ignoring sort toggle on column '{}'", column_id),
                }
            }
            Intent::Sort(sort) => next.sort = sort.clone(),
        }

        next
    }
}

fn clamp_page(index: usize, page_count: Option<usize>) -> usize {
    match page_count {
        Some(count) => index.min(count.saturating_sub(1)),
        None => index,
    }
}
