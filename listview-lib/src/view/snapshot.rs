//! Snapshot of a list view for rendering.

use std::sync::Arc;

use crate::controller::FetchController;
use crate::controller::Phase;
use crate::error::Error;
use crate::model::Row;
use crate::query::SortSpec;
use crate::state::DisplayState;
use crate::state::PageRange;
use crate::state::Pagination;
use crate::state::ViewState;

/// Everything the rendering layer needs to draw the list.
#[derive(Debug, Clone)]
pub struct DisplaySnapshot {
    view: ViewState,
    display: DisplayState,
    phase: Phase,
    latest_request: Option<u64>,
}

impl DisplaySnapshot {
    pub(crate) fn capture(controller: &FetchController) -> Self {
        Self {
            view: controller.view().clone(),
            display: controller.display().clone(),
            phase: controller.phase(),
            latest_request: controller.latest_issued(),
        }
    }

    /// Returns the view state at the time of the snapshot.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the display state at the time of the snapshot.
    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    /// Returns the controller phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the tag of the most recently issued request.
    pub fn latest_request(&self) -> Option<u64> {
        self.latest_request
    }

    pub fn rows(&self) -> &[Row] {
        self.display.rows()
    }

    pub fn loading(&self) -> bool {
        self.display.loading()
    }

    pub fn page_count(&self) -> usize {
        self.display.page_count()
    }

    pub fn total_count(&self) -> usize {
        self.display.total_count()
    }

    pub fn error(&self) -> Option<&Arc<Error>> {
        self.display.error()
    }

    pub fn search_text(&self) -> &str {
        self.view.search_text()
    }

    pub fn filter_text(&self) -> &str {
        self.view.filter_text()
    }

    pub fn pagination(&self) -> Pagination {
        self.view.pagination()
    }

    pub fn sort(&self) -> &SortSpec {
        self.view.sort()
    }

    /// Returns the one-based row range of the current page.
    pub fn range(&self) -> Option<PageRange> {
        PageRange::new(self.view.pagination(), self.display.total_count())
    }

    /// Returns `true` unless the first page is shown.
    pub fn can_previous_page(&self) -> bool {
        self.view.pagination().page_index() > 0
    }

    /// Returns `true` if a page after the current one is known to exist.
    pub fn can_next_page(&self) -> bool {
        self.view.pagination().page_index().saturating_add(1) < self.display.page_count()
    }

    /// Returns `true` once the latest request has been answered and no new
    /// fetch is scheduled.
    pub fn is_settled(&self) -> bool {
        self.phase == Phase::Settled
    }
}
