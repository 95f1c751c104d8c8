//! List view configuration.

use std::time::Duration;

use crate::controller::DEFAULT_DEBOUNCE;
use crate::model::Column;
use crate::model::default_columns;
use crate::query::DEFAULT_FILTER_FIELD;
use crate::query::QueryEncoder;
use crate::state::DEFAULT_PAGE_SIZE;
use crate::state::ViewState;

/// Configuration for a [`ListView`](crate::ListView).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use listview_lib::ListConfig;
/// use listview_lib::model::Column;
///
/// // Default configuration: 250ms debounce, 10 rows per page, `title_like`
/// let config = ListConfig::default();
///
/// // Custom configuration
/// let custom = ListConfig::default()
///     .debounce(Duration::from_millis(400))
///     .page_size(25)
///     .filter_field("body")
///     .columns(vec![Column::new("id", "ID").desc_first()]);
/// ```
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// How long input must be stable before a fetch is issued.
    pub debounce: Duration,
    /// Page size at mount.
    pub page_size: usize,
    /// Field the substring filter applies to (`<field>_like`).
    pub filter_field: String,
    /// Columns known to the sort controls.
    pub columns: Vec<Column>,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            page_size: DEFAULT_PAGE_SIZE,
            filter_field: DEFAULT_FILTER_FIELD.to_string(),
            columns: default_columns(),
        }
    }
}

impl ListConfig {
    /// Sets the debounce interval.
    pub fn debounce(mut self, interval: Duration) -> Self {
        self.debounce = interval;
        self
    }

    /// Sets the page size at mount.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Sets the field the substring filter applies to.
    pub fn filter_field(mut self, field: impl Into<String>) -> Self {
        self.filter_field = field.into();
        self
    }

    /// Sets the columns known to the sort controls.
    pub fn columns(mut self, columns: Vec<Column>) -> Self {
        self.columns = columns;
        self
    }

    /// Returns the query encoder for this configuration.
    pub fn encoder(&self) -> QueryEncoder {
        QueryEncoder::new(&self.filter_field)
    }

    /// Returns the view state at mount.
    pub fn initial_state(&self) -> ViewState {
        ViewState::new(self.page_size)
    }
}
