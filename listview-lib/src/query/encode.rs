//! Query string generation.

use url::Url;
use url::form_urlencoded;

use crate::query::SortSpec;
use crate::state::ViewState;

/// Page size parameter.
pub const LIMIT_PARAM: &str = "_limit";
/// One-based page number parameter.
pub const PAGE_PARAM: &str = "_page";
/// Full-text search parameter.
pub const SEARCH_PARAM: &str = "q";
/// Comma-joined sort columns parameter.
pub const SORT_PARAM: &str = "_sort";
/// Comma-joined sort directions parameter.
pub const ORDER_PARAM: &str = "_order";
/// Field the substring filter applies to unless configured otherwise.
pub const DEFAULT_FILTER_FIELD: &str = "title";

/// Ordered query parameters of one list request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a parameter.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((name.into(), value.into()));
    }

    /// Returns the value of the first parameter with this name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if a parameter with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the parameters in encoding order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the parameters as a form-urlencoded query string.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter())
            .finish()
    }

    /// Appends the parameters to the query of `url`.
    pub fn apply_to(&self, url: &mut Url) {
        url.query_pairs_mut().extend_pairs(self.pairs.iter());
    }
}

/// Serializes a [`ViewState`] into list endpoint parameters.
///
/// The encoding is total and pure. Empty search and filter strings are sent as
/// empty values rather than omitted; the server treats them as no constraint.
///
/// # Example
///
/// ```
/// use listview_lib::query::QueryEncoder;
/// use listview_lib::state::ViewState;
///
/// let params = QueryEncoder::default().encode(&ViewState::default());
/// assert_eq!(params.to_query_string(), "_limit=10&_page=1&q=&title_like=");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryEncoder {
    filter_param: String,
}

impl QueryEncoder {
    /// Creates an encoder whose substring filter targets `filter_field`.
    pub fn new(filter_field: &str) -> Self {
        Self {
            filter_param: format!("{}_like", filter_field),
        }
    }

    /// Returns the name of the substring filter parameter.
    pub fn filter_param(&self) -> &str {
        &self.filter_param
    }

    /// Encodes a view state.
    pub fn encode(&self, state: &ViewState) -> QueryParams {
        let pagination = state.pagination();
        let mut params = QueryParams::new();

        params.push(LIMIT_PARAM, pagination.page_size().to_string());
        params.push(PAGE_PARAM, pagination.page_index().saturating_add(1).to_string());
        params.push(SEARCH_PARAM, state.search_text());
        params.push(self.filter_param.as_str(), state.filter_text());

        if let Some((sort, order)) = sort_to_params(state.sort()) {
            params.push(SORT_PARAM, sort);
            params.push(ORDER_PARAM, order);
        }

        params
    }
}

impl Default for QueryEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_FILTER_FIELD)
    }
}

/// Encodes a view state with the default `title_like` filter parameter.
pub fn encode(state: &ViewState) -> QueryParams {
    QueryEncoder::default().encode(state)
}

/// Converts a [`SortSpec`] to `_sort` and `_order` values.
///
/// Returns `None` for an empty sort so neither parameter is sent.
pub fn sort_to_params(sort: &SortSpec) -> Option<(String, String)> {
    if sort.is_empty() {
        return None;
    }
    let columns: Vec<_> = sort.keys().iter().map(|k| k.column_id.as_str()).collect();
    let orders: Vec<_> = sort.keys().iter().map(|k| k.direction.as_str()).collect();
    Some((columns.join(","), orders.join(",")))
}
