//! Tagged fetch request.

use crate::query::QueryParams;
use crate::state::ViewState;

/// A fetch issued by the controller.
///
/// Carries the sequence tag used to discard superseded responses, the view
/// state snapshot it was built from, and the encoded query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    seq: u64,
    state: ViewState,
    params: QueryParams,
}

impl FetchRequest {
    /// Creates a request. Controllers assign increasing tags; one-off fetches may use any.
    pub fn new(seq: u64, state: ViewState, params: QueryParams) -> Self {
        Self { seq, state, params }
    }

    /// Returns the sequence tag. Later requests have larger tags.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    /// Returns the view state this request was built from.
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Returns the encoded query parameters.
    pub fn params(&self) -> &QueryParams {
        &self.params
    }
}
