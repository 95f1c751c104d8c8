//! Query encoding for json-server style list endpoints.
//!
//! # Shared Types
//!
//! - [`SortSpec`] - Ordered sort keys forwarded verbatim to the server
//! - [`QueryParams`] - Ordered query parameters of one list request
//!
//! # Encoding
//!
//! - [`QueryEncoder`] - Maps a [`ViewState`](crate::state::ViewState) to
//!   `_limit`, `_page`, `q`, `<field>_like`, `_sort` and `_order`

mod encode;
mod sort;

pub use encode::*;
pub use sort::*;
