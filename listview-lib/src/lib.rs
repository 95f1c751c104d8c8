//! Remote list view client library
//!
//! Drives a paginated, sortable, searchable list backed by a json-server style
//! REST endpoint. User intents are debounced, encoded into query parameters and
//! fetched; only the response to the most recently issued request is displayed.

pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod query;
pub mod source;
pub mod state;
pub mod view;

mod client;
mod page;

#[cfg(test)]
mod test_utils;

pub use client::*;
pub use config::ListConfig;
pub use page::FetchResult;
pub use view::DisplaySnapshot;
pub use view::ListView;
pub use view::ListViewHandle;
