//! List view runtime.
//!
//! A [`ListView`] is a tokio task that owns a
//! [`FetchController`](crate::controller::FetchController). The rendering layer
//! talks to it through a [`ListViewHandle`]: intents go in over a channel,
//! [`DisplaySnapshot`]s come out over a `watch` channel.

mod actor;
mod handle;
mod snapshot;

pub use actor::ListView;
pub use handle::ListViewHandle;
pub use snapshot::DisplaySnapshot;
