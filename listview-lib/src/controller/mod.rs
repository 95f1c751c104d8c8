//! Debounced fetch controller.
//!
//! [`FetchController`] is a synchronous state machine. It is driven by an
//! owner that feeds it intents, polls its [`DebounceTimer`], performs the
//! [`FetchRequest`]s it issues and reports their outcomes back by sequence tag.

mod machine;
mod request;
mod timer;

pub use machine::FetchController;
pub use machine::Phase;
pub use request::FetchRequest;
pub use timer::DebounceTimer;
pub use timer::DEFAULT_DEBOUNCE;
