//! View and display state owned by the fetch controller.

mod display;
mod view_state;

pub use display::*;
pub use view_state::*;
