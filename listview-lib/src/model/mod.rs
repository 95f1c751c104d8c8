//! Typed models

mod column;
mod row;

pub use column::*;
pub use row::*;
