//! Typed models

mod context;
mod value;

pub use context::*;
pub use value::*;
