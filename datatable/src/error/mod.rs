//! Error types

mod cell;
mod config;
mod format;

pub use cell::*;
pub use config::*;
pub use format::*;
