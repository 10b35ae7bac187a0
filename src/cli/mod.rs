//! Command-line interface
//!
//! Menu loop and text rendering. Everything here sits outside the pure
//! calculation core.

pub mod menu;
pub mod render;

pub use menu::{App, Session};
