//! Browser Command Wrappers
//!
//! Thin bindings to browser APIs, organized by concern. Core logic stays in
//! `gild-board-core`; these plug into its ports.

mod canvas;
mod files;
mod images;
mod storage;

pub use canvas::*;
pub use files::*;
pub use images::*;
pub use storage::*;
