//! GIF2SHEET - GIF animation to PNG spritesheet converter
//!
//! Re-exports all modules for use by the binary target.

pub mod batch;
pub mod cli;
pub mod convert;
pub mod direction;
pub mod utils;

// Re-export commonly used types
pub use batch::{convert_all, BatchSummary, Layout};
pub use convert::{SheetError, SheetInfo};
pub use direction::{AnimKind, Direction};
