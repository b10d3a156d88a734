//! Share text and terminal output formatting

pub mod display;
pub mod formatters;

pub use formatters::{feedback_symbol, share_grid, share_message};
