//! Output formatting for CIDR results.
//!
//! This module handles formatting results for the terminal:
//! - [`report`] - divide and explain reports
//! - [`terminal`] - number formatting and colours

mod report;
mod terminal;

pub use report::{render_capacity, render_explain, render_partitions, MAX_LISTED_NETWORKS};
pub use terminal::{format_number, Painter};
