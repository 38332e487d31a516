//! Mean, median and mode for a list of integers typed on the console.

pub mod output;
pub mod parser;
pub mod stats;
