//! Console formatting for computed statistics.

use anyhow::Result;
use std::io::Write;

use crate::stats::{Dataset, Summary};

pub const BANNER: &str = "=== Statistics Calculator ===";
pub const PROMPT: &str = "Enter a list of integers separated by spaces: ";
pub const NO_MODE: &str = "No mode (all values occur equally)";
pub const NO_DATA: &str = "No valid integers entered.";

/// Formats a value with two decimal places.
pub fn format_float(value: f64) -> String {
    format!("{:.2}", value)
}

/// Formats integers as `[a, b, c]`.
pub fn format_list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(i64::to_string).collect();
    format!("[{}]", items.join(", "))
}

/// Writes the program heading followed by a blank line.
pub fn write_banner<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w, "{}", BANNER)?;
    writeln!(w)?;
    Ok(())
}

/// Writes the input prompt without a trailing newline and flushes.
pub fn write_prompt<W: Write>(w: &mut W) -> Result<()> {
    write!(w, "{}", PROMPT)?;
    w.flush()?;
    Ok(())
}

pub fn write_no_data<W: Write>(w: &mut W) -> Result<()> {
    writeln!(w, "{}", NO_DATA)?;
    w.flush()?;
    Ok(())
}

/// Writes the parsed input followed by mean, median and mode.
pub fn write_report<W: Write>(w: &mut W, data: &Dataset, summary: &Summary) -> Result<()> {
    writeln!(w, "Input data: {}", format_list(data.values()))?;
    writeln!(w)?;
    writeln!(w, "Mean: {}", format_float(summary.mean))?;
    writeln!(w, "Median: {}", format_float(summary.median))?;
    if summary.has_mode() {
        writeln!(w, "Mode: {}", format_list(&summary.modes))?;
    } else {
        writeln!(w, "Mode: {}", NO_MODE)?;
    }
    Ok(())
}
