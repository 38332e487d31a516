//! Integer parsing for free-form console input.

use anyhow::{Context, Result};
use std::io::BufRead;
use tracing::debug;

/// Parses every whitespace-separated token of `line` as an integer.
///
/// Tokens that are not valid integers are dropped, including values that do
/// not fit in an `i64`.
pub fn parse_integers(line: &str) -> Vec<i64> {
    line.split_whitespace()
        .filter_map(|token| match token.parse::<i64>() {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(token, error = %e, "Skipping invalid integer");
                None
            }
        })
        .collect()
}

/// Reads a single line from `reader` and parses it with [`parse_integers`].
///
/// End of input yields an empty list. A Ctrl-C while blocked here is not
/// seen by this function; the binary installs a handler that prints the
/// no-data notice instead.
///
/// # Errors
///
/// Returns an error for any other I/O failure, such as input that is not
/// valid UTF-8.
#[tracing::instrument(skip(reader))]
pub fn read_integers<R: BufRead>(mut reader: R) -> Result<Vec<i64>> {
    let mut line = String::new();

    match reader.read_line(&mut line) {
        Ok(0) => {
            debug!("End of input before any data");
            Ok(Vec::new())
        }
        Ok(bytes) => {
            let values = parse_integers(&line);
            debug!(bytes, parsed = values.len(), "Input line read");
            Ok(values)
        }
        Err(e) => Err(e).context("failed to read from standard input"),
    }
}
