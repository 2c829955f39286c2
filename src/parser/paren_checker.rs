//! Parenthesis balance checking
//!
//! The parser accepts anything, so imbalance is detected here on the raw
//! text. Every parenthesis counts, including ones inside string-looking
//! atoms, because the tokenizer splits those out as well.

use crate::error::{Error, Result};

/// Counts of parentheses in a piece of source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParenStats {
    /// Number of `(` seen
    pub open_count: usize,
    /// Number of `)` seen
    pub close_count: usize,
}

impl ParenStats {
    /// Count the parentheses in `source`
    pub fn count(source: &str) -> Self {
        let mut stats = ParenStats::default();
        for ch in source.chars() {
            match ch {
                '(' => stats.open_count += 1,
                ')' => stats.close_count += 1,
                _ => {}
            }
        }
        stats
    }

    /// True when there are as many `(` as `)`
    pub fn is_balanced(&self) -> bool {
        self.open_count == self.close_count
    }
}

/// Fails on the first `)` with no matching `(`, or on the earliest `(` that
/// is never closed. Positions are 1-indexed.
pub fn check_balance(source: &str) -> Result<()> {
    // Positions of currently open parens
    let mut open: Vec<(usize, usize)> = Vec::new();

    for (line_idx, line) in source.lines().enumerate() {
        for (col_idx, ch) in line.chars().enumerate() {
            let pos = (line_idx + 1, col_idx + 1);
            match ch {
                '(' => open.push(pos),
                ')' => {
                    if open.pop().is_none() {
                        return Err(Error::SyntaxError {
                            line: pos.0,
                            col: pos.1,
                            message: "unexpected `)` with no matching `(`".to_string(),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    match open.first() {
        Some(&(line, col)) => Err(Error::SyntaxError {
            line,
            col,
            message: format!("unclosed `(` ({} missing `)`)", open.len()),
        }),
        None => Ok(()),
    }
}
