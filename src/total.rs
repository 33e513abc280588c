//! Summation over a sequence.

use crate::error::{Error, Result};

/// Sum the values into a wider accumulator.
///
/// Elements are at most 50 and sequences at most 19 long, so an `i64`
/// total cannot overflow. Pure: permuting the input does not change the
/// result.
pub fn calc_total(values: &[i32]) -> Result<i64> {
    if values.is_empty() {
        return Err(Error::EmptyInput {
            operation: "calc_total",
        });
    }
    Ok(values.iter().map(|&v| i64::from(v)).sum())
}
