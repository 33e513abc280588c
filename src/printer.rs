//! Ordinal-labeled rendering of a sequence.

use crate::error::{Error, Result};
use std::io::Write;

/// Write one `Number NN = VV` line per value, in encounter order.
///
/// Ordinals are 1-based; both fields are padded to width 2 to line up
/// for the value ranges in play. The writer is injected so tests can
/// capture output; the binary passes a stdout lock.
pub fn print_list(values: &[i32], out: &mut impl Write) -> Result<()> {
    if values.is_empty() {
        return Err(Error::EmptyInput {
            operation: "print_list",
        });
    }
    for (i, value) in values.iter().enumerate() {
        writeln!(out, "Number {:2} = {:2}", i + 1, value)?;
    }
    Ok(())
}
