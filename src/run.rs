//! One full run: draw a length, build, sum, print.

use crate::error::Result;
use crate::printer;
use crate::sequence::{MAX_LENGTH, Sequence};
use crate::total;
use rand::{Rng, RngExt};
use std::io::Write;
use tracing::debug;

/// Execute one run against the given random source and output sink.
///
/// Every failure is terminal; the first error propagates unchanged so the
/// caller can map it to an exit code. The sequence is dropped when this
/// function returns, on success and failure alike.
pub fn run(rng: &mut impl Rng, out: &mut impl Write) -> Result<()> {
    let len = rng.random_range(1..=MAX_LENGTH);
    debug!("drew sequence length {len}");
    writeln!(out, "\nLength of list = {len}")?;
    writeln!(out)?;

    let sequence = Sequence::build(rng, len)?;
    let total = total::calc_total(sequence.values())?;

    printer::print_list(sequence.values(), out)?;
    writeln!(out, "\nTotal = {total}")?;
    writeln!(out)?;
    debug!("run complete, {len} values totaling {total}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_run_output_is_internally_consistent() {
        let mut rng = StdRng::seed_from_u64(2016);
        let mut out = Vec::new();
        run(&mut rng, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        let len: usize = output
            .lines()
            .find_map(|l| l.strip_prefix("Length of list = "))
            .unwrap()
            .parse()
            .unwrap();
        assert!((1..=MAX_LENGTH).contains(&len));

        let values: Vec<i64> = output
            .lines()
            .filter(|l| l.starts_with("Number"))
            .map(|l| l.split('=').next_back().unwrap().trim().parse().unwrap())
            .collect();
        assert_eq!(values.len(), len);

        let total: i64 = output
            .lines()
            .find_map(|l| l.strip_prefix("Total = "))
            .unwrap()
            .parse()
            .unwrap();
        assert_eq!(total, values.iter().sum::<i64>());
    }

    #[test]
    fn test_run_is_deterministic_for_a_fixed_seed() {
        let mut first = Vec::new();
        run(&mut StdRng::seed_from_u64(9), &mut first).unwrap();
        let mut second = Vec::new();
        run(&mut StdRng::seed_from_u64(9), &mut second).unwrap();
        assert_eq!(first, second);
    }
}
