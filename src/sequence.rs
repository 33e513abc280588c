//! The sequence of random values and its bounds-checked builder.

use crate::error::{Error, Result};
use rand::{Rng, RngExt};

/// Largest sequence the builder will produce.
pub const MAX_LENGTH: usize = 19;

/// Largest value an element can take; elements are drawn from `1..=MAX_VALUE`.
pub const MAX_VALUE: i32 = 50;

/// An owned, ordered run of random values.
///
/// Length and element bounds are enforced at construction, so holding a
/// `Sequence` means both invariants hold. Storage is released when the
/// value is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence(Vec<i32>);

impl Sequence {
    /// Build a sequence of `len` values drawn uniformly from `1..=MAX_VALUE`.
    ///
    /// The random source is injected so runs can be made deterministic in
    /// tests; production seeds one generator at process start.
    pub fn build(rng: &mut impl Rng, len: usize) -> Result<Self> {
        if len == 0 || len > MAX_LENGTH {
            return Err(Error::InvalidLength { requested: len });
        }

        let mut values = Vec::new();
        values
            .try_reserve_exact(len)
            .map_err(|_| Error::AllocationFailure { requested: len })?;
        for _ in 0..len {
            values.push(rng.random_range(1..=MAX_VALUE));
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the elements in build order.
    pub fn values(&self) -> &[i32] {
        &self.0
    }
}
