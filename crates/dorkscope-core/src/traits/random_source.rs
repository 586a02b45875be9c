//! Source of the random volume estimate.

/// Supplies integers for the simulated fallback result count.
///
/// Production code draws from the thread RNG; tests pin a value so the
/// fallback count is reproducible.
pub trait RandomSource {
    /// An integer in `low..high` (upper bound exclusive).
    fn next_in_range(&mut self, low: u64, high: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        (**self).next_in_range(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_in_range(&mut self, low: u64, high: u64) -> u64 {
        (**self).next_in_range(low, high)
    }
}
