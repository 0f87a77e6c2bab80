use rand::{Rng, SeedableRng, rngs::StdRng};

/// The random source consumed by layout generation.
///
/// Generation only ever needs bounded integers and a pick from an explicitly
/// ordered candidate list, so any seedable generator can drive it. Candidate
/// lists must be built in a fixed order for a seed to reproduce a layout.
pub trait RandomSource {
    /// Uniform integer in `[lo, hi)`. An empty range yields `lo`.
    fn int_range(&mut self, lo: isize, hi: isize) -> isize;

    /// Uniform choice from `candidates`, or `None` if there are none.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T> {
        if candidates.is_empty() {
            return None;
        }
        let len = isize::try_from(candidates.len()).unwrap_or(isize::MAX);
        let index = self.int_range(0, len);
        candidates.get(index as usize)
    }

    /// Uniform count in `[lo, hi]`. Bounds past `isize::MAX` are clamped to it.
    fn count_between(&mut self, lo: usize, hi: usize) -> usize {
        let lo = isize::try_from(lo).unwrap_or(isize::MAX);
        let hi = isize::try_from(hi).unwrap_or(isize::MAX).saturating_add(1);
        self.int_range(lo, hi) as usize
    }
}

impl<R: Rng> RandomSource for R {
    fn int_range(&mut self, lo: isize, hi: isize) -> isize {
        if hi <= lo {
            return lo;
        }
        // `isize` has no uniform sampler; every in-range value fits in `i64`.
        self.random_range(lo as i64..hi as i64) as isize
    }
}

/// Creates the deterministic generator used for reproducible layouts.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
