use alloc::collections::BTreeSet;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::*;

/// Source of uniformly distributed cell indices.
pub trait RandomSource {
    /// Draws an index in `0..bound`, `bound` is never zero.
    fn next_below(&mut self, bound: CellCount) -> CellIndex;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_below(&mut self, bound: CellCount) -> CellIndex {
        (**self).next_below(bound)
    }
}

/// Deterministic source backed by a seeded [`SmallRng`].
#[derive(Clone, Debug)]
pub struct SeededSource {
    rng: SmallRng,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededSource {
    fn next_below(&mut self, bound: CellCount) -> CellIndex {
        self.rng.random_range(0..bound)
    }
}

/// Picks `count` distinct indices in `0..range_max`, returned in ascending order.
pub fn sample_bomb_positions<R: RandomSource + ?Sized>(
    count: CellCount,
    range_max: CellCount,
    source: &mut R,
) -> Result<BTreeSet<CellIndex>> {
    if range_max < 1 {
        return Err(InvalidParameter::RangeBelowOne.into());
    }
    if count > range_max {
        return Err(InvalidParameter::CountExceedsRange {
            count,
            range: range_max,
        }
        .into());
    }
    Ok(sample_unchecked(count, range_max, source))
}

/// Rejection sampling, a count above `range_max` is clamped to a full board.
pub(crate) fn sample_unchecked<R: RandomSource + ?Sized>(
    count: CellCount,
    range_max: CellCount,
    source: &mut R,
) -> BTreeSet<CellIndex> {
    if count == 0 || range_max == 0 {
        return BTreeSet::new();
    }
    if count >= range_max {
        if count > range_max {
            log::warn!(
                "Board already full, requested {} bombs but only {} fit",
                count,
                range_max
            );
        }
        return (0..range_max).collect();
    }

    let target = usize::from(count);
    let mut positions = BTreeSet::new();
    let mut draws: u32 = 0;
    while positions.len() < target {
        let draw = source.next_below(range_max);
        draws = draws.saturating_add(1);
        if draw >= range_max {
            log::warn!("Random source drew {} outside of 0..{}, discarded", draw, range_max);
            continue;
        }
        positions.insert(draw);
    }
    log::trace!(
        "Sampled {} of {} positions in {} draws",
        count,
        range_max,
        draws
    );
    positions
}
