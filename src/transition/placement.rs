use crate::brella::entity::Brella;
use crate::foundation::core::Vector2;
use crate::foundation::random::RandomSource;
use crate::transition::config::RetryBudget;

/// Fraction of an existing brella's size inside which a new centre counts as overlapping.
pub(crate) const OVERLAP_FACTOR: f64 = 0.47;

/// Spawn sizes are drawn from this fraction range of the surface height.
pub(crate) const SIZE_MIN: f64 = 0.4;
pub(crate) const SIZE_MAX: f64 = 0.6;

/// Outcome of rejection-sampled placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Placement {
    pub(crate) position: Vector2,
    /// Resamples taken after the first candidate.
    pub(crate) retries: u64,
    /// `true` when the budget ran out and the last candidate still overlaps.
    pub(crate) overlapping: bool,
}

/// `true` when `candidate` lies within `0.47 * size` of any existing brella centre.
pub(crate) fn overlaps(existing: &[Brella], candidate: Vector2) -> bool {
    existing.iter().any(|b| {
        let limit = b.size() * OVERLAP_FACTOR;
        b.position().add(candidate.invert()).magnitude_squared() < limit * limit
    })
}

/// Sample positions uniformly inside `width x height` until one is clear of `existing` or the
/// budget is spent; the last candidate is accepted either way.
pub(crate) fn place<R: RandomSource + ?Sized>(
    existing: &[Brella],
    width: f64,
    height: f64,
    mut budget: RetryBudget,
    rng: &mut R,
) -> Placement {
    let mut retries = 0u64;
    loop {
        let x = width * rng.next_f64();
        let y = height * rng.next_f64();
        let candidate = Vector2::new(x, y);
        if !overlaps(existing, candidate) {
            return Placement {
                position: candidate,
                retries,
                overlapping: false,
            };
        }
        if !budget.take() {
            return Placement {
                position: candidate,
                retries,
                overlapping: true,
            };
        }
        retries += 1;
    }
}

/// Size drawn uniformly from `[0.4, 0.6) * height`.
pub(crate) fn sample_size<R: RandomSource + ?Sized>(height: f64, rng: &mut R) -> f64 {
    let lo = height * SIZE_MIN;
    let hi = height * SIZE_MAX;
    rng.next_f64() * (hi - lo) + lo
}

/// Side count drawn uniformly from `choices` (non-empty after validation).
pub(crate) fn sample_sides<R: RandomSource + ?Sized>(choices: &[u32], rng: &mut R) -> u32 {
    let n = choices.len();
    let i = ((rng.next_f64() * n as f64).floor() as usize).min(n.saturating_sub(1));
    choices.get(i).copied().unwrap_or(3)
}

#[cfg(test)]
#[path = "../../tests/unit/transition/placement.rs"]
mod tests;
