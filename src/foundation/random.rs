/// Source of uniformly distributed floats in `[0, 1)`.
///
/// Every generator from `rand` implements this, so tests can pass a seeded
/// [`rand_pcg::Pcg32`] or a [`SequenceRandom`] with hand-picked values.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        rand::Rng::random::<f64>(self)
    }
}

/// Deterministic source that replays a fixed sequence, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Create a source replaying `values`.
    ///
    /// Values are clamped into `[0, 1)`; an empty sequence always yields `0.0`.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values
            .into()
            .into_iter()
            .map(|v| if v.is_finite() { v.clamp(0.0, MAX_BELOW_ONE) } else { 0.0 })
            .collect();
        Self { values, cursor: 0 }
    }

    /// Number of values handed out so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

const MAX_BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

impl RandomSource for SequenceRandom {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
