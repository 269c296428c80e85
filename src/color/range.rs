use crate::color::hsl::Hsl;
use crate::foundation::error::{BrellaError, BrellaResult};
use crate::foundation::random::RandomSource;

/// Inclusive `[lo, hi]` bounds for one colour channel.
///
/// A degenerate range (`hi <= lo`) always samples `lo`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RangeBounds")]
pub struct ChannelRange {
    /// Lower bound.
    pub lo: f64,
    /// Upper bound.
    pub hi: f64,
}

/// Serialized form; a missing `hi` fixes the range at `lo`.
#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RangeBounds {
    lo: f64,
    #[serde(default)]
    hi: Option<f64>,
}

impl From<RangeBounds> for ChannelRange {
    fn from(b: RangeBounds) -> Self {
        Self::new(b.lo, b.hi.unwrap_or(b.lo))
    }
}

impl ChannelRange {
    /// Create a range; bounds are stored as given and sorted on normalization.
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// A range that always samples `v`.
    pub const fn fixed(v: f64) -> Self {
        Self { lo: v, hi: v }
    }

    /// Build from a list of one or two bounds; a missing upper bound equals the lower one.
    pub fn from_bounds(values: &[f64]) -> BrellaResult<Self> {
        match values {
            [v] => Ok(Self::fixed(*v)),
            [lo, hi] => Ok(Self::new(*lo, *hi)),
            _ => Err(BrellaError::validation(format!(
                "a range takes one or two values, got {}",
                values.len()
            ))),
        }
    }

    /// Wrap both bounds into `[0, 360)`, keeping `360` (and `-360`, as `360`) as the full-circle
    /// sentinel, then sort.
    pub fn normalized_hue(self) -> Self {
        fn wrap(x: f64) -> f64 {
            if x.abs() == 360.0 {
                360.0
            } else {
                x.rem_euclid(360.0)
            }
        }
        Self::new(wrap(self.lo), wrap(self.hi)).sorted()
    }

    /// Clamp both bounds into `[0, 100]`, then sort.
    pub fn normalized_percent(self) -> Self {
        Self::new(self.lo.clamp(0.0, 100.0), self.hi.clamp(0.0, 100.0)).sorted()
    }

    fn sorted(self) -> Self {
        if self.hi < self.lo {
            Self::new(self.hi, self.lo)
        } else {
            self
        }
    }

    /// `true` when sampling never varies.
    pub fn is_degenerate(self) -> bool {
        self.hi <= self.lo
    }

    /// `true` when both bounds are finite numbers.
    pub fn is_finite(self) -> bool {
        self.lo.is_finite() && self.hi.is_finite()
    }

    /// Sample `lo + floor(r * (hi - lo))`; consumes no randomness when degenerate.
    pub fn sample<R: RandomSource + ?Sized>(self, rng: &mut R) -> f64 {
        if self.is_degenerate() {
            return self.lo;
        }
        self.lo + (rng.next_f64() * (self.hi - self.lo)).floor()
    }
}

/// Hue, saturation and lightness ranges that brella colours are drawn from.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    /// Hue in degrees.
    pub hue: ChannelRange,
    /// Saturation in percent.
    pub saturation: ChannelRange,
    /// Lightness in percent.
    pub lightness: ChannelRange,
}

impl Palette {
    /// Normalize every channel (hue wrap, percent clamp, ascending bounds).
    pub fn normalized(self) -> Self {
        Self {
            hue: self.hue.normalized_hue(),
            saturation: self.saturation.normalized_percent(),
            lightness: self.lightness.normalized_percent(),
        }
    }

    /// Draw hue, then saturation, then lightness.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Hsl {
        let h = self.hue.sample(rng);
        let s = self.saturation.sample(rng);
        let l = self.lightness.sample(rng);
        Hsl::new(h, s, l)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hue: ChannelRange::new(0.0, 360.0),
            saturation: ChannelRange::new(80.0, 100.0),
            lightness: ChannelRange::fixed(50.0),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/range.rs"]
mod tests;
