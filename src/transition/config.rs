use crate::brella::envelope::Envelope;
use crate::color::range::{ChannelRange, Palette};
use crate::foundation::error::{BrellaError, BrellaResult};

/// How many extra placement attempts a spawn may take before accepting an overlap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryBudget {
    /// At most this many resamples after the first attempt.
    Limited(u64),
    /// Resample until a free spot is found.
    Unlimited,
}

impl RetryBudget {
    /// Map a signed count to a budget; negative means unlimited.
    pub fn from_signed(n: i64) -> Self {
        u64::try_from(n).map_or(Self::Unlimited, Self::Limited)
    }

    /// Consume one retry; `false` once the budget is exhausted.
    pub(crate) fn take(&mut self) -> bool {
        match self {
            Self::Unlimited => true,
            Self::Limited(0) => false,
            Self::Limited(n) => {
                *n -= 1;
                true
            }
        }
    }
}

/// Fully specified transition options.
///
/// Ranges are normalized by [`Transition`](crate::Transition) construction, not here.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransitionConfig {
    /// Maximum number of brellas spawned over the whole run.
    pub brella_max: usize,
    /// Rib (side) counts a spawn picks from uniformly; each must be >= 3.
    pub ribs: Vec<u32>,
    /// Placement retry budget.
    pub retries: RetryBudget,
    /// Opening/closing length in frames.
    pub attack: u32,
    /// Fully-open length in frames.
    pub hold: u32,
    /// Rotation added every rendered frame, in radians.
    pub rotate: f64,
    /// Hue range in degrees.
    pub hue: ChannelRange,
    /// Saturation range in percent.
    pub saturation: ChannelRange,
    /// Lightness range in percent.
    pub lightness: ChannelRange,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        let palette = Palette::default();
        Self {
            brella_max: 30,
            ribs: vec![6, 8],
            retries: RetryBudget::Limited(1_000_000),
            attack: 15,
            hold: 30,
            rotate: 0.01,
            hue: palette.hue,
            saturation: palette.saturation,
            lightness: palette.lightness,
        }
    }
}

impl TransitionConfig {
    /// Reject configurations the engine cannot run.
    pub fn validate(&self) -> BrellaResult<()> {
        if self.ribs.is_empty() {
            return Err(BrellaError::validation("ribs must list at least one count"));
        }
        if let Some(bad) = self.ribs.iter().find(|&&r| r < 3) {
            return Err(BrellaError::validation(format!(
                "ribs must be numbers >= 3, got {bad}"
            )));
        }
        if self.attack == 0 && self.hold == 0 {
            return Err(BrellaError::validation(
                "one of attack or hold must be positive",
            ));
        }
        if !self.rotate.is_finite() {
            return Err(BrellaError::validation("rotate must be a finite number"));
        }
        for (name, r) in [
            ("hue", self.hue),
            ("saturation", self.saturation),
            ("lightness", self.lightness),
        ] {
            if !r.is_finite() {
                return Err(BrellaError::validation(format!(
                    "{name} range must be finite numbers"
                )));
            }
        }
        Ok(())
    }

    /// Colour ranges as a [`Palette`] (not normalized).
    pub fn palette(&self) -> Palette {
        Palette {
            hue: self.hue,
            saturation: self.saturation,
            lightness: self.lightness,
        }
    }

    /// Copy with every colour range normalized.
    pub fn normalized(&self) -> Self {
        let palette = self.palette().normalized();
        Self {
            hue: palette.hue,
            saturation: palette.saturation,
            lightness: palette.lightness,
            ..self.clone()
        }
    }

    /// Timing envelope shared by every brella.
    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.attack, self.hold)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/config.rs"]
mod tests;
