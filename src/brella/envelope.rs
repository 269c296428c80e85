use std::f64::consts::PI;

/// Bulge coefficient used when there is no attack phase (the canopy is always fully open).
const OPEN_BULGE: f64 = 0.1 / 1.2 + 0.9;

/// Lifecycle phase of a brella at a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `0 <= f < attack`: opening.
    Growing,
    /// `attack <= f < attack + hold`: fully open.
    Holding,
    /// `attack + hold <= f < lifetime`: closing.
    Shrinking,
    /// `f >= lifetime`: nothing is drawn.
    Ended,
}

/// Frame-driven open/hold/close envelope.
///
/// Lifetime is `2 * attack + hold` frames; closing mirrors opening.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Envelope {
    /// Opening (and closing) length in frames.
    pub attack: u32,
    /// Fully-open length in frames.
    pub hold: u32,
}

impl Envelope {
    /// Create an envelope.
    pub const fn new(attack: u32, hold: u32) -> Self {
        Self { attack, hold }
    }

    /// Total frames a brella is drawn for.
    pub fn lifetime(&self) -> u64 {
        2 * u64::from(self.attack) + u64::from(self.hold)
    }

    /// Phase at `frame`.
    pub fn phase(&self, frame: u64) -> Phase {
        let a = u64::from(self.attack);
        let h = u64::from(self.hold);
        if frame < a {
            Phase::Growing
        } else if frame < a + h {
            Phase::Holding
        } else if frame < self.lifetime() {
            Phase::Shrinking
        } else {
            Phase::Ended
        }
    }

    /// Frame position on the opening curve: `f` while growing, `attack` while holding and the
    /// mirrored `lifetime - f - 1` while shrinking.
    pub fn bulge_drive(&self, frame: u64) -> f64 {
        match self.phase(frame) {
            Phase::Growing => frame as f64,
            Phase::Holding => f64::from(self.attack),
            Phase::Shrinking => (self.lifetime() - frame - 1) as f64,
            Phase::Ended => 0.0,
        }
    }

    /// Envelope scale in `[0, 1]`.
    pub fn scale(&self, frame: u64) -> f64 {
        match self.phase(frame) {
            Phase::Holding => 1.0,
            Phase::Ended => 0.0,
            // Growing/shrinking only exist when attack > 0.
            Phase::Growing | Phase::Shrinking => {
                let a = f64::from(self.attack);
                (PI * self.bulge_drive(frame) / (2.0 * a)).sin()
            }
        }
    }

    /// Control-point multiplier `0.1 / (1.2 * attack^2) * x^2 + 0.9` for a bulge drive `x`.
    pub fn bulge_coefficient(&self, x: f64) -> f64 {
        if self.attack == 0 {
            return OPEN_BULGE;
        }
        let a = f64::from(self.attack);
        0.1 / (a * a * 1.2) * x * x + 0.9
    }
}

#[cfg(test)]
#[path = "../../tests/unit/brella/envelope.rs"]
mod tests;
