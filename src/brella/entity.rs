use crate::brella::envelope::Envelope;
use crate::brella::geometry::{cap_path, canopy_path, rib_path};
use crate::color::hsl::Hsl;
use crate::color::range::Palette;
use crate::foundation::core::{Affine, Vector2};
use crate::foundation::random::RandomSource;
use crate::surface::{StrokeStyle, Surface, with_transform};
use std::f64::consts::TAU;

const RIB_DARKEN: f64 = 5.0;
const CAP_DARKEN: f64 = 20.0;
const RIB_WIDTH: f64 = 0.01;
const CAP_RADIUS: f64 = 0.02;

/// A single umbrella-shaped polygon with its own timing, geometry and colour.
///
/// Position, size, side count and colour are fixed at spawn. Only [`Brella::render`] mutates
/// the frame counter, rotation and `ended` flag.
#[derive(Clone, Debug)]
pub struct Brella {
    position: Vector2,
    size: f64,
    sides: u32,
    color: Hsl,
    angle: f64,
    frames: u64,
    ended: bool,
    envelope: Envelope,
}

impl Brella {
    /// Create a brella with explicit parameters. `sides` below 3 is raised to 3.
    pub fn new(
        position: Vector2,
        size: f64,
        sides: u32,
        color: Hsl,
        angle: f64,
        envelope: Envelope,
    ) -> Self {
        Self {
            position,
            size,
            sides: sides.max(3),
            color,
            angle,
            frames: 0,
            ended: false,
            envelope,
        }
    }

    /// Create a brella whose colour and initial rotation are drawn from `rng`
    /// (hue, saturation, lightness, then angle).
    pub fn sample<R: RandomSource + ?Sized>(
        position: Vector2,
        size: f64,
        sides: u32,
        palette: &Palette,
        envelope: Envelope,
        rng: &mut R,
    ) -> Self {
        let color = palette.sample(rng);
        let angle = rng.next_f64() * TAU;
        Self::new(position, size, sides, color, angle, envelope)
    }

    /// Centre of the brella on the surface.
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Diameter reference used for geometry and placement.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Number of canopy panels and ribs.
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Base canopy colour.
    pub fn color(&self) -> Hsl {
        self.color
    }

    /// Current rotation in radians.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// `true` once the full lifetime has been rendered.
    pub fn ended(&self) -> bool {
        self.ended
    }

    /// Envelope scale for the next frame to be rendered.
    pub fn scale(&self) -> f64 {
        self.envelope.scale(self.frames)
    }

    /// Draw the current frame, then advance.
    ///
    /// Order: translate, rotate, fill canopy, stroke ribs, fill cap, reset transform, advance the
    /// frame counter (setting `ended` at the lifetime), add `rotate_step` to the angle. Once
    /// ended this does nothing at all.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S, rotate_step: f64) {
        if self.ended {
            return;
        }

        let scale = self.scale();
        let radius = self.size * 0.5 * scale;
        let bulge = self
            .envelope
            .bulge_coefficient(self.envelope.bulge_drive(self.frames));

        let local = Affine::translate(kurbo::Vec2::from(self.position)) * Affine::rotate(self.angle);
        with_transform(surface, local, |s| {
            s.fill_path(&canopy_path(radius, self.sides, bulge), self.color.to_rgba8());
            s.stroke_path(
                &rib_path(radius, self.sides),
                &StrokeStyle::round(self.size * RIB_WIDTH * scale),
                self.color.darken(RIB_DARKEN).to_rgba8(),
            );
            s.fill_path(
                &cap_path(self.size * CAP_RADIUS * scale),
                self.color.darken(CAP_DARKEN).to_rgba8(),
            );
        });

        self.frames += 1;
        if self.frames >= self.envelope.lifetime() {
            self.ended = true;
        }
        self.angle += rotate_step;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/brella/entity.rs"]
mod tests;
