//! Drawing surface abstraction consumed by the engine.
//!
//! A surface exposes its size, a current affine transform and two paint operations over
//! `kurbo` paths. `translate`/`rotate` post-multiply the current transform the same way a 2D
//! canvas context does, so `translate(p)` followed by `rotate(a)` draws rotated shapes around
//! `p`.

use crate::foundation::core::{Affine, BezPath, Rgba8, Vector2};

/// Recording surface for tests and debugging.
pub mod record;

/// Shape drawn at the open ends of a stroke.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LineCap {
    /// Flat end at the path endpoint.
    #[default]
    Butt,
    /// Half-disc end.
    Round,
    /// Half-square end.
    Square,
}

/// Stroke parameters.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct StrokeStyle {
    /// Line width in user units.
    pub width: f64,
    /// End cap style.
    pub cap: LineCap,
}

impl StrokeStyle {
    /// Round-capped stroke of `width`.
    pub fn round(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Round,
        }
    }
}

/// A 2D drawing target.
///
/// Paths are interpreted in the coordinate frame given by [`Surface::transform`] at the time of
/// the paint call.
pub trait Surface {
    /// Surface width in pixels.
    fn width(&self) -> u32;
    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Current user-to-device transform.
    fn transform(&self) -> Affine;
    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Fill `path` with a solid colour (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, color: Rgba8);
    /// Stroke `path` with a solid colour.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8);

    /// Erase everything drawn since the last clear and reset the transform.
    fn clear(&mut self);

    /// Post-multiply a translation.
    fn translate(&mut self, offset: Vector2) {
        let t = self.transform() * Affine::translate(kurbo::Vec2::from(offset));
        self.set_transform(t);
    }

    /// Post-multiply a rotation of `angle` radians.
    fn rotate(&mut self, angle: f64) {
        let t = self.transform() * Affine::rotate(angle);
        self.set_transform(t);
    }

    /// Restore the default (identity) transform.
    fn reset_transform(&mut self) {
        self.set_transform(Affine::IDENTITY);
    }
}

/// Run `f` with `local` applied on top of the current transform, then restore the identity.
///
/// The reset happens after `f` returns on every path, so drawing code inside `f` never leaks a
/// transform into the next caller.
pub fn with_transform<S, R>(surface: &mut S, local: Affine, f: impl FnOnce(&mut S) -> R) -> R
where
    S: Surface + ?Sized,
{
    let t = surface.transform() * local;
    surface.set_transform(t);
    let out = f(surface);
    surface.reset_transform();
    out
}

#[cfg(test)]
#[path = "../../tests/unit/surface/mod.rs"]
mod tests;
