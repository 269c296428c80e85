/// The animated entity itself.
pub mod entity;
/// Attack/hold/release timing.
pub mod envelope;
/// Canopy, rib and cap outlines.
pub mod geometry;
