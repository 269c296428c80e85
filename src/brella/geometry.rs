use crate::foundation::core::{BezPath, Point, Vector2};
use kurbo::Shape as _;
use std::f64::consts::TAU;

/// Ribs sit just inside the canopy edge.
const RIB_INSET: f64 = 0.995;

/// Flattening tolerance used when turning the cap circle into a path.
const CAP_TOLERANCE: f64 = 0.1;

/// Angle between adjacent canopy vertices.
pub fn center_angle(sides: u32) -> f64 {
    TAU / f64::from(sides)
}

/// Canopy outline: `sides` cubic panels between vertices on a circle of `radius`.
///
/// Each panel uses a single control point, the edge midpoint pushed out by `bulge`, for both
/// tangents. The path is closed.
pub fn canopy_path(radius: f64, sides: u32, bulge: f64) -> BezPath {
    let step = center_angle(sides);
    let mut path = BezPath::new();
    let mut vertex = Vector2::new(0.0, radius);
    path.move_to(vertex.to_point());
    for _ in 0..sides {
        let last = vertex;
        vertex = vertex.rotate(step);
        let cp = last.add(vertex).scale_all(0.5).scale_all(bulge).to_point();
        path.curve_to(cp, cp, vertex.to_point());
    }
    path.close_path();
    path
}

/// One straight segment per vertex, from just inside the canopy edge to the origin.
pub fn rib_path(radius: f64, sides: u32) -> BezPath {
    let step = center_angle(sides);
    let mut path = BezPath::new();
    let mut vertex = Vector2::new(0.0, radius).scale_all(RIB_INSET);
    for _ in 0..sides {
        path.move_to(vertex.to_point());
        path.line_to(Point::ORIGIN);
        vertex = vertex.rotate(step);
    }
    path
}

/// Full circle of `radius` around the origin.
pub fn cap_path(radius: f64) -> BezPath {
    kurbo::Circle::new(Point::ORIGIN, radius.max(0.0)).to_path(CAP_TOLERANCE)
}

#[cfg(test)]
#[path = "../../tests/unit/brella/geometry.rs"]
mod tests;
