use super::*;
use crate::foundation::core::Vector2;
use kurbo::{Rect, Shape as _};

fn surface(w: u32, h: u32) -> CpuSurface {
    CpuSurface::new(Canvas::new(w, h).unwrap()).unwrap()
}

fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> BezPath {
    Rect::new(x0, y0, x1, y1).to_path(0.1)
}

#[test]
fn fresh_surface_reads_back_transparent() {
    let mut s = surface(8, 6);
    let frame = s.read_frame();
    assert_eq!((frame.width, frame.height), (8, 6));
    assert_eq!(frame.data.len(), 8 * 6 * 4);
    assert!(!frame.premultiplied);
    assert_eq!(frame.covered_pixels(), 0);
}

#[test]
fn rejects_sizes_beyond_raster_limits() {
    let too_wide = Canvas {
        width: 70_000,
        height: 10,
    };
    assert!(CpuSurface::new(too_wide).is_err());
    let empty = Canvas {
        width: 0,
        height: 10,
    };
    assert!(CpuSurface::new(empty).is_err());
}

#[test]
fn fill_paints_straight_alpha_pixels() {
    let mut s = surface(16, 16);
    s.fill_path(&square(2.0, 2.0, 12.0, 12.0), Rgba8::opaque(255, 0, 0));
    let frame = s.read_frame();
    assert_eq!(frame.pixel(6, 6), Some([255, 0, 0, 255]));
    assert_eq!(frame.pixel(14, 14), Some([0, 0, 0, 0]));
}

#[test]
fn paint_honours_current_transform() {
    let mut s = surface(16, 16);
    s.translate(Vector2::new(8.0, 8.0));
    s.fill_path(&square(0.0, 0.0, 6.0, 6.0), Rgba8::opaque(0, 0, 255));
    let frame = s.read_frame();
    assert_eq!(frame.pixel(10, 10), Some([0, 0, 255, 255]));
    assert_eq!(frame.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn clear_drops_pending_draws_and_transform() {
    let mut s = surface(8, 8);
    s.translate(Vector2::new(1.0, 1.0));
    s.fill_path(&square(0.0, 0.0, 8.0, 8.0), Rgba8::opaque(0, 255, 0));
    s.clear();
    assert_eq!(s.transform(), Affine::IDENTITY);
    assert_eq!(s.read_frame().covered_pixels(), 0);
}

#[test]
fn degenerate_strokes_and_transparent_fills_cover_nothing() {
    let mut s = surface(8, 8);
    let mut line = BezPath::new();
    line.move_to((0.0, 4.0));
    line.line_to((8.0, 4.0));
    s.stroke_path(&line, &StrokeStyle::round(0.0), Rgba8::opaque(1, 1, 1));
    s.stroke_path(&line, &StrokeStyle::round(f64::NAN), Rgba8::opaque(1, 1, 1));
    s.fill_path(&square(0.0, 0.0, 8.0, 8.0), Rgba8::transparent());
    assert_eq!(s.read_frame().covered_pixels(), 0);

    s.stroke_path(&line, &StrokeStyle::round(2.0), Rgba8::opaque(1, 1, 1));
    assert!(s.read_frame().covered_pixels() > 0);
}
