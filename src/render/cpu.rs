use crate::foundation::core::{Affine, BezPath, Canvas, Rgba8};
use crate::foundation::error::{BrellaError, BrellaResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::backend::FrameRGBA;
use crate::surface::{LineCap, StrokeStyle, Surface};

/// CPU raster surface powered by `vello_cpu`.
///
/// Draw calls are recorded into a `vello_cpu::RenderContext` and rasterized on
/// [`CpuSurface::read_frame`]. The surface starts transparent; [`Surface::clear`] drops every
/// pending draw.
pub struct CpuSurface {
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    transform: Affine,
    width: u16,
    height: u16,
}

impl CpuSurface {
    /// Create a transparent surface of `canvas` size.
    pub fn new(canvas: Canvas) -> BrellaResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| BrellaError::render("surface width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| BrellaError::render("surface height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(BrellaError::render("surface width/height must be non-zero"));
        }
        Ok(Self {
            ctx: vello_cpu::RenderContext::new(width, height),
            pixmap: vello_cpu::Pixmap::new(width, height),
            transform: Affine::IDENTITY,
            width,
            height,
        })
    }

    /// Rasterize everything drawn since the last clear into a straight-alpha frame.
    pub fn read_frame(&mut self) -> FrameRGBA {
        self.pixmap.data_as_u8_slice_mut().fill(0);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);

        let mut data = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data,
            premultiplied: false,
        }
    }

    fn prepare_paint(&mut self, color: Rgba8) {
        self.ctx.set_transform(affine_to_cpu(self.transform));
        self.ctx
            .set_paint(vello_cpu::peniko::Color::from_rgba8(color.r, color.g, color.b, color.a));
    }
}

impl Surface for CpuSurface {
    fn width(&self) -> u32 {
        u32::from(self.width)
    }

    fn height(&self) -> u32 {
        u32::from(self.height)
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        if color.a == 0 {
            return;
        }
        self.prepare_paint(color);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8) {
        // Zero-width strokes cover nothing.
        if color.a == 0 || style.width.is_nan() || style.width <= 0.0 {
            return;
        }
        self.prepare_paint(color);
        self.ctx.set_stroke(stroke_to_cpu(style));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn clear(&mut self) {
        self.ctx.reset();
        self.transform = Affine::IDENTITY;
    }
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn stroke_to_cpu(style: &StrokeStyle) -> vello_cpu::kurbo::Stroke {
    let cap = match style.cap {
        LineCap::Butt => vello_cpu::kurbo::Cap::Butt,
        LineCap::Round => vello_cpu::kurbo::Cap::Round,
        LineCap::Square => vello_cpu::kurbo::Cap::Square,
    };
    vello_cpu::kurbo::Stroke::new(style.width).with_caps(cap)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
