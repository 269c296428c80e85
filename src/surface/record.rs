use crate::foundation::core::{Affine, BezPath, Rgba8};
use crate::surface::{StrokeStyle, Surface};

/// One recorded surface call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    /// The transform was replaced.
    SetTransform(Affine),
    /// A path was filled under `transform`.
    Fill {
        /// Filled path in user space.
        path: BezPath,
        /// Fill colour.
        color: Rgba8,
        /// Transform active at paint time.
        transform: Affine,
    },
    /// A path was stroked under `transform`.
    Stroke {
        /// Stroked path in user space.
        path: BezPath,
        /// Stroke parameters.
        style: StrokeStyle,
        /// Stroke colour.
        color: Rgba8,
        /// Transform active at paint time.
        transform: Affine,
    },
    /// The surface was cleared.
    Clear,
}

/// Surface that records every call instead of rasterizing.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    transform: Affine,
    cmds: Vec<DrawCmd>,
}

impl RecordingSurface {
    /// Create an empty recorder reporting the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: Affine::IDENTITY,
            cmds: Vec::new(),
        }
    }

    /// Borrow the recorded commands.
    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_cmds(&mut self) -> Vec<DrawCmd> {
        std::mem::take(&mut self.cmds)
    }

    /// Number of fill and stroke calls recorded.
    pub fn paint_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Fill { .. } | DrawCmd::Stroke { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.cmds.push(DrawCmd::SetTransform(transform));
    }

    fn fill_path(&mut self, path: &BezPath, color: Rgba8) {
        self.cmds.push(DrawCmd::Fill {
            path: path.clone(),
            color,
            transform: self.transform,
        });
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle, color: Rgba8) {
        self.cmds.push(DrawCmd::Stroke {
            path: path.clone(),
            style: *style,
            color,
            transform: self.transform,
        });
    }

    fn clear(&mut self) {
        self.transform = Affine::IDENTITY;
        self.cmds.push(DrawCmd::Clear);
    }
}
