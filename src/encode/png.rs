use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BrellaError, BrellaResult};
use crate::render::backend::FrameRGBA;
use anyhow::Context as _;
use std::path::{Path, PathBuf};

/// Writes each frame as `frame-NNNN.png` into a directory.
#[derive(Debug, Clone)]
pub struct PngSequenceSink {
    dir: PathBuf,
    force: bool,
    written: u64,
}

impl PngSequenceSink {
    /// Sink writing into `dir`. Unless `force` is set, `begin` fails when `dir` already exists.
    pub fn new(dir: impl Into<PathBuf>, force: bool) -> Self {
        Self {
            dir: dir.into(),
            force,
            written: 0,
        }
    }

    /// Target directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Frames written since `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// File name used for frame `idx` (at least four digits).
    pub fn frame_file_name(idx: FrameIndex) -> String {
        format!("frame-{:04}.png", idx.0)
    }
}

impl FrameSink for PngSequenceSink {
    #[tracing::instrument(skip(self), fields(dir = %self.dir.display()))]
    fn begin(&mut self, _cfg: SinkConfig) -> BrellaResult<()> {
        if self.dir.exists() && !self.force {
            return Err(BrellaError::validation(format!(
                "output directory '{}' already exists",
                self.dir.display()
            )));
        }
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("failed to create output directory '{}'", self.dir.display()))?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRGBA) -> BrellaResult<()> {
        if frame.premultiplied {
            return Err(BrellaError::encode(
                "png sink expects straight-alpha frames",
            ));
        }
        let path = self.dir.join(Self::frame_file_name(idx));
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> BrellaResult<()> {
        tracing::debug!(frames = self.written, "png sequence complete");
        Ok(())
    }
}
