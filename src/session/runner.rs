use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{Canvas, Fps, FrameIndex};
use crate::foundation::error::{BrellaError, BrellaResult};
use crate::foundation::random::RandomSource;
use crate::render::cpu::CpuSurface;
use crate::surface::Surface;
use crate::transition::orchestrator::Transition;

/// Progress snapshot reported after every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// Frames rendered so far.
    pub rendered: u64,
    /// Estimated total frames.
    pub estimated: u64,
}

impl Progress {
    /// Whole percentage of the estimate (may exceed 100 if the estimate is short).
    pub fn percent(&self) -> u64 {
        self.rendered * 100 / self.estimated.max(1)
    }

    /// `[PPP%] Rendered NNN / EST frames`, with the count padded to `floor(log10(EST))` digits.
    pub fn line(&self) -> String {
        let pad = self.estimated.max(1).ilog10() as usize;
        format!(
            "[{:03}%] Rendered {:0pad$} / {} frames",
            self.percent(),
            self.rendered,
            self.estimated,
        )
    }
}

/// Statistics of a completed run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Frames rendered and pushed to the sink.
    pub frames: u64,
}

/// Drives a [`Transition`] frame by frame on a [`CpuSurface`] and streams frames to a sink.
pub struct TransitionRunner {
    surface: CpuSurface,
    canvas: Canvas,
    fps: Fps,
}

impl TransitionRunner {
    /// Create a runner rendering `canvas`-sized frames at `fps`.
    pub fn new(canvas: Canvas, fps: Fps) -> BrellaResult<Self> {
        Ok(Self {
            surface: CpuSurface::new(canvas)?,
            canvas,
            fps,
        })
    }

    /// Activate `transition` and render until it deactivates.
    ///
    /// Every frame the surface is cleared, the transition drawn, and the read-back frame pushed
    /// to `sink`; `on_progress` is called after each push.
    #[tracing::instrument(skip_all, fields(width = self.canvas.width, height = self.canvas.height))]
    pub fn run<R: RandomSource>(
        &mut self,
        transition: &mut Transition<R>,
        sink: &mut dyn FrameSink,
        mut on_progress: impl FnMut(Progress),
    ) -> BrellaResult<RunStats> {
        transition.activate();
        let estimated = transition.estimated_frames();
        sink.begin(SinkConfig {
            width: self.canvas.width,
            height: self.canvas.height,
            fps: self.fps,
        })?;

        let mut frames = 0u64;
        while transition.is_active() {
            self.surface.clear();
            transition.render(&mut self.surface);
            let frame = self.surface.read_frame();
            if let Err(err) = sink.push_frame(FrameIndex(frames), &frame) {
                return Err(finish_after_failure(sink, err));
            }
            frames += 1;
            on_progress(Progress {
                rendered: frames,
                estimated,
            });
        }

        sink.end()?;
        tracing::info!(frames, estimated, "transition rendered");
        Ok(RunStats { frames })
    }
}

/// End `sink` after a failed push so encoders are reaped; their diagnostics join `err`.
fn finish_after_failure(sink: &mut dyn FrameSink, err: BrellaError) -> BrellaError {
    match sink.end() {
        Ok(()) => err,
        Err(end_err) => {
            tracing::warn!(%err, %end_err, "sink failed while finishing an aborted run");
            BrellaError::encode(format!("{err}; sink shutdown failed: {end_err}"))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/runner.rs"]
mod tests;
