//! Brella renders a procedural "umbrella" transition: a population of independently timed
//! polygons that open, hold and close while rotating, frame by frame, until every one of them
//! has finished its lifecycle.
//!
//! The public API is frame-stepped:
//!
//! - Build a validated [`TransitionConfig`] and construct a [`Transition`]
//! - Call [`Transition::activate`], then [`Transition::render`] once per frame against any
//!   [`Surface`] until [`Transition::is_active`] turns `false`
//! - Or let a [`TransitionRunner`] drive the loop into a [`FrameSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Brella entities: envelope timing, outline geometry and per-frame drawing.
pub mod brella;
/// HSL colour model and sampled channel ranges.
pub mod color;
/// Frame sinks (PNG sequences, `ffmpeg` WebM output).
pub mod encode;
/// Raster backend(s).
pub mod render;
/// Frame loop driving a transition into a sink.
pub mod session;
/// Drawing surface abstraction.
pub mod surface;
/// Multi-entity orchestration and configuration.
pub mod transition;

pub use crate::foundation::core::{Affine, BezPath, Canvas, Fps, FrameIndex, Point, Rgba8, Vector2};
pub use crate::foundation::error::{BrellaError, BrellaResult};
pub use crate::foundation::random::{RandomSource, SequenceRandom};

pub use crate::brella::entity::Brella;
pub use crate::brella::envelope::{Envelope, Phase};
pub use crate::color::hsl::Hsl;
pub use crate::color::range::{ChannelRange, Palette};
pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::output::{is_valid_file_name, unique_output_path};
pub use crate::encode::png::PngSequenceSink;
pub use crate::encode::sink::{FrameSink, InMemorySink, MultiSink, SinkConfig};
pub use crate::render::backend::FrameRGBA;
pub use crate::render::cpu::CpuSurface;
pub use crate::session::runner::{Progress, RunStats, TransitionRunner};
pub use crate::surface::record::{DrawCmd, RecordingSurface};
pub use crate::surface::{LineCap, StrokeStyle, Surface, with_transform};
pub use crate::transition::config::{RetryBudget, TransitionConfig};
pub use crate::transition::orchestrator::Transition;
