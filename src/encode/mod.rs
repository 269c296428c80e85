//! Encoding sinks.
//!
//! Sinks consume rendered frames in output order and are driven by
//! [`TransitionRunner::run`](crate::TransitionRunner::run).

/// `ffmpeg`-based sink (transparent WebM via system `ffmpeg`).
pub mod ffmpeg;
/// Output file naming helpers.
pub mod output;
/// Numbered PNG sequence sink.
pub mod png;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
