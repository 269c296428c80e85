/// Render loop from an active transition into a frame sink.
pub mod runner;
