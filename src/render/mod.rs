/// Rendered frame buffers.
pub mod backend;
/// CPU raster surface powered by `vello_cpu`.
pub mod cpu;
