/// Options and their validation.
pub mod config;
/// Spawn loop and completion tracking.
pub mod orchestrator;
pub(crate) mod placement;
