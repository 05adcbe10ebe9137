/// Immutable rendered frames.
pub(crate) mod frame;
/// One-shot snapshot renderer.
pub(crate) mod snapshot;
