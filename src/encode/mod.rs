//! Encoding sinks.
//!
//! Sinks consume finished frames in emission order. [`sink::AnimationSink`] collects the frames of
//! one traversal; [`sink::FrameSink`] implementations hand them to an encoder.

/// Animated GIF output via the `image` crate.
pub mod gif;
/// Frame sink trait, in-memory sinks and the animation accumulator.
pub mod sink;
