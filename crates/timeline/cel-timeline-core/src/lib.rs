#![allow(dead_code)]
//! cel timeline core (renderer-agnostic)
//!
//! Per animated object, an ordered sequence of contiguous keyframe
//! intervals, plus interpolated state queries at arbitrary ticks.
//! Rendering surfaces, playback control, and scene-file parsing live in
//! adapter crates; they consume the `Scene` API defined here.

pub mod builder;
pub mod canvas;
pub mod error;
pub mod interval;
pub mod sampling;
pub mod scene;
pub mod shape;
pub mod state;
pub mod timeline;

// Re-exports for consumers (adapters)
pub use builder::SceneBuilder;
pub use canvas::Canvas;
pub use error::TimelineError;
pub use interval::{Interval, Tick};
pub use sampling::sample;
pub use scene::{ObjectState, Scene};
pub use shape::{Shape, ShapeKind};
pub use state::{Rgb, State, Vec2};
