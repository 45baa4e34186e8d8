//! Interactive Bézier curve editor.
//!
//! Click to drop control points, and the curve they define is evaluated with De Casteljau’s
//! algorithm and drawn on top of its control polygon. Press the reset action to start over.
//!
//! # Architecture
//!
//! The crate doesn’t depend on any platform-specific concept, such as system events or window
//! creation. Whenever the editor requires user interaction, an abstract [`InputAction`] is used,
//! which the platform code running the editor produces from its own events.
//!
//! - [`curve`] and [`points`] are the numerical core: control point storage and curve evaluation.
//!   They don’t touch the GPU at all.
//! - [`session`] owns the editing state and turns [`InputAction`]s into edits.
//! - [`geometry`] and [`scene`] turn a session into luminance tessellations and draw them.
//! - [`editor`] glues a session and a scene together, one frame at a time.

pub mod config;
pub mod curve;
pub mod editor;
pub mod geometry;
pub mod points;
pub mod scene;
pub mod session;

pub use crate::{
  config::EditorConfig,
  curve::{evaluate, evaluate_with, ControlPoint, CurveSample, Weighting},
  editor::Editor,
  points::PointStore,
};

/// A type used to pass “inputs” to the editor.
#[derive(Clone, Debug, PartialEq)]
pub enum InputAction {
  /// Quit the application.
  Quit,

  /// Primary button released; drops a control point under the cursor.
  PrimaryReleased,

  /// Remove every control point.
  Reset,

  /// Cursor moved, in window coordinates (origin at the top-left corner).
  CursorMoved { x: f32, y: f32 },

  /// Window size changed.
  Resized { width: u32, height: u32 },
}

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum LoopFeedback {
  Continue,
  Exit,
}
