//! Interactive editing session.
//!
//! A [`Session`] owns everything that changes while the user edits a curve: the control points,
//! the samples derived from them, the last known cursor position and the size of the window. It
//! knows nothing about the GPU; the [`scene`](crate::scene) reads it to build its geometry.

use cgmath::{ortho, Matrix4, Point2};

use crate::{
  config::EditorConfig,
  curve::{self, CurveSample},
  geometry::{self, Layer, Vertex},
  points::PointStore,
  InputAction,
};

/// What an [`InputAction`] changed in a [`Session`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Change {
  /// Nothing visible changed.
  None,
  /// Points and samples changed; geometry must be uploaded again.
  Geometry,
  /// The window size, and then the projection, changed.
  Viewport,
  /// The user asked to leave.
  Quit,
}

#[derive(Clone, Debug)]
pub struct Session {
  config: EditorConfig,
  points: PointStore,
  samples: Vec<CurveSample>,
  // window coordinates, origin at the top-left corner
  cursor_pos: Option<[f32; 2]>,
  window_size: [u32; 2],
}

impl Session {
  pub fn new(config: EditorConfig, window_size: [u32; 2]) -> Self {
    Session {
      config,
      points: PointStore::new(),
      samples: Vec::new(),
      cursor_pos: None,
      window_size,
    }
  }

  pub fn config(&self) -> &EditorConfig {
    &self.config
  }

  pub fn points(&self) -> &PointStore {
    &self.points
  }

  pub fn samples(&self) -> &[CurveSample] {
    &self.samples
  }

  pub fn window_size(&self) -> [u32; 2] {
    self.window_size
  }

  /// Apply a single input action.
  pub fn apply(&mut self, action: InputAction) -> Change {
    match action {
      InputAction::Quit => Change::Quit,

      InputAction::CursorMoved { x, y } => {
        self.cursor_pos = Some([x, y]);
        Change::None
      }

      InputAction::PrimaryReleased => match self.cursor_pos {
        Some([x, y]) => {
          // the cursor origin is at the top-left corner, the projection’s at the bottom-left one
          let point = Point2::new(x as f64, self.window_size[1] as f64 - y as f64);
          log::debug!("adding control point ({}, {})", point.x, point.y);

          self.points.append(point);
          self.recompute();
          Change::Geometry
        }

        None => {
          log::warn!("click without a known cursor position; ignoring");
          Change::None
        }
      },

      InputAction::Reset => {
        log::info!("clearing {} control point(s)", self.points.len());
        self.points.clear();
        self.recompute();
        Change::Geometry
      }

      InputAction::Resized { width, height } => {
        log::debug!("window resized to {}×{}", width, height);
        self.window_size = [width, height];
        Change::Viewport
      }
    }
  }

  /// Orthographic projection mapping window coordinates (origin at the bottom-left corner) to
  /// clip space.
  pub fn projection(&self) -> Matrix4<f32> {
    let [w, h] = self.window_size;
    ortho(0., w as f32, 0., h as f32, -1., 1.)
  }

  /// Vertices to upload for the given layer.
  pub fn layer_vertices(&self, layer: Layer) -> Vec<Vertex> {
    match layer {
      Layer::Polygon | Layer::Points => geometry::vertices(self.points.points(), layer.color()),
      Layer::Curve => geometry::vertices(&self.samples, layer.color()),
    }
  }

  fn recompute(&mut self) {
    self.samples = curve::evaluate_with(
      self.config.weighting,
      self.points.points(),
      self.config.sample_count,
    );
  }
}
