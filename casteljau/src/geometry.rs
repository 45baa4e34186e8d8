//! Vertex layout and per-layer geometry.
//!
//! Everything drawn by the editor goes through the same vertex type: a 2D position in window
//! coordinates (origin at the bottom-left corner) and an RGB color. The scene is made of three
//! [`Layer`]s, drawn in [`Layer::ALL`] order.

use cgmath::Point2;
use luminance::{Semantics, Vertex};
use luminance_front::tess::Mode;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Semantics)]
pub enum Semantics {
  // reference vertex positions with the co variable in vertex shaders
  #[sem(name = "co", repr = "[f32; 2]", wrapper = "VertexPosition")]
  Position,
  // reference vertex colors with the color variable in vertex shaders
  #[sem(name = "color", repr = "[f32; 3]", wrapper = "VertexColor")]
  Color,
}

#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Vertex)]
#[vertex(sem = "Semantics")]
pub struct Vertex {
  pub pos: VertexPosition,
  pub rgb: VertexColor,
}

/// Color of the control polygon.
pub const POLYGON_COLOR: [f32; 3] = [0.5, 0.9, 0.5];

/// Color of the control points.
pub const POINT_COLOR: [f32; 3] = [1., 1., 1.];

/// Color of the curve.
pub const CURVE_COLOR: [f32; 3] = [1., 0., 0.];

/// Default background color (blue violet).
pub const CLEAR_COLOR: [f32; 4] = [138. / 255., 43. / 255., 226. / 255., 1.];

/// A drawable part of the scene.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Layer {
  /// Line strip joining the control points in insertion order.
  Polygon,
  /// The control points themselves.
  Points,
  /// Line strip through the curve samples.
  Curve,
}

impl Layer {
  /// Every layer, in draw order.
  pub const ALL: [Layer; 3] = [Layer::Polygon, Layer::Points, Layer::Curve];

  pub fn mode(self) -> Mode {
    match self {
      Layer::Polygon | Layer::Curve => Mode::LineStrip,
      Layer::Points => Mode::Point,
    }
  }

  pub fn color(self) -> [f32; 3] {
    match self {
      Layer::Polygon => POLYGON_COLOR,
      Layer::Points => POINT_COLOR,
      Layer::Curve => CURVE_COLOR,
    }
  }
}

/// Turn a list of positions into colored vertices, narrowing them to single precision.
pub fn vertices<'a>(
  positions: impl IntoIterator<Item = &'a Point2<f64>>,
  color: [f32; 3],
) -> Vec<Vertex> {
  positions
    .into_iter()
    .map(|p| {
      Vertex::new(
        VertexPosition::new([p.x as f32, p.y as f32]),
        VertexColor::new(color),
      )
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn vertices_carry_position_and_color() {
    let positions = [Point2::new(1.5, 2.), Point2::new(-3., 0.25)];
    let verts = vertices(&positions, CURVE_COLOR);

    assert_eq!(
      verts,
      vec![
        Vertex::new(
          VertexPosition::new([1.5, 2.]),
          VertexColor::new(CURVE_COLOR)
        ),
        Vertex::new(
          VertexPosition::new([-3., 0.25]),
          VertexColor::new(CURVE_COLOR)
        ),
      ]
    );
  }

  #[test]
  fn no_position_no_vertex() {
    assert!(vertices(&[], POINT_COLOR).is_empty());
  }

  #[test]
  fn layers_draw_order() {
    assert_eq!(Layer::ALL, [Layer::Polygon, Layer::Points, Layer::Curve]);
    assert_eq!(Layer::Points.color(), POINT_COLOR);
    assert_eq!(Layer::Polygon.color(), POLYGON_COLOR);
  }
}
