//! Control point storage.

use crate::curve::ControlPoint;

/// Ordered, append-only list of control points.
///
/// Insertion order is the curve parameterization order. The only way to remove points is to
/// [`clear`](PointStore::clear) them all.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
  points: Vec<ControlPoint>,
}

impl PointStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a point at the end of the list.
  ///
  /// Any curve computed from the previous content is stale after this call.
  pub fn append(&mut self, point: ControlPoint) {
    self.points.push(point);
  }

  /// Remove every point.
  pub fn clear(&mut self) {
    self.points.clear();
  }

  pub fn points(&self) -> &[ControlPoint] {
    &self.points
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}
