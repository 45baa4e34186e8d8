//! Bézier curve evaluation with De Casteljau’s algorithm.
//!
//! A curve is defined by an ordered list of [`ControlPoint`]s and approximated by a polyline of
//! [`CurveSample`]s. The number of samples is driven by a _fragment count_: asking for `n`
//! fragments yields `n + 1` samples, both endpoints included.
//!
//! Evaluation is a pure function of its inputs. Nothing is cached between calls: the control
//! polygons we deal with are a handful of clicks, so recomputing the whole curve on every edit is
//! fine.
//!
//! # Weighting
//!
//! Each De Casteljau round blends two consecutive points. The blend used by default,
//! [`Weighting::Mirrored`], puts `t` on the _lower-index_ point:
//!
//! ```text
//! p[i] = t * p[i] + (1 - t) * p[i + 1]
//! ```
//!
//! That walks the curve from the last control point (`t = 0`) to the first one (`t = 1`). The
//! textbook form is available as [`Weighting::Standard`]. Both trace the same set of points, in
//! opposite directions.

use cgmath::{EuclideanSpace as _, Point2};
use std::{error::Error, fmt, str::FromStr};

/// A user-placed control point.
pub type ControlPoint = Point2<f64>;

/// A point evaluated on the curve.
pub type CurveSample = Point2<f64>;

/// Interpolation convention used by the De Casteljau rounds.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Weighting {
  /// `t * p[i] + (1 - t) * p[i + 1]`; `t = 0` lands on the last control point.
  Mirrored,
  /// `(1 - t) * p[i] + t * p[i + 1]`; `t = 0` lands on the first control point.
  Standard,
}

impl Default for Weighting {
  fn default() -> Self {
    Weighting::Mirrored
  }
}

impl Weighting {
  /// Affine blend of `a` and `b` at parameter `t`.
  fn blend(self, t: f64, a: Point2<f64>, b: Point2<f64>) -> Point2<f64> {
    let (wa, wb) = match self {
      Weighting::Mirrored => (t, 1. - t),
      Weighting::Standard => (1. - t, t),
    };

    Point2::from_vec(a.to_vec() * wa + b.to_vec() * wb)
  }
}

impl fmt::Display for Weighting {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match *self {
      Weighting::Mirrored => f.write_str("mirrored"),
      Weighting::Standard => f.write_str("standard"),
    }
  }
}

/// Error returned when parsing an unknown [`Weighting`] name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParseWeightingError(String);

impl fmt::Display for ParseWeightingError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(
      f,
      "unknown weighting “{}” (expected “mirrored” or “standard”)",
      self.0
    )
  }
}

impl Error for ParseWeightingError {}

impl FromStr for Weighting {
  type Err = ParseWeightingError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "mirrored" => Ok(Weighting::Mirrored),
      "standard" => Ok(Weighting::Standard),
      _ => Err(ParseWeightingError(s.to_owned())),
    }
  }
}

/// Evaluate the curve at a single parameter `t`.
///
/// Returns [`None`] if `points` is empty. A single control point evaluates to itself.
pub fn de_casteljau(
  weighting: Weighting,
  t: f64,
  points: &[ControlPoint],
) -> Option<CurveSample> {
  let mut scratch = points.to_vec();
  let n = scratch.len();

  for k in 0..n.saturating_sub(1) {
    for i in 0..n - 1 - k {
      scratch[i] = weighting.blend(t, scratch[i], scratch[i + 1]);
    }
  }

  scratch.first().copied()
}

/// Evaluate the curve defined by `points` with the [`Weighting::Mirrored`] convention.
///
/// See [`evaluate_with`].
pub fn evaluate(points: &[ControlPoint], sample_count: usize) -> Vec<CurveSample> {
  evaluate_with(Weighting::Mirrored, points, sample_count)
}

/// Evaluate the curve defined by `points` into `sample_count + 1` samples.
///
/// Fewer than two control points don’t define a curve: the result is then empty. A
/// `sample_count` of `0` yields the single sample at `t = 0`.
pub fn evaluate_with(
  weighting: Weighting,
  points: &[ControlPoint],
  sample_count: usize,
) -> Vec<CurveSample> {
  if points.len() < 2 {
    return Vec::new();
  }

  (0..=sample_count)
    .filter_map(|i| {
      let t = if sample_count == 0 {
        0.
      } else {
        i as f64 / sample_count as f64
      };

      de_casteljau(weighting, t, points)
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn close(a: CurveSample, b: CurveSample) -> bool {
    (a.x - b.x).abs() < 1e-9 && (a.y - b.y).abs() < 1e-9
  }

  #[test]
  fn single_point_evaluates_to_itself() {
    let p = Point2::new(3., -4.);

    for &t in &[0., 0.25, 1.] {
      assert_eq!(de_casteljau(Weighting::Mirrored, t, &[p]), Some(p));
      assert_eq!(de_casteljau(Weighting::Standard, t, &[p]), Some(p));
    }
  }

  #[test]
  fn empty_has_no_point() {
    assert_eq!(de_casteljau(Weighting::Mirrored, 0.5, &[]), None);
  }

  #[test]
  fn quadratic_midpoint() {
    // B(1/2) = 1/4 p0 + 1/2 p1 + 1/4 p2, whatever the convention
    let points = [Point2::new(0., 0.), Point2::new(4., 8.), Point2::new(8., 0.)];
    let expected = Point2::new(4., 4.);

    let mirrored = de_casteljau(Weighting::Mirrored, 0.5, &points).unwrap();
    let standard = de_casteljau(Weighting::Standard, 0.5, &points).unwrap();

    assert!(close(mirrored, expected));
    assert!(close(standard, expected));
  }

  #[test]
  fn conventions_are_mirror_images() {
    let points = [
      Point2::new(0., 0.),
      Point2::new(1., 5.),
      Point2::new(7., 2.),
      Point2::new(9., 9.),
    ];

    for i in 0..=10 {
      let t = i as f64 / 10.;
      let mirrored = de_casteljau(Weighting::Mirrored, t, &points).unwrap();
      let standard = de_casteljau(Weighting::Standard, 1. - t, &points).unwrap();

      assert!(close(mirrored, standard), "t = {}", t);
    }
  }

  #[test]
  fn parse_weighting() {
    assert_eq!("mirrored".parse::<Weighting>(), Ok(Weighting::Mirrored));
    assert_eq!("Standard".parse::<Weighting>(), Ok(Weighting::Standard));
    assert!("textbook".parse::<Weighting>().is_err());
    assert_eq!(Weighting::default(), Weighting::Mirrored);
    assert_eq!(Weighting::Standard.to_string(), "standard");
  }
}
