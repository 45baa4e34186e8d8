//! Editor configuration.

use crate::{curve::Weighting, geometry::CLEAR_COLOR};

/// Number of curve fragments used when nothing else is asked for.
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Knobs of an editing session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EditorConfig {
  /// Number of fragments the curve is cut into; the curve has one more sample than that.
  pub sample_count: usize,
  /// Interpolation convention of the De Casteljau rounds.
  pub weighting: Weighting,
  /// Background color.
  pub clear_color: [f32; 4],
}

impl Default for EditorConfig {
  fn default() -> Self {
    EditorConfig {
      sample_count: DEFAULT_SAMPLE_COUNT,
      weighting: Weighting::Mirrored,
      clear_color: CLEAR_COLOR,
    }
  }
}

impl EditorConfig {
  pub fn set_sample_count(self, sample_count: usize) -> Self {
    EditorConfig {
      sample_count,
      ..self
    }
  }

  pub fn set_weighting(self, weighting: Weighting) -> Self {
    EditorConfig { weighting, ..self }
  }

  pub fn set_clear_color(self, clear_color: [f32; 4]) -> Self {
    EditorConfig {
      clear_color,
      ..self
    }
  }
}
