use casteljau::{evaluate, evaluate_with, ControlPoint, PointStore, Weighting};
use cgmath::Point2;

fn p(x: f64, y: f64) -> ControlPoint {
  Point2::new(x, y)
}

fn polygon() -> Vec<ControlPoint> {
  vec![p(0., 0.), p(2., 7.), p(5., -3.), p(9., 4.), p(12., 1.)]
}

#[test]
fn too_few_points_no_curve() {
  for &n in &[0, 1, 2, 1000] {
    assert!(evaluate(&[], n).is_empty());
    assert!(evaluate(&[p(4., 2.)], n).is_empty());
    assert!(evaluate_with(Weighting::Standard, &[p(4., 2.)], n).is_empty());
  }
}

#[test]
fn zero_fragments_single_sample_at_t0() {
  let points = polygon();
  let samples = evaluate(&points, 0);

  // t = 0 with the mirrored blend collapses every round onto the upper point
  assert_eq!(samples, vec![p(12., 1.)]);
}

#[test]
fn sample_count_is_fragments_plus_one() {
  let points = polygon();

  for &n in &[1, 2, 7, 100, 1000] {
    assert_eq!(evaluate(&points, n).len(), n + 1);
    assert_eq!(evaluate(&points[..2], n).len(), n + 1);
  }
}

#[test]
fn doubling_fragments_is_independent() {
  let points = polygon();
  let n = 25;

  let coarse = evaluate(&points, n);
  let fine = evaluate(&points, 2 * n);
  let coarse_again = evaluate(&points, n);

  assert_eq!(coarse.len(), n + 1);
  assert_eq!(fine.len(), 2 * n + 1);
  assert_eq!(coarse, coarse_again);

  // every coarse sample is also an even fine sample
  for (i, sample) in coarse.iter().enumerate() {
    let other = fine[2 * i];
    assert!((sample.x - other.x).abs() < 1e-9 && (sample.y - other.y).abs() < 1e-9);
  }
}

#[test]
fn idempotent() {
  let points = polygon();

  assert_eq!(evaluate(&points, 333), evaluate(&points, 333));
  assert_eq!(
    evaluate_with(Weighting::Standard, &points, 333),
    evaluate_with(Weighting::Standard, &points, 333)
  );
}

#[test]
fn two_points_endpoints() {
  let points = [p(0., 0.), p(10., 0.)];

  assert_eq!(evaluate(&points, 1), vec![p(10., 0.), p(0., 0.)]);
  assert_eq!(
    evaluate_with(Weighting::Standard, &points, 1),
    vec![p(0., 0.), p(10., 0.)]
  );
}

#[test]
fn endpoints_are_end_control_points() {
  let points = polygon();
  let mirrored = evaluate(&points, 64);
  let standard = evaluate_with(Weighting::Standard, &points, 64);

  assert_eq!(mirrored.first(), points.last());
  assert_eq!(mirrored.last(), points.first());
  assert_eq!(standard.first(), points.first());
  assert_eq!(standard.last(), points.last());
}

#[test]
fn two_points_is_a_line() {
  let a = p(-3., 1.5);
  let b = p(7., 9.);

  for &n in &[1, 3, 10, 999] {
    for s in evaluate(&[a, b], n) {
      // cross product of (b - a) and (s - a)
      let cross = (b.x - a.x) * (s.y - a.y) - (b.y - a.y) * (s.x - a.x);
      assert!(cross.abs() < 1e-9, "{:?} is off the line", s);

      // and the sample stays between both ends
      assert!(s.x >= a.x - 1e-9 && s.x <= b.x + 1e-9);
    }
  }
}

#[test]
fn cleared_store_has_no_curve() {
  let mut store = PointStore::new();

  for point in polygon() {
    store.append(point);
  }

  assert_eq!(evaluate(store.points(), 50).len(), 51);

  store.clear();
  assert!(evaluate(store.points(), 50).is_empty());
}
