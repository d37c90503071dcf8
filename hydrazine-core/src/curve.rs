//! Smooth path through route coordinates.
//!
//! Points are first pulled toward the straight chord from first to last point
//! (bundle straightening), then traced with a uniform cubic B-spline whose
//! ends are clamped so the curve starts and finishes exactly on the first and
//! last points.

use crate::geometry::Point;

/// Default bundle tension. `1.0` keeps the points as given, `0.0` collapses
/// them onto the chord.
pub const DEFAULT_BETA: f64 = 0.85;

/// Samples a bundled B-spline through `points`.
///
/// Returns the input unchanged when fewer than two points are given. Two
/// points produce a straight segment.
pub fn bundle(points: &[Point], beta: f64, samples_per_segment: usize) -> Vec<Point> {
    if points.len() < 2 {
        return points.to_vec();
    }
    let straightened = straighten(points, beta);
    basis(&straightened, samples_per_segment.max(1))
}

fn straighten(points: &[Point], beta: f64) -> Vec<Point> {
    let first = points[0];
    let last = points[points.len() - 1];
    let last_index = points.len() - 1;
    let n = last_index as f64;

    points
        .iter()
        .enumerate()
        .map(|(i, &p)| {
            // Ends lie on the chord already; keep them bit-exact.
            if i == 0 || i == last_index {
                return p;
            }
            let chord = first.lerp(last, i as f64 / n);
            Point::new(
                beta * p.x + (1.0 - beta) * chord.x,
                beta * p.y + (1.0 - beta) * chord.y,
            )
        })
        .collect()
}

fn basis(points: &[Point], samples: usize) -> Vec<Point> {
    let first = points[0];
    let last = points[points.len() - 1];

    // Doubling the end points clamps the spline onto them.
    let mut control = Vec::with_capacity(points.len() + 2);
    control.push(first);
    control.extend_from_slice(points);
    control.push(last);

    let mut out = Vec::with_capacity((control.len() - 3) * samples + 3);
    out.push(first);
    for window in control.windows(4) {
        for step in 0..samples {
            out.push(segment_point(window, step as f64 / samples as f64));
        }
    }
    if let Some(tail) = control.windows(4).last() {
        out.push(segment_point(tail, 1.0));
    }
    out.push(last);
    out
}

fn segment_point(c: &[Point], t: f64) -> Point {
    let t2 = t * t;
    let t3 = t2 * t;
    let b0 = (1.0 - t).powi(3) / 6.0;
    let b1 = (3.0 * t3 - 6.0 * t2 + 4.0) / 6.0;
    let b2 = (-3.0 * t3 + 3.0 * t2 + 3.0 * t + 1.0) / 6.0;
    let b3 = t3 / 6.0;
    Point::new(
        b0 * c[0].x + b1 * c[1].x + b2 * c[2].x + b3 * c[3].x,
        b0 * c[0].y + b1 * c[1].y + b2 * c[2].y + b3 * c[3].y,
    )
}
