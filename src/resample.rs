//! Arc-length-uniform resampling of pointer trajectories.
//!
//! Both the live stroke and every dictionary word's key-to-key path pass
//! through [`resample`], so trajectories of arbitrary original length and
//! point density become directly comparable sample by sample.

use crate::geometry::{self, Point};

/// Resample `path` to exactly `sample_count` points spaced uniformly by
/// arc length.
///
/// The first input point is always the first sample. Interior samples are
/// interpolated each time the walk accumulates `L / (sample_count - 1)` of
/// arc length, and the walk continues from the interpolated point so the
/// remainder of the segment is re-measured from there. If rounding leaves
/// the walk short of the final vertex, the output is padded with the last
/// input point until it reaches `sample_count`.
///
/// A single-point path, or one whose total arc length is zero, yields the
/// first point repeated `sample_count` times.
///
/// # Panics
///
/// Panics if `path` is empty or `sample_count` is zero. The capture layer
/// hands the resampler complete, non-empty strokes only.
pub fn resample(path: &[Point], sample_count: usize) -> Vec<Point> {
    assert!(!path.is_empty(), "resample requires at least one input point");
    assert!(sample_count > 0, "sample_count must be positive");

    if path.len() == 1 || sample_count == 1 {
        return vec![path[0]; sample_count];
    }
    let total = geometry::path_length(path);
    if total == 0.0 {
        // All points coincide; the interval below would divide by zero.
        return vec![path[0]; sample_count];
    }

    let interval = total / (sample_count - 1) as f64;
    let mut out = Vec::with_capacity(sample_count);
    out.push(path[0]);

    let mut last = path[0];
    let mut acc = 0.0;
    let mut next = 1;
    while next < path.len() && out.len() < sample_count {
        let dist = geometry::distance(last, path[next]);
        if acc + dist >= interval && dist > 0.0 {
            let ratio = (interval - acc) / dist;
            last = Point::new(
                last.x + ratio * (path[next].x - last.x),
                last.y + ratio * (path[next].y - last.y),
            );
            out.push(last);
            acc = 0.0;
        } else {
            acc += dist;
            last = path[next];
            next += 1;
        }
    }

    // Rounding can leave the walk just short of the final vertex.
    while out.len() < sample_count {
        out.push(path[path.len() - 1]);
    }
    out
}
