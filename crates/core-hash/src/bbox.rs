//! Bounding-box utilities shared by hashing and diffing.

use core_grammar::BBox01;

fn round_to(v: f64, step: f64) -> f64 {
    // f64::round is half-away-from-zero, which is the rounding the stored
    // fingerprints were produced with.
    (v / step).round() * step
}

/// Round each component to the nearest multiple of `step`.
pub fn quantize(b: &BBox01, step: f64) -> BBox01 {
    BBox01([
        round_to(b.0[0], step),
        round_to(b.0[1], step),
        round_to(b.0[2], step),
        round_to(b.0[3], step),
    ])
}

/// Fixed-precision `x,y,w,h` rendering. This exact string enters the
/// shallow-node hash, so the precision is part of the digest format.
pub fn bbox_string(b: &BBox01, precision: usize) -> String {
    format!(
        "{:.p$},{:.p$},{:.p$},{:.p$}",
        b.0[0],
        b.0[1],
        b.0[2],
        b.0[3],
        p = precision
    )
}

/// Intersection-over-union of two boxes, in `[0, 1]`. Zero union (two
/// zero-area boxes) yields 0.
pub fn bbox_similarity(a: &BBox01, b: &BBox01) -> f64 {
    let ix = (a.x() + a.w()).min(b.x() + b.w()) - a.x().max(b.x());
    let iy = (a.y() + a.h()).min(b.y() + b.h()) - a.y().max(b.y());
    let inter = ix.max(0.0) * iy.max(0.0);
    let union = a.area() + b.area() - inter;
    if union == 0.0 { 0.0 } else { inter / union }
}
