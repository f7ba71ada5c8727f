//! Viewport-normalized bounding box.

use serde::{Deserialize, Serialize};

/// Rectangle in the unit square: `(x, y, w, h)`, top-left origin.
///
/// Components live in `[0, 1]`; `w`/`h` may be zero (a zero-area affordance
/// such as a collapsed disclosure target). Out-of-range values are not
/// rejected here, but downstream behavior is defined only within the unit
/// square. Serialized as a bare 4-element JSON array.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BBox01(pub [f64; 4]);

impl BBox01 {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self([x, y, w, h])
    }

    pub const fn x(&self) -> f64 {
        self.0[0]
    }

    pub const fn y(&self) -> f64 {
        self.0[1]
    }

    pub const fn w(&self) -> f64 {
        self.0[2]
    }

    pub const fn h(&self) -> f64 {
        self.0[3]
    }

    pub fn area(&self) -> f64 {
        self.w() * self.h()
    }
}
