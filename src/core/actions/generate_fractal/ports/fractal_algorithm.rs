use crate::core::data::point::Point;
use std::error::Error;

/// A per-pixel computation. Implementations must be pure in `pixel` so the
/// dispatchers can evaluate pixels in any order.
pub trait FractalAlgorithm {
    type Success;
    type Failure: Error;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure>;
}
