use crate::core::data::viewport::Viewport;

const BASE_ITERATIONS: f64 = 100.0;
const ZOOM_ITERATION_SCALE: f64 = 50.0;

/// Max iterations for a frame: `floor(100 + 50 / span)` where `span` is the
/// viewport width.
///
/// Grows without a policy cap as the view narrows. The conversion saturates
/// at `u32::MAX`.
#[must_use]
pub fn iteration_budget(viewport: &Viewport) -> u32 {
    (BASE_ITERATIONS + ZOOM_ITERATION_SCALE / viewport.width()).floor() as u32
}
