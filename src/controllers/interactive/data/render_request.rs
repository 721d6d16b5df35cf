use crate::core::data::image_size::ImageSize;
use crate::core::data::viewport::Viewport;

/// A snapshot of everything one render needs.
///
/// Holds a copy of the viewport, so the view can be zoomed again while this
/// request is still rendering. `PartialEq` lets callers skip resubmitting an
/// unchanged view.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderRequest {
    pub image_size: ImageSize,
    pub viewport: Viewport,
}
