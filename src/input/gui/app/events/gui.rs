/// Custom user events for the GUI event loop.
///
/// Lets the render worker wake the UI thread once a frame is ready.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A render event may be waiting in the presenter adapter.
    ///
    /// The handler only schedules a redraw; the presenter decides whether the
    /// pending event is still current.
    Wake,
}
