use winit::event::MouseScrollDelta;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// Wheel up (away from the user) zooms in, wheel down zooms out.
#[must_use]
pub fn zoom_direction(delta: MouseScrollDelta) -> Option<ZoomDirection> {
    let vertical = match delta {
        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
        MouseScrollDelta::PixelDelta(position) => position.y,
    };

    if vertical > 0.0 {
        Some(ZoomDirection::In)
    } else if vertical < 0.0 {
        Some(ZoomDirection::Out)
    } else {
        None
    }
}
