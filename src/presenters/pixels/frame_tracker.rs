use log::{error, warn};

use crate::controllers::interactive::events::render::RenderEvent;
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::input::gui::app::ports::presenter::PresentedFrame;

/// Decides which render events reach the screen.
///
/// Frames must be newer than the one shown and match the buffer size. An
/// error is kept until a newer frame replaces it.
#[derive(Debug)]
pub(crate) struct FrameTracker {
    image_size: ImageSize,
    presented: Option<PresentedFrame>,
    last_error_message: Option<String>,
}

impl FrameTracker {
    pub(crate) fn new(image_size: ImageSize) -> Self {
        Self {
            image_size,
            presented: None,
            last_error_message: None,
        }
    }

    pub(crate) fn presented(&self) -> Option<PresentedFrame> {
        self.presented
    }

    pub(crate) fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    fn last_generation(&self) -> u64 {
        self.presented.map_or(0, |frame| frame.generation)
    }

    /// Returns the pixel buffer to draw when `event` is accepted as a frame.
    pub(crate) fn accept(&mut self, event: RenderEvent) -> Option<PixelBuffer> {
        match event {
            RenderEvent::Frame(frame) => {
                if frame.generation <= self.last_generation() {
                    return None;
                }

                if frame.pixel_buffer.image_size() != self.image_size {
                    warn!(
                        "dropping frame {}: size {:?} does not match {:?}",
                        frame.generation,
                        frame.pixel_buffer.image_size(),
                        self.image_size
                    );
                    return None;
                }

                self.presented = Some(PresentedFrame {
                    generation: frame.generation,
                    viewport: frame.viewport,
                    max_iterations: frame.max_iterations,
                    render_duration: frame.render_duration,
                });
                self.last_error_message = None;

                Some(frame.pixel_buffer)
            }
            RenderEvent::Error(err) => {
                if err.generation >= self.last_generation() {
                    error!("render {} failed: {}", err.generation, err.message);
                    self.last_error_message = Some(err.message);
                }

                None
            }
        }
    }
}

/// Expands packed RGB into the opaque RGBA layout pixels expects.
pub(crate) fn copy_rgb_into_rgba(src: &[u8], dest: &mut [u8]) {
    for (src_pixel, dst_pixel) in src.chunks_exact(3).zip(dest.chunks_exact_mut(4)) {
        dst_pixel[..3].copy_from_slice(src_pixel);
        dst_pixel[3] = 255;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::interactive::data::frame_data::FrameData;
    use crate::controllers::interactive::errors::render::RenderError;
    use crate::core::data::viewport::Viewport;
    use std::time::Duration;

    fn frame_event(generation: u64, width: u32, height: u32) -> RenderEvent {
        let image_size = ImageSize::new(width, height).unwrap();
        let buffer = vec![generation as u8; (width * height * 3) as usize];

        RenderEvent::Frame(FrameData {
            generation,
            pixel_buffer: PixelBuffer::from_data(image_size, buffer).unwrap(),
            viewport: Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap(),
            max_iterations: 116,
            render_duration: Duration::from_millis(5),
        })
    }

    fn error_event(generation: u64) -> RenderEvent {
        RenderEvent::Error(RenderError {
            generation,
            message: format!("failure {}", generation),
        })
    }

    fn create_tracker() -> FrameTracker {
        FrameTracker::new(ImageSize::new(2, 2).unwrap())
    }

    #[test]
    fn test_first_frame_is_accepted() {
        let mut tracker = create_tracker();

        let buffer = tracker.accept(frame_event(1, 2, 2));

        assert!(buffer.is_some());
        let presented = tracker.presented().unwrap();
        assert_eq!(presented.generation, 1);
        assert_eq!(presented.max_iterations, 116);
    }

    #[test]
    fn test_older_frame_is_dropped() {
        let mut tracker = create_tracker();
        tracker.accept(frame_event(3, 2, 2));

        assert!(tracker.accept(frame_event(2, 2, 2)).is_none());
        assert!(tracker.accept(frame_event(3, 2, 2)).is_none());
        assert_eq!(tracker.presented().unwrap().generation, 3);
    }

    #[test]
    fn test_frame_with_other_size_is_dropped() {
        let mut tracker = create_tracker();

        assert!(tracker.accept(frame_event(1, 3, 2)).is_none());
        assert!(tracker.presented().is_none());
    }

    #[test]
    fn test_error_is_kept_until_newer_frame() {
        let mut tracker = create_tracker();
        tracker.accept(frame_event(1, 2, 2));

        assert!(tracker.accept(error_event(2)).is_none());
        assert_eq!(tracker.last_error_message(), Some("failure 2"));

        tracker.accept(frame_event(3, 2, 2));
        assert_eq!(tracker.last_error_message(), None);
    }

    #[test]
    fn test_stale_error_is_ignored() {
        let mut tracker = create_tracker();
        tracker.accept(frame_event(5, 2, 2));

        tracker.accept(error_event(4));

        assert_eq!(tracker.last_error_message(), None);
    }

    #[test]
    fn test_copy_rgb_into_rgba_sets_opaque_alpha() {
        let src = [1, 2, 3, 4, 5, 6];
        let mut dest = [0u8; 8];

        copy_rgb_into_rgba(&src, &mut dest);

        assert_eq!(dest, [1, 2, 3, 255, 4, 5, 6, 255]);
    }
}
