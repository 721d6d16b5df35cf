use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::data::render_request::RenderRequest;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::events::render::RenderEvent;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::core::actions::render_frame::render_frame::{RenderFrameError, render_frame};
use crate::core::data::image_size::ImageSize;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::mandelbrot::iteration_budget::iteration_budget;
use log::{debug, error, info};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Condvar, Mutex, PoisonError};
use std::thread::{self, JoinHandle};
use std::time::Instant;

type FrameRenderer = fn(Viewport, ImageSize) -> Result<PixelBuffer, RenderFrameError>;

struct SharedState {
    generation: AtomicU64,
    last_completed_generation: AtomicU64,
    latest_request: Mutex<Option<(u64, RenderRequest)>>,
    wake: Condvar,
    shutdown: AtomicBool,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
    renderer: FrameRenderer,
}

/// Renders requests on a single background worker.
///
/// Only the newest pending request is kept. A render that has started always
/// runs to completion; if a newer request arrived meanwhile its result is
/// dropped instead of presented.
pub struct InteractiveController {
    shared: Arc<SharedState>,
    worker: Option<JoinHandle<()>>,
}

impl InteractiveController {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self::with_renderer(presenter_port, render_frame)
    }

    pub(crate) fn with_renderer(
        presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
        renderer: FrameRenderer,
    ) -> Self {
        let shared = Arc::new(SharedState {
            generation: AtomicU64::new(0),
            last_completed_generation: AtomicU64::new(0),
            latest_request: Mutex::new(None),
            wake: Condvar::new(),
            shutdown: AtomicBool::new(false),
            presenter_port,
            renderer,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Self {
            shared,
            worker: Some(worker),
        }
    }

    pub fn submit_request(&self, request: RenderRequest) -> u64 {
        let generation = self.shared.generation.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut guard = self
                .shared
                .latest_request
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            *guard = Some((generation, request));
        }

        self.shared.wake.notify_one();
        debug!("submitted render request generation {}", generation);

        generation
    }

    pub fn shutdown(&mut self) {
        self.shared.shutdown.store(true, Ordering::Release);
        self.shared.wake.notify_one();

        if let Some(handle) = self.worker.take() {
            if handle.join().is_err() {
                error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared
            .last_completed_generation
            .load(Ordering::Acquire)
    }

    fn next_request(shared: &SharedState) -> Option<(u64, RenderRequest)> {
        let mut guard = shared
            .latest_request
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        loop {
            if shared.shutdown.load(Ordering::Acquire) {
                return None;
            }

            if let Some(request) = guard.take() {
                return Some(request);
            }

            guard = shared
                .wake
                .wait(guard)
                .unwrap_or_else(PoisonError::into_inner);
        }
    }

    fn worker_loop(shared: &Arc<SharedState>) {
        while let Some((job_generation, request)) = Self::next_request(shared) {
            let start = Instant::now();
            let result = (shared.renderer)(request.viewport, request.image_size);
            let render_duration = start.elapsed();

            if job_generation != shared.generation.load(Ordering::Acquire) {
                debug!(
                    "dropping superseded frame generation {} after {:?}",
                    job_generation, render_duration
                );
                continue;
            }

            let event = match result {
                Ok(pixel_buffer) => {
                    let max_iterations = iteration_budget(&request.viewport);

                    info!(
                        "frame {} rendered in {:?} ({} iterations max)",
                        job_generation, render_duration, max_iterations
                    );

                    RenderEvent::Frame(FrameData {
                        generation: job_generation,
                        pixel_buffer,
                        viewport: request.viewport,
                        max_iterations,
                        render_duration,
                    })
                }
                Err(err) => {
                    error!("frame {} failed: {}", job_generation, err);

                    RenderEvent::Error(RenderError {
                        generation: job_generation,
                        message: err.to_string(),
                    })
                }
            };

            shared.presenter_port.present(event);
            shared
                .last_completed_generation
                .store(job_generation, Ordering::Release);
        }
    }
}

impl Drop for InteractiveController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fractals::mandelbrot::errors::MandelbrotError;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RenderEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RenderEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }
    }

    impl InteractiveControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RenderEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn wait_for_events(sink: &MockPresenterPort, timeout: Duration) -> Vec<RenderEvent> {
        let start = Instant::now();
        loop {
            let events = sink.take_events();
            if !events.is_empty() || start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn wait_for_generation(controller: &InteractiveController, generation: u64, timeout: Duration) {
        let start = Instant::now();
        while controller.last_completed_generation() < generation && start.elapsed() < timeout {
            thread::sleep(Duration::from_millis(10));
        }
    }

    fn failing_renderer(_: Viewport, _: ImageSize) -> Result<PixelBuffer, RenderFrameError> {
        Err(RenderFrameError::Algorithm(
            MandelbrotError::ZeroMaxIterationsError,
        ))
    }

    fn slow_renderer(
        viewport: Viewport,
        image_size: ImageSize,
    ) -> Result<PixelBuffer, RenderFrameError> {
        thread::sleep(Duration::from_millis(50));
        render_frame(viewport, image_size)
    }

    fn create_test_request(width: u32, height: u32) -> RenderRequest {
        RenderRequest {
            image_size: ImageSize::new(width, height).unwrap(),
            viewport: Viewport::new(-2.0, 1.0, -1.5, 1.5).unwrap(),
        }
    }

    fn create_controller(presenter_port: &Arc<MockPresenterPort>) -> InteractiveController {
        InteractiveController::new(
            Arc::clone(presenter_port) as Arc<dyn InteractiveControllerPresenterPort>
        )
    }

    fn extract_generation(events: &[RenderEvent]) -> u64 {
        events
            .iter()
            .find_map(|e| match e {
                RenderEvent::Frame(frame) => Some(frame.generation),
                RenderEvent::Error(err) => Some(err.generation),
            })
            .expect("Should have at least one event with generation")
    }

    #[test]
    fn test_submit_request_emits_frame() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);
        let request = create_test_request(8, 6);

        let generation = controller.submit_request(request);
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events.is_empty(), "expected a render event");

        let mut saw_frame = false;
        for event in events {
            match event {
                RenderEvent::Frame(frame) => {
                    assert_eq!(frame.generation, generation);
                    assert!(generation > 0, "generation should be non-zero");
                    assert_eq!(frame.pixel_buffer.image_size(), request.image_size);
                    assert_eq!(frame.pixel_buffer.buffer().len(), 8 * 6 * 3);
                    assert_eq!(frame.viewport, request.viewport);
                    assert_eq!(frame.max_iterations, 116);
                    saw_frame = true;
                }
                RenderEvent::Error(error) => {
                    panic!("unexpected render error: {}", error.message);
                }
            }
        }

        assert!(saw_frame, "expected a frame event");
        controller.shutdown();
    }

    #[test]
    fn test_frame_matches_direct_render() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);
        let request = create_test_request(16, 16);

        controller.submit_request(request);
        let events = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        let expected = render_frame(request.viewport, request.image_size).unwrap();

        match events.into_iter().next() {
            Some(RenderEvent::Frame(frame)) => assert_eq!(frame.pixel_buffer, expected),
            other => panic!("expected a frame, got {:?}", other),
        }

        controller.shutdown();
    }

    #[test]
    fn test_generation_ids_increment() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);
        let request = create_test_request(4, 4);

        controller.submit_request(request);
        let events_a = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_a.is_empty(), "expected events from request A");
        let gen_a = extract_generation(&events_a);

        controller.submit_request(request);
        let events_b = wait_for_events(presenter_port.as_ref(), Duration::from_secs(2));
        assert!(!events_b.is_empty(), "expected events from request B");
        let gen_b = extract_generation(&events_b);

        assert!(
            gen_b > gen_a,
            "Generation B ({}) should be greater than A ({})",
            gen_b,
            gen_a
        );

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_starts_at_zero() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);

        assert_eq!(controller.last_completed_generation(), 0);

        controller.shutdown();
    }

    #[test]
    fn test_last_completed_generation_updates_after_frame_completion() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);

        let submitted_generation = controller.submit_request(create_test_request(4, 4));
        wait_for_generation(&controller, submitted_generation, Duration::from_secs(2));
        let events = presenter_port.take_events();

        assert_eq!(extract_generation(&events), submitted_generation);
        assert_eq!(controller.last_completed_generation(), submitted_generation);

        controller.shutdown();
    }

    #[test]
    fn test_render_failure_emits_error_event() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = InteractiveController::with_renderer(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
            failing_renderer,
        );

        let submitted_generation = controller.submit_request(create_test_request(4, 4));
        wait_for_generation(&controller, submitted_generation, Duration::from_secs(2));
        let events = presenter_port.take_events();

        assert_eq!(events.len(), 1);
        match &events[0] {
            RenderEvent::Error(error) => {
                assert_eq!(error.generation, submitted_generation);
                assert_eq!(
                    error.message,
                    "mandelbrot setup error: Maximum iterations must be greater than zero"
                );
            }
            RenderEvent::Frame(_) => panic!("expected an error event"),
        }
        assert_eq!(controller.last_completed_generation(), submitted_generation);

        controller.shutdown();
    }

    #[test]
    fn test_rapid_requests_present_latest_and_never_a_stale_frame() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = InteractiveController::with_renderer(
            Arc::clone(&presenter_port) as Arc<dyn InteractiveControllerPresenterPort>,
            slow_renderer,
        );
        let request = create_test_request(4, 4);

        let mut last_gen = 0;
        for _ in 0..5 {
            last_gen = controller.submit_request(request);
        }

        wait_for_generation(&controller, last_gen, Duration::from_secs(5));
        let events = presenter_port.take_events();
        let generations: Vec<u64> = events
            .iter()
            .map(|e| match e {
                RenderEvent::Frame(frame) => frame.generation,
                RenderEvent::Error(err) => panic!("unexpected render error: {}", err.message),
            })
            .collect();

        assert_eq!(generations.last(), Some(&last_gen));
        assert!(
            generations.windows(2).all(|pair| pair[0] < pair[1]),
            "presented generations must increase: {:?}",
            generations
        );

        controller.shutdown();
    }

    #[test]
    fn test_shutdown_is_idempotent() {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let mut controller = create_controller(&presenter_port);

        controller.shutdown();
        controller.shutdown();

        assert!(presenter_port.take_events().is_empty());
    }
}
