use crate::controllers::generation::ports::frame_source::FrameSource;
use crate::core::data::image_buffer::ImageBuffer;
use crate::core::data::viewport::Viewport;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Instant;

/// Single-flight orchestrator for background frame generation.
///
/// Owned and driven by the display thread: navigation calls
/// [`request_redraw`](Self::request_redraw), and the display loop calls
/// [`poll`](Self::poll) once per iteration with the current viewport. A poll
/// with a pending request launches one worker thread when no job is in
/// flight; a request landing while a job runs is dropped, matching the
/// coalescing of rapid navigation into fewer frames — the caller has to
/// navigate again after completion to pick up the lost state.
///
/// Workers hand their outcome back over a channel. The next poll publishes a
/// finished frame by swapping the shared handle (readers holding the
/// previous frame are unaffected), or logs a failure and leaves the last
/// published frame in place. Either way the controller returns to idle and
/// the next request launches normally. Jobs are never cancelled; a launched
/// job always runs to completion.
pub struct GenerationController<S: FrameSource + 'static> {
    source: Arc<S>,
    needs_redraw: AtomicBool,
    in_flight: AtomicBool,
    redraw_requests: AtomicU64,
    launched_jobs: AtomicU64,
    dropped_requests: AtomicU64,
    completed_jobs: AtomicU64,
    latest_frame: Mutex<Option<Arc<ImageBuffer>>>,
    completion_tx: Sender<Result<ImageBuffer, String>>,
    completion_rx: Receiver<Result<ImageBuffer, String>>,
}

impl<S: FrameSource + 'static> GenerationController<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        let (completion_tx, completion_rx) = channel();

        Self {
            source: Arc::new(source),
            needs_redraw: AtomicBool::new(false),
            in_flight: AtomicBool::new(false),
            redraw_requests: AtomicU64::new(0),
            launched_jobs: AtomicU64::new(0),
            dropped_requests: AtomicU64::new(0),
            completed_jobs: AtomicU64::new(0),
            latest_frame: Mutex::new(None),
            completion_tx,
            completion_rx,
        }
    }

    /// Marks the displayed frame as stale. The next poll decides whether a
    /// job actually launches.
    pub fn request_redraw(&self) {
        self.redraw_requests.fetch_add(1, Ordering::AcqRel);
        self.needs_redraw.store(true, Ordering::Release);
    }

    /// Drives the controller one step: observes any finished job, then
    /// launches a new one for `viewport` if a redraw is pending and no job
    /// is in flight. Never blocks.
    pub fn poll(&self, viewport: Viewport) {
        self.drain_completions();

        if !self.needs_redraw.swap(false, Ordering::AcqRel) {
            return;
        }

        if self.in_flight.load(Ordering::Acquire) {
            self.dropped_requests.fetch_add(1, Ordering::AcqRel);
            return;
        }

        self.launch(viewport);
    }

    /// The most recently published frame, if any job has completed yet.
    #[must_use]
    pub fn latest_frame(&self) -> Option<Arc<ImageBuffer>> {
        self.latest_frame.lock().unwrap().clone()
    }

    #[must_use]
    pub fn is_generating(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn redraw_requests(&self) -> u64 {
        self.redraw_requests.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn launched_jobs(&self) -> u64 {
        self.launched_jobs.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn dropped_requests(&self) -> u64 {
        self.dropped_requests.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn completed_jobs(&self) -> u64 {
        self.completed_jobs.load(Ordering::Acquire)
    }

    fn launch(&self, viewport: Viewport) {
        self.in_flight.store(true, Ordering::Release);
        self.launched_jobs.fetch_add(1, Ordering::AcqRel);

        let source = Arc::clone(&self.source);
        let completion_tx = self.completion_tx.clone();

        thread::spawn(move || {
            let start = Instant::now();
            let outcome = source.generate(viewport).map_err(|err| err.to_string());

            if outcome.is_ok() {
                log::debug!("frame generated in {} ms", start.elapsed().as_millis());
            }

            // If the controller is gone the frame just drops with the channel.
            let _ = completion_tx.send(outcome);
        });
    }

    fn drain_completions(&self) {
        while let Ok(outcome) = self.completion_rx.try_recv() {
            match outcome {
                Ok(frame) => {
                    let mut guard = self.latest_frame.lock().unwrap();
                    *guard = Some(Arc::new(frame));
                }
                Err(message) => {
                    log::warn!("frame generation failed: {}", message);
                }
            }

            self.completed_jobs.fetch_add(1, Ordering::AcqRel);
            self.in_flight.store(false, Ordering::Release);
        }
    }
}
