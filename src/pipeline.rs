use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};

use crate::detection::contours::BoundingRect;
use crate::detection::{FrameOutcome, TargetDetector};
use crate::estimate::SharedEstimate;

/// Errors from the background frame worker.
#[derive(thiserror::Error, Debug)]
pub enum WorkerError {
    #[error("frame worker is no longer running")]
    Disconnected,
    #[error("frame worker panicked")]
    Panicked,
    #[error("failed to start frame worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Settings for the worker thread.
#[derive(Clone, Debug)]
pub struct FrameContext {
    /// Thread name, shows up in panics and debuggers.
    pub name: String,
    /// Log every frame outcome at info level instead of debug.
    pub verbose: bool,
}

impl Default for FrameContext {
    fn default() -> Self {
        Self {
            name: "vision-frames".to_string(),
            verbose: false,
        }
    }
}

/// Outcome of one submitted frame, numbered from 1 in submission order.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub frame: u64,
    pub outcome: FrameOutcome,
}

/// Counters accumulated by the worker over its lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub frames: u64,
    pub published: u64,
    pub insufficient_candidates: u64,
    pub no_qualifying_pair: u64,
    pub degenerate_geometry: u64,
}

impl FrameStats {
    fn record(&mut self, outcome: &FrameOutcome) {
        self.frames += 1;
        match outcome {
            FrameOutcome::Published(_) => self.published += 1,
            FrameOutcome::InsufficientCandidates { .. } => self.insufficient_candidates += 1,
            FrameOutcome::NoQualifyingPair { .. } => self.no_qualifying_pair += 1,
            FrameOutcome::DegenerateGeometry => self.degenerate_geometry += 1,
        }
    }
}

/// Dedicated producer thread: runs the detector on each submitted frame,
/// one at a time, and publishes into the shared estimate.
///
/// Submitting a frame is the frame-ready notification. Frames queue up in
/// order and are never processed concurrently.
pub struct FrameWorker<C> {
    sender: Option<Sender<Vec<C>>>,
    handle: Option<JoinHandle<FrameStats>>,
}

impl<C: BoundingRect + Send + 'static> FrameWorker<C> {
    pub fn spawn(
        detector: TargetDetector,
        estimate: SharedEstimate,
        context: FrameContext,
    ) -> Result<Self, WorkerError> {
        Self::start(detector, estimate, context, None)
    }

    /// Like [`FrameWorker::spawn`], also returning a channel that receives
    /// one report per processed frame.
    pub fn spawn_reporting(
        detector: TargetDetector,
        estimate: SharedEstimate,
        context: FrameContext,
    ) -> Result<(Self, Receiver<FrameReport>), WorkerError> {
        let (report_tx, report_rx) = mpsc::channel();
        let worker = Self::start(detector, estimate, context, Some(report_tx))?;
        Ok((worker, report_rx))
    }

    fn start(
        detector: TargetDetector,
        estimate: SharedEstimate,
        context: FrameContext,
        reports: Option<Sender<FrameReport>>,
    ) -> Result<Self, WorkerError> {
        let (sender, receiver) = mpsc::channel::<Vec<C>>();
        let handle = thread::Builder::new()
            .name(context.name.clone())
            .spawn(move || run_frames(detector, estimate, context, receiver, reports))?;

        Ok(Self {
            sender: Some(sender),
            handle: Some(handle),
        })
    }

    /// Queue a frame's contours for processing.
    pub fn submit(&self, frame: Vec<C>) -> Result<(), WorkerError> {
        let sender = self.sender.as_ref().ok_or(WorkerError::Disconnected)?;
        sender.send(frame).map_err(|_| WorkerError::Disconnected)
    }

    /// Stop accepting frames, finish the queued ones and return the counters.
    pub fn shutdown(mut self) -> Result<FrameStats, WorkerError> {
        drop(self.sender.take());
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| WorkerError::Panicked),
            None => Ok(FrameStats::default()),
        }
    }
}

impl<C> Drop for FrameWorker<C> {
    fn drop(&mut self) {
        drop(self.sender.take());
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                log::error!("frame worker panicked before it was dropped");
            }
        }
    }
}

fn run_frames<C: BoundingRect>(
    detector: TargetDetector,
    estimate: SharedEstimate,
    context: FrameContext,
    receiver: Receiver<Vec<C>>,
    reports: Option<Sender<FrameReport>>,
) -> FrameStats {
    let mut stats = FrameStats::default();

    // Ends when every sender is gone.
    for frame in receiver {
        let outcome = detector.process_frame(&frame, &estimate);
        stats.record(&outcome);

        if context.verbose {
            log::info!("[{}] frame {}: {:?}", context.name, stats.frames, outcome);
        } else {
            log::debug!("[{}] frame {}: {:?}", context.name, stats.frames, outcome);
        }

        if let Some(reports) = &reports {
            // Nobody listening any more is fine.
            let _ = reports.send(FrameReport {
                frame: stats.frames,
                outcome,
            });
        }
    }

    log::debug!("[{}] stopped after {} frames", context.name, stats.frames);
    stats
}
