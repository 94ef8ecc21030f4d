//! Per-device acquisition loop.
//!
//! One worker thread per device pulls completed frames, converts them
//! zero-copy and hands them to a caller-supplied sink. Configuration for a
//! device happens-before its loop starts and is never repeated while the
//! loop runs; across devices the loops share nothing.
//!
//! Shutdown is cooperative: the frame request uses a bounded wait so a stop
//! token flipped during a block is observed within [`FRAME_WAIT`], and any
//! frame pulled after the stop request is still released before the thread
//! exits.

use crate::accessor;
use crate::config::{DeviceConfig, TriggerSource};
use crate::image::{to_dense_image, DenseImage};
use crate::names;
use crate::traits::{CameraDevice, CameraError, CompletionStatus, RawFrame, Result};
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{error, info, warn};

/// Bound on each frame wait so stop requests are observed promptly.
pub const FRAME_WAIT: Duration = Duration::from_millis(250);

/// Downstream consumer of converted frames.
///
/// The view borrows device-owned memory that is invalidated when the frame
/// handle is released right after the call, so implementations must copy
/// whatever they need to keep.
pub trait FrameSink {
    /// Called once per completed, integrity-checked frame.
    fn on_frame(&mut self, image: &DenseImage<'_>);
}

/// Cooperative stop flag shared between a controller and one worker.
#[derive(Debug, Clone, Default)]
pub struct StopToken(Arc<AtomicBool>);

impl StopToken {
    /// Create an un-triggered token.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the worker to stop at its next iteration boundary.
    pub fn request_stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Lifecycle of one device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceState {
    /// No successful configuration run yet.
    Unconfigured,
    /// Configured; acquisition not started.
    Configured,
    /// Worker loop running.
    Acquiring,
    /// Worker exited, on request or on device error.
    Stopped,
}

const STATE_UNCONFIGURED: u8 = 0;
const STATE_CONFIGURED: u8 = 1;
const STATE_ACQUIRING: u8 = 2;
const STATE_STOPPED: u8 = 3;

fn state_from(raw: u8) -> DeviceState {
    match raw {
        STATE_UNCONFIGURED => DeviceState::Unconfigured,
        STATE_CONFIGURED => DeviceState::Configured,
        STATE_ACQUIRING => DeviceState::Acquiring,
        _ => DeviceState::Stopped,
    }
}

/// Perform one acquisition iteration: trigger if software-sourced, then wait
/// for the next frame.
///
/// `Ok(None)` means the bounded wait elapsed without a frame; callers re-check
/// their stop token and try again. A failed software trigger surfaces as
/// [`CameraError::Trigger`] and skips the frame request entirely.
pub fn acquire_one<C: CameraDevice>(
    camera: &C,
    trigger: TriggerSource,
    timeout: Duration,
) -> Result<Option<C::Frame>> {
    if matches!(trigger, TriggerSource::Software) {
        if let Err(err) = accessor::try_execute(camera.device_nodes(), names::TRIGGER_SOFTWARE) {
            return Err(CameraError::Trigger(err.to_string()));
        }
    }
    // Hardware-sourced capture needs no action here; the line gates arrival.
    match camera.next_frame(timeout) {
        Ok(frame) => Ok(Some(frame)),
        Err(CameraError::FrameTimeout) => Ok(None),
        Err(err) => Err(err),
    }
}

/// Run the acquisition loop until a stop request or an unrecoverable device
/// error. Returns the number of frames delivered to the sink.
///
/// Per-frame failures (incomplete frame, trigger failure) are reported and
/// the loop continues; only device protocol errors end the session.
pub fn run_acquisition<C, S>(
    camera: &C,
    cfg: &DeviceConfig,
    sink: &mut S,
    stop: &StopToken,
) -> Result<u64>
where
    C: CameraDevice,
    S: FrameSink,
{
    let mut delivered = 0u64;
    while !stop.is_stopped() {
        match acquire_one(camera, cfg.trigger_source, FRAME_WAIT) {
            Ok(Some(frame)) => {
                match frame.status() {
                    CompletionStatus::Complete => {
                        let image = to_dense_image(&frame);
                        sink.on_frame(&image);
                        delivered += 1;
                    }
                    CompletionStatus::Incomplete(code) => {
                        warn!(
                            index = cfg.index,
                            frame = frame.frame_id(),
                            code,
                            "incomplete frame discarded"
                        );
                    }
                }
                // Dropping the handle releases the buffer slot before the
                // next request, stop requests included.
                drop(frame);
            }
            Ok(None) => {}
            Err(CameraError::Trigger(reason)) => {
                warn!(index = cfg.index, %reason, "software trigger failed, skipping iteration");
            }
            Err(err) => {
                error!(index = cfg.index, %err, "device error, stopping acquisition");
                return Err(err);
            }
        }
    }
    info!(index = cfg.index, delivered, "acquisition stopped");
    Ok(delivered)
}

/// Control handle for a spawned acquisition worker.
pub struct AcquisitionHandle {
    stop: StopToken,
    state: Arc<AtomicU8>,
    thread: JoinHandle<Result<u64>>,
}

impl AcquisitionHandle {
    /// Current lifecycle state of the device.
    #[must_use]
    pub fn state(&self) -> DeviceState {
        state_from(self.state.load(Ordering::Acquire))
    }

    /// Clone of the worker's stop token.
    #[must_use]
    pub fn stop_token(&self) -> StopToken {
        self.stop.clone()
    }

    /// Ask the worker to stop.
    pub fn request_stop(&self) {
        self.stop.request_stop();
    }

    /// Wait for the worker to exit and return its delivery count.
    pub fn join(self) -> Result<u64> {
        self.thread
            .join()
            .map_err(|_| CameraError::DeviceProtocol("acquisition worker panicked".to_owned()))?
    }
}

/// Launch one acquisition worker for an already-configured device.
///
/// The single thread-launch shape for every platform: the device, the
/// by-value configuration (the sole source of truth inside the worker), a
/// sink, and a stop token.
pub fn spawn_acquisition<C, S>(
    camera: C,
    cfg: DeviceConfig,
    mut sink: S,
    stop: StopToken,
) -> Result<AcquisitionHandle>
where
    C: CameraDevice + Send + 'static,
    S: FrameSink + Send + 'static,
{
    let state = Arc::new(AtomicU8::new(STATE_CONFIGURED));
    let worker_state = Arc::clone(&state);
    let worker_stop = stop.clone();
    let thread = thread::Builder::new()
        .name(format!("acquire-{}", cfg.index))
        .spawn(move || {
            worker_state.store(STATE_ACQUIRING, Ordering::Release);
            let result = run_acquisition(&camera, &cfg, &mut sink, &worker_stop);
            worker_state.store(STATE_STOPPED, Ordering::Release);
            result
        })?;
    Ok(AcquisitionHandle {
        stop,
        state,
        thread,
    })
}
