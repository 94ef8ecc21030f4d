//! Gige-Cam-Capture: configuration and acquisition for GenICam-style cameras
//!
//! This library configures an array of industrial cameras through their
//! feature-node trees (availability and access mode re-checked before every
//! touch), then runs one acquisition loop per device that pulls frames from
//! the device ring, converts them zero-copy into dense strided views, and
//! hands them to a caller-supplied sink.
//!
//! Hardware is reached only through the [`traits::CameraDevice`] contract,
//! enabling production vendor bindings and testing with the in-tree
//! [`mock::MockCamera`].

pub mod accessor;
pub mod acquisition;
pub mod buffer;
pub mod config;
pub mod diagnostics;
pub mod image;
pub mod mock;
pub mod names;
pub mod sequencer;
pub mod traits;

pub use acquisition::{
    acquire_one, run_acquisition, spawn_acquisition, AcquisitionHandle, DeviceState, FrameSink,
    StopToken, FRAME_WAIT,
};
pub use buffer::{FrameRing, PushOutcome};
pub use config::{DeviceConfig, ExposureSetting, OverflowPolicy, TriggerSource};
pub use image::{to_dense_image, DenseImage};
pub use sequencer::{apply_buffer_policy, configure, ConfigReport, ConfigStep, Degradation};
pub use traits::{
    AccessMode, CameraDevice, CameraError, CompletionStatus, FloatRange, IntRange, NodeTree,
    NodeValue, RawFrame, Result,
};
