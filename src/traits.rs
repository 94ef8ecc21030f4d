//! Core traits and types for GenICam-style camera abstraction.
//!
//! A camera exposes a tree of named, typed feature nodes whose access mode is
//! dynamic (firmware- and state-dependent), plus a stream of device-owned
//! frame buffers. Everything in this crate talks to hardware exclusively
//! through the [`CameraDevice`] and [`NodeTree`] contracts, so production
//! vendor bindings and the in-tree mock are interchangeable.

use std::time::Duration;
use thiserror::Error;

/// Dynamic access state of a feature node.
///
/// The mode can change between calls (e.g. geometry nodes lock while the
/// device is streaming), so callers must re-query it immediately before
/// every read or write instead of caching an earlier answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// The node does not exist on this device/firmware revision.
    NotPresent,
    /// The node can only be read.
    ReadOnly,
    /// The node can only be written (command nodes report this mode).
    WriteOnly,
    /// The node can be read and written.
    ReadWrite,
}

impl AccessMode {
    /// Whether the node exists at all.
    #[must_use]
    pub const fn present(self) -> bool {
        !matches!(self, Self::NotPresent)
    }

    /// Whether the node may be read in its current state.
    #[must_use]
    pub const fn readable(self) -> bool {
        matches!(self, Self::ReadOnly | Self::ReadWrite)
    }

    /// Whether the node may be written in its current state.
    #[must_use]
    pub const fn writable(self) -> bool {
        matches!(self, Self::WriteOnly | Self::ReadWrite)
    }
}

/// Value carried by a feature node, tagged with its category.
///
/// Enumeration values travel as symbolic entry names; the integer value a
/// transport layer associates with an entry never crosses this boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// Current entry of an enumeration node, by symbolic name.
    Enumeration(String),
    /// Integer node value.
    Integer(i64),
    /// Floating-point node value.
    Float(f64),
    /// Boolean node value.
    Boolean(bool),
    /// String node value.
    Text(String),
}

impl std::fmt::Display for NodeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enumeration(entry) => write!(f, "{entry}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Boolean(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value}"),
        }
    }
}

/// Reported range of an integer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntRange {
    /// Smallest accepted value.
    pub min: i64,
    /// Largest accepted value.
    pub max: i64,
    /// Step between accepted values. A zero increment (or zero max) marks a
    /// node that is not a true ranged control and must not be written.
    pub increment: i64,
}

/// Reported range of a floating-point node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatRange {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
}

impl FloatRange {
    /// Whether `value` lies inside the range, bounds included.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// Integrity classification the device assigns to a frame on arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionStatus {
    /// All payload data arrived.
    Complete,
    /// Transfer failed an integrity check; the code is the device's reason.
    Incomplete(u32),
}

/// Error type for camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Feature node absent on this device/firmware revision.
    #[error("feature node `{0}` is not available")]
    NodeUnavailable(String),
    /// Node present but its current access mode forbids reading.
    #[error("feature node `{0}` is not readable")]
    NodeNotReadable(String),
    /// Node present but its current access mode forbids writing.
    #[error("feature node `{0}` is not writable")]
    NodeNotWritable(String),
    /// Node holds a different value category than the caller expected.
    #[error("feature node `{node}` is not {expected}-valued")]
    TypeMismatch {
        /// Node name.
        node: String,
        /// Expected value category.
        expected: &'static str,
    },
    /// Requested value lies outside the device-reported range.
    #[error("value {value} for `{node}` is outside the device range [{min}, {max}]")]
    OutOfRange {
        /// Node name.
        node: String,
        /// Rejected value.
        value: f64,
        /// Device-reported minimum.
        min: f64,
        /// Device-reported maximum.
        max: f64,
    },
    /// Driver-level failure during any device call.
    #[error("device protocol error: {0}")]
    DeviceProtocol(String),
    /// Frame arrived but failed its integrity check.
    #[error("frame incomplete, device status code {0}")]
    IncompleteFrame(u32),
    /// Software trigger could not be executed.
    #[error("software trigger failed: {0}")]
    Trigger(String),
    /// No frame became available within the bounded wait.
    #[error("timed out waiting for a frame")]
    FrameTimeout,
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for camera operations.
pub type Result<T> = std::result::Result<T, CameraError>;

/// Raw, unvalidated operations on one of a device's feature-node trees.
///
/// Implementations perform the operation as the device would, including
/// device-side validation (range checks, unknown entries). They do NOT check
/// access modes; that layering lives in [`crate::accessor`], which consults
/// [`NodeTree::access_mode`] immediately before every call.
pub trait NodeTree {
    /// Current access mode of the named node; [`AccessMode::NotPresent`] if
    /// the device does not expose it.
    fn access_mode(&self, name: &str) -> AccessMode;

    /// Read the node's current value.
    fn read(&self, name: &str) -> Result<NodeValue>;

    /// Write a new value to the node.
    fn write(&self, name: &str, value: NodeValue) -> Result<()>;

    /// Execute a command node.
    fn execute(&self, name: &str) -> Result<()>;

    /// Reported range of an integer node.
    fn int_range(&self, name: &str) -> Result<IntRange>;

    /// Reported range of a floating-point node.
    fn float_range(&self, name: &str) -> Result<FloatRange>;

    /// Names of the features grouped under a category node.
    fn category(&self, name: &str) -> Result<Vec<String>>;
}

/// Handle to a frame slot owned by the device driver.
///
/// The backing memory stays valid exactly as long as the handle lives;
/// dropping the handle releases the slot back to the device ring. Holding
/// handles across loop iterations starves the ring and is a correctness bug,
/// not a tuning concern.
pub trait RawFrame {
    /// Logical image width in pixels.
    fn width(&self) -> u32;
    /// Logical image height in pixels.
    fn height(&self) -> u32;
    /// Extra columns of padding in the native layout.
    fn x_padding(&self) -> u32;
    /// Extra rows of padding in the native layout.
    fn y_padding(&self) -> u32;
    /// Channels per pixel.
    fn channels(&self) -> u32;
    /// Bytes per row including padding. Padding can make this differ from
    /// `cols * channels`, so it is never recomputed downstream.
    fn stride(&self) -> usize;
    /// Integrity status assigned on arrival.
    fn status(&self) -> CompletionStatus;
    /// Borrow the pixel data, padding included.
    fn data(&self) -> &[u8];
    /// Monotonic frame sequence number.
    fn frame_id(&self) -> u64;
}

/// Abstraction over one physical camera.
///
/// Mirrors the three node trees a GenICam transport exposes: the device's own
/// feature map, the stream (buffer policy) map, and the transport-layer
/// device map carrying identity information.
pub trait CameraDevice {
    /// Node tree implementation shared by all three maps.
    type Nodes: NodeTree;
    /// Frame handle type produced by [`CameraDevice::next_frame`].
    type Frame: RawFrame;

    /// The device feature node map (geometry, trigger, exposure, ...).
    fn device_nodes(&self) -> &Self::Nodes;

    /// The stream node map (buffer count and handling policy).
    fn stream_nodes(&self) -> &Self::Nodes;

    /// The transport-layer device map (serial number, device information).
    fn transport_nodes(&self) -> &Self::Nodes;

    /// Block until the next completed frame arrives or `timeout` elapses.
    ///
    /// Returns [`CameraError::FrameTimeout`] when nothing arrived in time so
    /// callers can re-check their stop token; any other error is a device
    /// failure. Must not be called before the device has been configured, or
    /// the underlying driver may hang.
    fn next_frame(&self, timeout: Duration) -> Result<Self::Frame>;
}
