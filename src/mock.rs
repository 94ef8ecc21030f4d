//! Mock camera implementation for testing without hardware.
//!
//! Models the observable behavior of a GigE-Vision device: a scriptable
//! feature-node tree per map (device, stream, transport), offset ranges that
//! shrink as the frame size grows, a buffer count the device clamps to its
//! own maximum, and a frame ring rebuilt from whatever the stream nodes were
//! configured to. Tests drive frames in with the pump helpers and observe
//! writes, trigger executions, drops and releases through the counters.

use crate::buffer::{FrameRing, PushOutcome};
use crate::config::OverflowPolicy;
use crate::names;
use crate::traits::{
    AccessMode, CameraDevice, CameraError, CompletionStatus, FloatRange, IntRange, NodeTree,
    NodeValue, RawFrame, Result,
};
use parking_lot::{Mutex, RwLock};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Sensor dimensions of the mock device.
pub const SENSOR_WIDTH: i64 = 2048;
/// Sensor dimensions of the mock device.
pub const SENSOR_HEIGHT: i64 = 2048;

const CHANNELS: u32 = 3;
const DEFAULT_SERIAL: &str = "23296142";

/// One committed node write, in commit order.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    /// Node that was written.
    pub node: String,
    /// Value the device committed (after any device-side clamp).
    pub value: NodeValue,
}

/// A single scriptable feature node.
#[derive(Debug, Clone)]
pub struct MockNode {
    name: String,
    value: NodeValue,
    access: AccessMode,
    int_range: Option<IntRange>,
    float_range: Option<FloatRange>,
    entries: Option<Vec<String>>,
    features: Option<Vec<String>>,
    clamp_writes: bool,
    command: bool,
}

impl MockNode {
    fn base(name: &str, value: NodeValue) -> Self {
        Self {
            name: name.to_owned(),
            value,
            access: AccessMode::ReadWrite,
            int_range: None,
            float_range: None,
            entries: None,
            features: None,
            clamp_writes: false,
            command: false,
        }
    }

    /// Integer node with a reported range.
    #[must_use]
    pub fn integer(name: &str, value: i64, min: i64, max: i64, increment: i64) -> Self {
        let mut node = Self::base(name, NodeValue::Integer(value));
        node.int_range = Some(IntRange {
            min,
            max,
            increment,
        });
        node
    }

    /// Floating-point node with a reported range.
    #[must_use]
    pub fn float(name: &str, value: f64, min: f64, max: f64) -> Self {
        let mut node = Self::base(name, NodeValue::Float(value));
        node.float_range = Some(FloatRange { min, max });
        node
    }

    /// Boolean node.
    #[must_use]
    pub fn boolean(name: &str, value: bool) -> Self {
        Self::base(name, NodeValue::Boolean(value))
    }

    /// String node.
    #[must_use]
    pub fn text(name: &str, value: &str) -> Self {
        Self::base(name, NodeValue::Text(value.to_owned()))
    }

    /// Enumeration node with its selectable entries.
    #[must_use]
    pub fn enumeration(name: &str, entries: &[&str], current: &str) -> Self {
        let mut node = Self::base(name, NodeValue::Enumeration(current.to_owned()));
        node.entries = Some(entries.iter().map(|&e| e.to_owned()).collect());
        node
    }

    /// Command node (write-only executable).
    #[must_use]
    pub fn command(name: &str) -> Self {
        let mut node = Self::base(name, NodeValue::Boolean(false));
        node.access = AccessMode::WriteOnly;
        node.command = true;
        node
    }

    /// Category node grouping other features.
    #[must_use]
    pub fn category(name: &str, features: &[&str]) -> Self {
        let mut node = Self::base(name, NodeValue::Text(name.to_owned()));
        node.access = AccessMode::ReadOnly;
        node.features = Some(features.iter().map(|&f| f.to_owned()).collect());
        node
    }

    /// Override the node's access mode.
    #[must_use]
    pub fn with_access(mut self, access: AccessMode) -> Self {
        self.access = access;
        self
    }

    /// Make the device clamp out-of-range writes instead of rejecting them.
    #[must_use]
    pub fn with_clamped_writes(mut self) -> Self {
        self.clamp_writes = true;
        self
    }

    fn expected_category(&self) -> &'static str {
        match self.value {
            NodeValue::Enumeration(_) => "enumeration",
            NodeValue::Integer(_) => "integer",
            NodeValue::Float(_) => "float",
            NodeValue::Boolean(_) => "boolean",
            NodeValue::Text(_) => "string",
        }
    }
}

fn mismatch(name: &str, expected: &'static str) -> CameraError {
    CameraError::TypeMismatch {
        node: name.to_owned(),
        expected,
    }
}

struct NodesInner {
    nodes: BTreeMap<String, MockNode>,
    log: Vec<WriteRecord>,
    executed: Vec<String>,
    /// Sensor dimensions; when set, committing a width/height write
    /// re-derives the matching offset range (sensor size minus frame size).
    sensor: Option<(i64, i64)>,
}

/// One scriptable node map.
pub struct MockNodes {
    inner: Mutex<NodesInner>,
}

impl Default for MockNodes {
    fn default() -> Self {
        Self::new()
    }
}

impl MockNodes {
    /// Create an empty node map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(NodesInner {
                nodes: BTreeMap::new(),
                log: Vec::new(),
                executed: Vec::new(),
                sensor: None,
            }),
        }
    }

    /// Add or replace a node.
    pub fn insert(&self, node: MockNode) {
        let mut inner = self.inner.lock();
        inner.nodes.insert(node.name.clone(), node);
    }

    /// Remove a node, simulating a device/firmware that lacks it.
    pub fn remove(&self, name: &str) {
        self.inner.lock().nodes.remove(name);
    }

    /// Override a node's access mode (no-op for absent nodes).
    pub fn set_access(&self, name: &str, access: AccessMode) {
        if let Some(node) = self.inner.lock().nodes.get_mut(name) {
            node.access = access;
        }
    }

    /// Override a node's reported integer range.
    pub fn set_int_range(&self, name: &str, range: IntRange) {
        if let Some(node) = self.inner.lock().nodes.get_mut(name) {
            node.int_range = Some(range);
        }
    }

    /// Override a node's reported float range.
    pub fn set_float_range(&self, name: &str, range: FloatRange) {
        if let Some(node) = self.inner.lock().nodes.get_mut(name) {
            node.float_range = Some(range);
        }
    }

    /// Current value of a node regardless of access mode, for assertions.
    #[must_use]
    pub fn current_value(&self, name: &str) -> Option<NodeValue> {
        self.inner.lock().nodes.get(name).map(|node| node.value.clone())
    }

    /// Every committed write so far, in order.
    #[must_use]
    pub fn write_log(&self) -> Vec<WriteRecord> {
        self.inner.lock().log.clone()
    }

    /// How many times a command node was executed.
    #[must_use]
    pub fn executed_count(&self, name: &str) -> u64 {
        let inner = self.inner.lock();
        u64::try_from(inner.executed.iter().filter(|n| n.as_str() == name).count())
            .unwrap_or(u64::MAX)
    }

    fn set_sensor(&self, width: i64, height: i64) {
        self.inner.lock().sensor = Some((width, height));
    }

    fn int_value(&self, name: &str) -> Option<i64> {
        match self.current_value(name) {
            Some(NodeValue::Integer(value)) => Some(value),
            _ => None,
        }
    }

    fn enum_value(&self, name: &str) -> Option<String> {
        match self.current_value(name) {
            Some(NodeValue::Enumeration(entry)) => Some(entry),
            _ => None,
        }
    }
}

impl NodeTree for MockNodes {
    fn access_mode(&self, name: &str) -> AccessMode {
        self.inner
            .lock()
            .nodes
            .get(name)
            .map_or(AccessMode::NotPresent, |node| node.access)
    }

    fn read(&self, name: &str) -> Result<NodeValue> {
        self.inner
            .lock()
            .nodes
            .get(name)
            .map(|node| node.value.clone())
            .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))
    }

    fn write(&self, name: &str, value: NodeValue) -> Result<()> {
        let mut inner = self.inner.lock();
        let sensor = inner.sensor;

        let committed = {
            let node = inner
                .nodes
                .get_mut(name)
                .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))?;
            if node.command {
                return Err(CameraError::DeviceProtocol(format!(
                    "`{name}` is a command node"
                )));
            }
            match value {
                NodeValue::Enumeration(entry) => {
                    if !matches!(node.value, NodeValue::Enumeration(_)) {
                        return Err(mismatch(name, node.expected_category()));
                    }
                    let known = node
                        .entries
                        .as_deref()
                        .is_some_and(|entries| entries.iter().any(|e| *e == entry));
                    if !known {
                        return Err(CameraError::DeviceProtocol(format!(
                            "`{name}` has no entry `{entry}`"
                        )));
                    }
                    node.value = NodeValue::Enumeration(entry);
                }
                NodeValue::Integer(requested) => {
                    if !matches!(node.value, NodeValue::Integer(_)) {
                        return Err(mismatch(name, node.expected_category()));
                    }
                    let mut applied = requested;
                    if let Some(range) = node.int_range {
                        if node.clamp_writes {
                            applied = requested.clamp(range.min, range.max);
                        } else if requested < range.min || requested > range.max {
                            #[allow(clippy::cast_precision_loss)]
                            let (value, min, max) =
                                (requested as f64, range.min as f64, range.max as f64);
                            return Err(CameraError::OutOfRange {
                                node: name.to_owned(),
                                value,
                                min,
                                max,
                            });
                        }
                    }
                    node.value = NodeValue::Integer(applied);
                }
                NodeValue::Float(requested) => {
                    if !matches!(node.value, NodeValue::Float(_)) {
                        return Err(mismatch(name, node.expected_category()));
                    }
                    if let Some(range) = node.float_range {
                        if !range.contains(requested) {
                            return Err(CameraError::OutOfRange {
                                node: name.to_owned(),
                                value: requested,
                                min: range.min,
                                max: range.max,
                            });
                        }
                    }
                    node.value = NodeValue::Float(requested);
                }
                NodeValue::Boolean(requested) => {
                    if !matches!(node.value, NodeValue::Boolean(_)) {
                        return Err(mismatch(name, node.expected_category()));
                    }
                    node.value = NodeValue::Boolean(requested);
                }
                NodeValue::Text(requested) => {
                    if !matches!(node.value, NodeValue::Text(_)) {
                        return Err(mismatch(name, node.expected_category()));
                    }
                    node.value = NodeValue::Text(requested);
                }
            }
            node.value.clone()
        };

        inner.log.push(WriteRecord {
            node: name.to_owned(),
            value: committed.clone(),
        });

        // Offset headroom shrinks as the frame grows; re-derive it on every
        // committed width/height write, exactly as the device would.
        if let (Some((sensor_w, sensor_h)), NodeValue::Integer(applied)) = (sensor, &committed) {
            let coupled = match name {
                names::WIDTH => Some((names::OFFSET_X, sensor_w - applied)),
                names::HEIGHT => Some((names::OFFSET_Y, sensor_h - applied)),
                _ => None,
            };
            if let Some((offset_name, headroom)) = coupled {
                if let Some(offset) = inner.nodes.get_mut(offset_name) {
                    if let Some(range) = &mut offset.int_range {
                        range.max = headroom.max(0);
                    }
                }
            }
        }
        Ok(())
    }

    fn execute(&self, name: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        let node = inner
            .nodes
            .get(name)
            .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))?;
        if !node.command {
            return Err(CameraError::DeviceProtocol(format!(
                "`{name}` is not a command node"
            )));
        }
        inner.executed.push(name.to_owned());
        Ok(())
    }

    fn int_range(&self, name: &str) -> Result<IntRange> {
        let inner = self.inner.lock();
        let node = inner
            .nodes
            .get(name)
            .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))?;
        node.int_range.ok_or(CameraError::TypeMismatch {
            node: name.to_owned(),
            expected: "integer",
        })
    }

    fn float_range(&self, name: &str) -> Result<FloatRange> {
        let inner = self.inner.lock();
        let node = inner
            .nodes
            .get(name)
            .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))?;
        node.float_range.ok_or(CameraError::TypeMismatch {
            node: name.to_owned(),
            expected: "float",
        })
    }

    fn category(&self, name: &str) -> Result<Vec<String>> {
        let inner = self.inner.lock();
        let node = inner
            .nodes
            .get(name)
            .ok_or_else(|| CameraError::NodeUnavailable(name.to_owned()))?;
        node.features.clone().ok_or(CameraError::TypeMismatch {
            node: name.to_owned(),
            expected: "category",
        })
    }
}

/// Outcome of pumping a frame into the mock device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpOutcome {
    /// Frame stored in a free ring slot.
    Stored,
    /// Ring was full; the oldest frame was evicted (KeepNewest).
    DroppedOldest,
    /// Ring was full and the policy queues strictly; nothing stored.
    Rejected,
    /// The stream is closed.
    Closed,
}

#[derive(Debug)]
struct FramePayload {
    id: u64,
    width: u32,
    height: u32,
    x_padding: u32,
    y_padding: u32,
    stride: usize,
    status: CompletionStatus,
    data: Vec<u8>,
}

/// Frame handle produced by [`MockCamera::next_frame`]; dropping it releases
/// the slot and bumps the release counter.
#[derive(Debug)]
pub struct MockFrame {
    payload: FramePayload,
    shared: Arc<MockShared>,
}

impl RawFrame for MockFrame {
    fn width(&self) -> u32 {
        self.payload.width
    }
    fn height(&self) -> u32 {
        self.payload.height
    }
    fn x_padding(&self) -> u32 {
        self.payload.x_padding
    }
    fn y_padding(&self) -> u32 {
        self.payload.y_padding
    }
    fn channels(&self) -> u32 {
        CHANNELS
    }
    fn stride(&self) -> usize {
        self.payload.stride
    }
    fn status(&self) -> CompletionStatus {
        self.payload.status
    }
    fn data(&self) -> &[u8] {
        &self.payload.data
    }
    fn frame_id(&self) -> u64 {
        self.payload.id
    }
}

impl Drop for MockFrame {
    fn drop(&mut self) {
        self.shared.released.fetch_add(1, Ordering::AcqRel);
    }
}

struct MockShared {
    device: MockNodes,
    stream: MockNodes,
    transport: MockNodes,
    ring: RwLock<Arc<FrameRing<FramePayload>>>,
    dropped_carry: AtomicU64,
    next_frame_id: AtomicU64,
    taken: AtomicU64,
    released: AtomicU64,
    x_padding: AtomicU32,
    y_padding: AtomicU32,
}

impl std::fmt::Debug for MockShared {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockShared").finish_non_exhaustive()
    }
}

impl MockShared {
    /// The ring matching the currently configured stream nodes, rebuilding
    /// it when the configured depth or policy changed.
    fn current_ring(&self) -> Arc<FrameRing<FramePayload>> {
        let depth = self
            .stream
            .int_value(names::STREAM_BUFFER_COUNT_MANUAL)
            .and_then(|value| usize::try_from(value).ok())
            .unwrap_or(1)
            .max(1);
        let policy = match self.stream.enum_value(names::STREAM_BUFFER_HANDLING_MODE) {
            Some(entry) if entry == "NewestOnly" => OverflowPolicy::KeepNewest,
            _ => OverflowPolicy::QueueAll,
        };

        let mut guard = self.ring.write();
        if guard.depth() != depth || guard.policy() != policy {
            self.dropped_carry.fetch_add(guard.dropped(), Ordering::AcqRel);
            *guard = Arc::new(FrameRing::new(depth, policy));
        }
        Arc::clone(&guard)
    }
}

/// In-memory camera honoring the full device contract.
#[derive(Debug, Clone)]
pub struct MockCamera {
    shared: Arc<MockShared>,
}

impl Default for MockCamera {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCamera {
    /// Create a mock device with the default node tree: full-sensor frame
    /// size (so offsets have zero headroom until the frame shrinks), trigger
    /// off, automatic exposure, automatic buffer counting.
    #[must_use]
    pub fn new() -> Self {
        let device = MockNodes::new();
        device.set_sensor(SENSOR_WIDTH, SENSOR_HEIGHT);
        device.insert(MockNode::enumeration(
            names::ACQUISITION_MODE,
            &["Continuous", "SingleFrame", "MultiFrame"],
            "SingleFrame",
        ));
        device.insert(MockNode::enumeration(
            names::PIXEL_FORMAT,
            &["RGB8", "BayerRG8", "Mono8"],
            "BayerRG8",
        ));
        device.insert(MockNode::boolean(names::ACQUISITION_FRAME_RATE_ENABLE, false));
        device.insert(MockNode::float(names::ACQUISITION_FRAME_RATE, 30.0, 1.0, 120.0));
        device.insert(MockNode::integer(names::WIDTH, SENSOR_WIDTH, 32, SENSOR_WIDTH, 32));
        device.insert(MockNode::integer(names::HEIGHT, SENSOR_HEIGHT, 4, SENSOR_HEIGHT, 4));
        device.insert(MockNode::integer(names::OFFSET_X, 0, 0, 0, 2));
        device.insert(MockNode::integer(names::OFFSET_Y, 0, 0, 0, 2));
        device.insert(MockNode::enumeration(names::TRIGGER_MODE, &["On", "Off"], "Off"));
        device.insert(MockNode::enumeration(
            names::TRIGGER_SOURCE,
            &["Software", "Line0", "Line1", "Line2"],
            "Software",
        ));
        device.insert(MockNode::command(names::TRIGGER_SOFTWARE));
        device.insert(MockNode::enumeration(
            names::EXPOSURE_AUTO,
            &["Off", "Once", "Continuous"],
            "Continuous",
        ));
        device.insert(MockNode::float(names::EXPOSURE_TIME, 10_000.0, 20.0, 30_000_000.0));
        device.insert(MockNode::boolean(names::GEV_HEARTBEAT_DISABLE, false));

        let stream = MockNodes::new();
        stream.insert(MockNode::enumeration(
            names::STREAM_BUFFER_HANDLING_MODE,
            &["OldestFirst", "OldestFirstOverwrite", "NewestOnly"],
            "OldestFirst",
        ));
        stream.insert(MockNode::enumeration(
            names::STREAM_BUFFER_COUNT_MODE,
            &["Auto", "Manual"],
            "Auto",
        ));
        stream.insert(
            MockNode::integer(names::STREAM_BUFFER_COUNT_MANUAL, 10, 1, 10, 1)
                .with_clamped_writes(),
        );

        let transport = MockNodes::new();
        transport.insert(
            MockNode::text(names::DEVICE_SERIAL_NUMBER, DEFAULT_SERIAL)
                .with_access(AccessMode::ReadOnly),
        );
        transport.insert(
            MockNode::text("DeviceVendorName", "MockVision").with_access(AccessMode::ReadOnly),
        );
        transport.insert(
            MockNode::text("DeviceModelName", "MC-2048-3C").with_access(AccessMode::ReadOnly),
        );
        transport
            .insert(MockNode::text("DeviceVersion", "1.6.0").with_access(AccessMode::ReadOnly));
        transport.insert(
            MockNode::enumeration(names::DEVICE_TYPE, &["GEV", "U3V"], "GEV")
                .with_access(AccessMode::ReadOnly),
        );
        transport.insert(MockNode::category(
            names::DEVICE_INFORMATION,
            &[
                names::DEVICE_SERIAL_NUMBER,
                "DeviceVendorName",
                "DeviceModelName",
                "DeviceVersion",
                names::DEVICE_TYPE,
            ],
        ));

        Self {
            shared: Arc::new(MockShared {
                device,
                stream,
                transport,
                ring: RwLock::new(Arc::new(FrameRing::new(10, OverflowPolicy::QueueAll))),
                dropped_carry: AtomicU64::new(0),
                next_frame_id: AtomicU64::new(0),
                taken: AtomicU64::new(0),
                released: AtomicU64::new(0),
                x_padding: AtomicU32::new(0),
                y_padding: AtomicU32::new(0),
            }),
        }
    }

    /// Override the transport serial number.
    #[must_use]
    pub fn with_serial(self, serial: &str) -> Self {
        self.shared.transport.insert(
            MockNode::text(names::DEVICE_SERIAL_NUMBER, serial).with_access(AccessMode::ReadOnly),
        );
        self
    }

    /// Cap the manual buffer count the device accepts (writes clamp).
    #[must_use]
    pub fn with_buffer_count_max(self, max: i64) -> Self {
        self.shared.stream.insert(
            MockNode::integer(names::STREAM_BUFFER_COUNT_MANUAL, max.min(10), 1, max, 1)
                .with_clamped_writes(),
        );
        self
    }

    /// Override the exposure time range the device reports.
    #[must_use]
    pub fn with_exposure_range(self, min: f64, max: f64) -> Self {
        self.shared.device.insert(MockNode::float(
            names::EXPOSURE_TIME,
            10_000.0_f64.clamp(min, max),
            min,
            max,
        ));
        self
    }

    /// Make a node report a zero range (not a true ranged control).
    #[must_use]
    pub fn with_unranged_node(self, name: &str) -> Self {
        self.shared.device.set_int_range(
            name,
            IntRange {
                min: 0,
                max: 0,
                increment: 0,
            },
        );
        self
    }

    /// Pad generated frames with extra columns/rows, as vendor layouts do.
    #[must_use]
    pub fn with_padding(self, x_padding: u32, y_padding: u32) -> Self {
        self.shared.x_padding.store(x_padding, Ordering::Release);
        self.shared.y_padding.store(y_padding, Ordering::Release);
        self
    }

    /// Scripting handle to the device node map.
    #[must_use]
    pub fn device_nodes_handle(&self) -> &MockNodes {
        &self.shared.device
    }

    /// Scripting handle to the stream node map.
    #[must_use]
    pub fn stream_nodes_handle(&self) -> &MockNodes {
        &self.shared.stream
    }

    /// Scripting handle to the transport node map.
    #[must_use]
    pub fn transport_nodes_handle(&self) -> &MockNodes {
        &self.shared.transport
    }

    /// Committed writes on the device node map, in order.
    #[must_use]
    pub fn device_write_log(&self) -> Vec<WriteRecord> {
        self.shared.device.write_log()
    }

    /// Number of software trigger executions so far.
    #[must_use]
    pub fn software_trigger_count(&self) -> u64 {
        self.shared.device.executed_count(names::TRIGGER_SOFTWARE)
    }

    /// Number of frame handles released (dropped) so far.
    #[must_use]
    pub fn frames_released(&self) -> u64 {
        self.shared.released.load(Ordering::Acquire)
    }

    /// Frame handles currently held by consumers.
    #[must_use]
    pub fn frames_outstanding(&self) -> u64 {
        self.shared
            .taken
            .load(Ordering::Acquire)
            .saturating_sub(self.shared.released.load(Ordering::Acquire))
    }

    /// Frames evicted by the KeepNewest policy since creation.
    #[must_use]
    pub fn frames_dropped(&self) -> u64 {
        self.shared.dropped_carry.load(Ordering::Acquire) + self.shared.ring.read().dropped()
    }

    /// Arrive one complete frame sized from the current geometry nodes.
    pub fn push_frame(&self) -> PumpOutcome {
        self.push_with_status(CompletionStatus::Complete)
    }

    /// Arrive a frame that failed its integrity check.
    pub fn push_incomplete(&self, code: u32) -> PumpOutcome {
        self.push_with_status(CompletionStatus::Incomplete(code))
    }

    /// Close the frame stream; the acquisition loop sees a device error.
    pub fn close_stream(&self) {
        self.shared.ring.read().close();
    }

    fn push_with_status(&self, status: CompletionStatus) -> PumpOutcome {
        let shared = &self.shared;
        let width = shared
            .device
            .int_value(names::WIDTH)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(640);
        let height = shared
            .device
            .int_value(names::HEIGHT)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(480);
        let x_padding = shared.x_padding.load(Ordering::Acquire);
        let y_padding = shared.y_padding.load(Ordering::Acquire);
        let stride = ((width + x_padding) * CHANNELS) as usize;
        let id = shared.next_frame_id.fetch_add(1, Ordering::AcqRel);
        let fill = u8::try_from(id % 251).unwrap_or(0);

        let payload = FramePayload {
            id,
            width,
            height,
            x_padding,
            y_padding,
            stride,
            status,
            data: vec![fill; stride * (height + y_padding) as usize],
        };

        match shared.current_ring().push(payload) {
            PushOutcome::Stored => PumpOutcome::Stored,
            PushOutcome::DroppedOldest => PumpOutcome::DroppedOldest,
            PushOutcome::Rejected(_) => PumpOutcome::Rejected,
            PushOutcome::Closed(_) => PumpOutcome::Closed,
        }
    }
}

impl CameraDevice for MockCamera {
    type Nodes = MockNodes;
    type Frame = MockFrame;

    fn device_nodes(&self) -> &MockNodes {
        &self.shared.device
    }

    fn stream_nodes(&self) -> &MockNodes {
        &self.shared.stream
    }

    fn transport_nodes(&self) -> &MockNodes {
        &self.shared.transport
    }

    fn next_frame(&self, timeout: Duration) -> Result<MockFrame> {
        let ring = self.shared.current_ring();
        match ring.pop_wait(timeout) {
            Some(payload) => {
                self.shared.taken.fetch_add(1, Ordering::AcqRel);
                Ok(MockFrame {
                    payload,
                    shared: Arc::clone(&self.shared),
                })
            }
            None if ring.is_closed() => {
                Err(CameraError::DeviceProtocol("frame stream closed".to_owned()))
            }
            None => Err(CameraError::FrameTimeout),
        }
    }
}
