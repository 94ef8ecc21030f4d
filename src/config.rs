//! Per-device configuration and the static startup tables.
//!
//! Geometry differs per physical camera position, so width/height/offset come
//! from fixed tables indexed by device position. Frame rate, buffer depth and
//! exposure policy are process-wide. The tables are read once at startup into
//! [`DeviceConfig`] values; nothing consults them afterwards.

/// Signal origin that starts frame capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerSource {
    /// Capture starts on an explicit software command per frame.
    Software,
    /// Capture is gated by a physical input line.
    Hardware(u8),
}

impl TriggerSource {
    /// Symbolic enumeration entry for this source.
    #[must_use]
    pub fn entry_name(self) -> String {
        match self {
            Self::Software => "Software".to_owned(),
            Self::Hardware(line) => format!("Line{line}"),
        }
    }
}

/// Device-side rule for a full frame ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowPolicy {
    /// Discard the oldest undelivered frame in favor of the newest arrival.
    /// Throughput over completeness; suited to live monitoring.
    KeepNewest,
    /// Deliver strictly in arrival order; acquisition stalls when full.
    QueueAll,
}

impl OverflowPolicy {
    /// Symbolic entry of the stream buffer handling mode for this policy.
    #[must_use]
    pub const fn handling_entry(self) -> &'static str {
        match self {
            Self::KeepNewest => "NewestOnly",
            Self::QueueAll => "OldestFirst",
        }
    }
}

/// Exposure policy applied during configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExposureSetting {
    /// Leave exposure under continuous automatic control.
    AutoContinuous,
    /// Disable automatic exposure and write a fixed time in microseconds.
    ManualMicroseconds(f64),
}

/// Number of physical camera positions in the array.
pub const DEVICE_COUNT: usize = 4;

/// Process-wide target frame rate, frames per second.
pub const FRAME_RATE: f64 = 30.0;

/// Process-wide manual buffer depth requested from every device.
pub const BUFFER_DEPTH: i64 = 3;

/// Process-wide manual exposure time in microseconds.
pub const MANUAL_EXPOSURE_US: f64 = 17_000.0;

// Per-position sensor geometry. Offsets are only valid once the frame size
// is committed (offset range shrinks with frame size), which is why the
// sequencer writes width/height before offsets.
const WIDTHS: [i64; DEVICE_COUNT] = [800, 800, 736, 736];
const HEIGHTS: [i64; DEVICE_COUNT] = [1280, 1280, 1280, 1280];
const OFFSETS: [(i64, i64); DEVICE_COUNT] = [(500, 500), (500, 300), (750, 500), (800, 300)];

/// Complete configuration for one physical camera.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceConfig {
    /// Position of the device in the array; selects the geometry entry.
    pub index: usize,
    /// Frame width in pixels.
    pub width: i64,
    /// Frame height in pixels.
    pub height: i64,
    /// Horizontal sensor offset in pixels.
    pub offset_x: i64,
    /// Vertical sensor offset in pixels.
    pub offset_y: i64,
    /// Manual buffer ring depth.
    pub buffer_depth: i64,
    /// Ring behavior when full.
    pub overflow_policy: OverflowPolicy,
    /// Signal that starts each capture.
    pub trigger_source: TriggerSource,
    /// Whether trigger mode is re-enabled after source selection.
    pub trigger_enabled: bool,
    /// Exposure policy.
    pub exposure: ExposureSetting,
    /// Target frame rate, frames per second.
    pub frame_rate: f64,
}

impl DeviceConfig {
    /// Build the configuration for the device at `index` from the static
    /// tables. Returns `None` for positions outside the array.
    #[must_use]
    pub fn for_index(index: usize) -> Option<Self> {
        let width = *WIDTHS.get(index)?;
        let height = *HEIGHTS.get(index)?;
        let (offset_x, offset_y) = *OFFSETS.get(index)?;
        Some(Self {
            index,
            width,
            height,
            offset_x,
            offset_y,
            buffer_depth: BUFFER_DEPTH,
            overflow_policy: OverflowPolicy::KeepNewest,
            trigger_source: TriggerSource::Hardware(0),
            trigger_enabled: true,
            exposure: ExposureSetting::AutoContinuous,
            frame_rate: FRAME_RATE,
        })
    }

    /// Override the trigger source.
    #[must_use]
    pub const fn with_trigger_source(mut self, source: TriggerSource) -> Self {
        self.trigger_source = source;
        self
    }

    /// Override whether trigger mode is turned back on.
    #[must_use]
    pub const fn with_trigger_enabled(mut self, enabled: bool) -> Self {
        self.trigger_enabled = enabled;
        self
    }

    /// Override the exposure policy.
    #[must_use]
    pub const fn with_exposure(mut self, exposure: ExposureSetting) -> Self {
        self.exposure = exposure;
        self
    }

    /// Override the ring overflow policy.
    #[must_use]
    pub const fn with_overflow_policy(mut self, policy: OverflowPolicy) -> Self {
        self.overflow_policy = policy;
        self
    }

    /// Override the manual buffer depth.
    #[must_use]
    pub const fn with_buffer_depth(mut self, depth: i64) -> Self {
        self.buffer_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_entries_match_positions() {
        let cfg = DeviceConfig::for_index(2).expect("index 2 exists");
        assert_eq!(cfg.width, 736);
        assert_eq!(cfg.height, 1280);
        assert_eq!(cfg.offset_x, 750);
        assert_eq!(cfg.offset_y, 500);
        assert_eq!(cfg.buffer_depth, BUFFER_DEPTH);

        let cfg0 = DeviceConfig::for_index(0).expect("index 0 exists");
        assert_eq!(cfg0.width, 800);
        assert_eq!(cfg0.offset_x, 500);
    }

    #[test]
    fn out_of_range_index_is_none() {
        assert!(DeviceConfig::for_index(DEVICE_COUNT).is_none());
    }

    #[test]
    fn trigger_source_entry_names() {
        assert_eq!(TriggerSource::Software.entry_name(), "Software");
        assert_eq!(TriggerSource::Hardware(0).entry_name(), "Line0");
        assert_eq!(TriggerSource::Hardware(2).entry_name(), "Line2");
    }

    #[test]
    fn overflow_policy_handling_entries() {
        assert_eq!(OverflowPolicy::KeepNewest.handling_entry(), "NewestOnly");
        assert_eq!(OverflowPolicy::QueueAll.handling_entry(), "OldestFirst");
    }
}
