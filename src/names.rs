//! Feature node names shared by the sequencer, acquisition loop, diagnostics
//! and the mock device (GenICam Standard Features Naming Convention, plus the
//! transport-layer stream/device names).

/// Acquisition mode enumeration (`Continuous`, `SingleFrame`, ...).
pub const ACQUISITION_MODE: &str = "AcquisitionMode";
/// Pixel format enumeration.
pub const PIXEL_FORMAT: &str = "PixelFormat";
/// Frame-rate control enable boolean.
pub const ACQUISITION_FRAME_RATE_ENABLE: &str = "AcquisitionFrameRateEnable";
/// Target frame rate, frames per second.
pub const ACQUISITION_FRAME_RATE: &str = "AcquisitionFrameRate";
/// Image width in pixels.
pub const WIDTH: &str = "Width";
/// Image height in pixels.
pub const HEIGHT: &str = "Height";
/// Horizontal sensor offset in pixels.
pub const OFFSET_X: &str = "OffsetX";
/// Vertical sensor offset in pixels.
pub const OFFSET_Y: &str = "OffsetY";
/// Trigger mode enumeration (`On` / `Off`).
pub const TRIGGER_MODE: &str = "TriggerMode";
/// Trigger source enumeration (`Software`, `Line0`, ...).
pub const TRIGGER_SOURCE: &str = "TriggerSource";
/// Software trigger command node.
pub const TRIGGER_SOFTWARE: &str = "TriggerSoftware";
/// Automatic exposure enumeration (`Off`, `Once`, `Continuous`).
pub const EXPOSURE_AUTO: &str = "ExposureAuto";
/// Exposure time in microseconds.
pub const EXPOSURE_TIME: &str = "ExposureTime";
/// GigE-Vision heartbeat disable boolean.
pub const GEV_HEARTBEAT_DISABLE: &str = "GevGVCPHeartbeatDisable";

/// Stream buffer handling policy enumeration.
pub const STREAM_BUFFER_HANDLING_MODE: &str = "StreamBufferHandlingMode";
/// Stream buffer count mode enumeration (`Auto` / `Manual`).
pub const STREAM_BUFFER_COUNT_MODE: &str = "StreamBufferCountMode";
/// Manual stream buffer count.
pub const STREAM_BUFFER_COUNT_MANUAL: &str = "StreamBufferCountManual";

/// Transport-layer device serial number.
pub const DEVICE_SERIAL_NUMBER: &str = "DeviceSerialNumber";
/// Transport-layer device type enumeration (`GEV`, `U3V`, ...).
pub const DEVICE_TYPE: &str = "DeviceType";
/// Transport-layer device identity category.
pub const DEVICE_INFORMATION: &str = "DeviceInformation";
