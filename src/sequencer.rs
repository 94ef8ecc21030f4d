//! Ordered device configuration.
//!
//! Runs once per device, strictly before that device's acquisition loop
//! starts. Steps are applied in dependency order: acquisition mode, pixel
//! format, buffer policy, frame rate, geometry (width and height before
//! offsets, since the valid offset range is sensor size minus frame size),
//! trigger (source selection is only legal while trigger mode is off), then
//! exposure.
//!
//! Only three failures are structural and abort the sequence: continuous
//! acquisition mode, the manual buffer-count chain, and trigger-mode
//! writability. Every other failure downgrades the step to a recorded
//! degradation and the remaining steps are still attempted, so a device
//! missing an optional control keeps running instead of crashing the array.

use crate::accessor;
use crate::config::{DeviceConfig, ExposureSetting, OverflowPolicy, TriggerSource};
use crate::names;
use crate::traits::{CameraDevice, CameraError, NodeTree, Result};
use tracing::{debug, info, warn};

/// Fixed capture pixel format requested from every device.
const PIXEL_FORMAT_ENTRY: &str = "RGB8";

/// Configuration steps that can degrade without aborting the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigStep {
    /// Pixel format selection.
    PixelFormat,
    /// Buffer depth and handling policy.
    BufferPolicy,
    /// Frame-rate control.
    FrameRate,
    /// Width, height and sensor offsets.
    Geometry,
    /// Trigger source and mode.
    Trigger,
    /// Exposure policy.
    Exposure,
}

/// One recorded degradation: the step kept going, but not at full fidelity.
#[derive(Debug, Clone)]
pub struct Degradation {
    /// Step the failure occurred in.
    pub step: ConfigStep,
    /// Feature node involved.
    pub node: &'static str,
    /// Human-readable reason.
    pub reason: String,
}

/// Aggregated outcome of a configuration run.
#[derive(Debug, Default)]
pub struct ConfigReport {
    /// Serial number read from the transport map, when available.
    pub serial_number: Option<String>,
    degraded: Vec<Degradation>,
}

impl ConfigReport {
    /// Whether every step applied exactly as requested.
    #[must_use]
    pub fn fully_ok(&self) -> bool {
        self.degraded.is_empty()
    }

    /// Steps that fell back or were skipped, in occurrence order.
    #[must_use]
    pub fn degraded(&self) -> &[Degradation] {
        &self.degraded
    }

    fn degrade(&mut self, step: ConfigStep, node: &'static str, reason: String) {
        warn!(?step, node, %reason, "configuration step degraded");
        self.degraded.push(Degradation { step, node, reason });
    }
}

/// Configure `camera` for continuous acquisition according to `cfg`.
///
/// Returns `Err` only when a structurally required step fails; every other
/// failure is recorded in the returned [`ConfigReport`].
pub fn configure<C: CameraDevice>(camera: &C, cfg: &DeviceConfig) -> Result<ConfigReport> {
    let nodes = camera.device_nodes();
    let mut report = ConfigReport::default();

    info!(index = cfg.index, "configuring device");

    // Serial number identifies the device in logs; purely diagnostic.
    match accessor::try_read(camera.transport_nodes(), names::DEVICE_SERIAL_NUMBER) {
        Ok(serial) => {
            info!(index = cfg.index, %serial, "device serial number");
            report.serial_number = Some(serial.to_string());
        }
        Err(err) => debug!(index = cfg.index, %err, "serial number not readable"),
    }

    // Without continuous acquisition no later step is meaningful.
    accessor::try_write_enum(nodes, names::ACQUISITION_MODE, "Continuous")?;
    info!("acquisition mode set to Continuous");

    match accessor::try_write_enum(nodes, names::PIXEL_FORMAT, PIXEL_FORMAT_ENTRY) {
        Ok(()) => match accessor::try_read_enum(nodes, names::PIXEL_FORMAT) {
            Ok(entry) => info!(%entry, "pixel format set"),
            Err(err) => debug!(%err, "pixel format read-back failed"),
        },
        Err(err) => report.degrade(ConfigStep::PixelFormat, names::PIXEL_FORMAT, err.to_string()),
    }

    apply_buffer_policy(camera, cfg.buffer_depth, cfg.overflow_policy, &mut report)?;

    configure_frame_rate(nodes, cfg.frame_rate, &mut report);
    configure_geometry(nodes, cfg, &mut report);
    configure_trigger(nodes, cfg, &mut report)?;
    configure_exposure(nodes, cfg.exposure, &mut report);

    if report.fully_ok() {
        info!(index = cfg.index, "device fully configured");
    } else {
        warn!(
            index = cfg.index,
            degraded = report.degraded.len(),
            "device configured with degradations"
        );
    }
    Ok(report)
}

/// Switch the device's frame ring to a manual depth and the requested
/// overflow policy.
///
/// This chain is the frame-delivery policy itself; without it throughput and
/// latency are unbounded, so every step here is fatal. A device-side clamp of
/// the requested depth is surfaced as a degradation, never accepted silently.
pub fn apply_buffer_policy<C: CameraDevice>(
    camera: &C,
    depth: i64,
    policy: OverflowPolicy,
    report: &mut ConfigReport,
) -> Result<()> {
    let stream = camera.stream_nodes();

    let current = accessor::try_read_enum(stream, names::STREAM_BUFFER_HANDLING_MODE)?;
    debug!(%current, "buffer handling mode before update");

    accessor::try_write_enum(stream, names::STREAM_BUFFER_COUNT_MODE, "Manual")?;
    info!("buffer count mode set to Manual");

    match stream.int_range(names::STREAM_BUFFER_COUNT_MANUAL) {
        Ok(range) => debug!(max = range.max, "device buffer count limit"),
        Err(err) => debug!(%err, "buffer count range not reported"),
    }

    accessor::try_write_int(stream, names::STREAM_BUFFER_COUNT_MANUAL, depth)?;
    let applied = accessor::try_read_int(stream, names::STREAM_BUFFER_COUNT_MANUAL)?;
    if applied == depth {
        info!(depth, "buffer depth set");
    } else {
        report.degrade(
            ConfigStep::BufferPolicy,
            names::STREAM_BUFFER_COUNT_MANUAL,
            format!("requested depth {depth}, device applied {applied}"),
        );
    }

    accessor::try_write_enum(stream, names::STREAM_BUFFER_HANDLING_MODE, policy.handling_entry())?;
    info!(entry = policy.handling_entry(), "buffer handling mode set");
    Ok(())
}

fn configure_frame_rate<N: NodeTree>(nodes: &N, rate: f64, report: &mut ConfigReport) {
    // Trigger must be off while the frame-rate control is changed.
    match accessor::try_write_enum(nodes, names::TRIGGER_MODE, "Off") {
        Ok(()) => debug!("trigger mode disabled for frame-rate setup"),
        Err(err) => report.degrade(ConfigStep::FrameRate, names::TRIGGER_MODE, err.to_string()),
    }

    match accessor::try_write_bool(nodes, names::ACQUISITION_FRAME_RATE_ENABLE, true) {
        Ok(()) => debug!("frame-rate control enabled"),
        Err(err) => report.degrade(
            ConfigStep::FrameRate,
            names::ACQUISITION_FRAME_RATE_ENABLE,
            err.to_string(),
        ),
    }

    match accessor::try_read_float(nodes, names::ACQUISITION_FRAME_RATE) {
        Ok(current) => debug!(current, "frame rate before update"),
        Err(err) => debug!(%err, "current frame rate not readable"),
    }

    match accessor::try_write_float(nodes, names::ACQUISITION_FRAME_RATE, rate) {
        Ok(()) => info!(rate, "frame rate set"),
        Err(err) => report.degrade(
            ConfigStep::FrameRate,
            names::ACQUISITION_FRAME_RATE,
            err.to_string(),
        ),
    }
}

fn configure_geometry<N: NodeTree>(nodes: &N, cfg: &DeviceConfig, report: &mut ConfigReport) {
    // Width and height first; their committed values define the valid offset
    // ranges, which the device re-derives from the sensor dimensions.
    set_ranged_int(nodes, names::WIDTH, cfg.width, report);
    set_ranged_int(nodes, names::HEIGHT, cfg.height, report);
    set_offset(nodes, names::OFFSET_X, cfg.offset_x, report);
    set_offset(nodes, names::OFFSET_Y, cfg.offset_y, report);
}

fn set_ranged_int<N: NodeTree>(
    nodes: &N,
    name: &'static str,
    value: i64,
    report: &mut ConfigReport,
) {
    let mode = nodes.access_mode(name);
    if !mode.readable() || !mode.writable() {
        report.degrade(ConfigStep::Geometry, name, access_failure(name, mode).to_string());
        return;
    }
    let range = match nodes.int_range(name) {
        Ok(range) => range,
        Err(err) => {
            report.degrade(ConfigStep::Geometry, name, err.to_string());
            return;
        }
    };
    // A zero increment or zero maximum marks a node that is not a true
    // ranged control; it must not be written.
    if range.increment == 0 || range.max == 0 {
        report.degrade(
            ConfigStep::Geometry,
            name,
            "node does not report a usable range".to_owned(),
        );
        return;
    }
    match accessor::try_write_int(nodes, name, value) {
        Ok(()) => match accessor::try_read_int(nodes, name) {
            Ok(applied) => info!(node = name, applied, "geometry value set"),
            Err(err) => debug!(node = name, %err, "geometry read-back failed"),
        },
        Err(err) => report.degrade(ConfigStep::Geometry, name, err.to_string()),
    }
}

fn set_offset<N: NodeTree>(nodes: &N, name: &'static str, value: i64, report: &mut ConfigReport) {
    match accessor::try_write_int(nodes, name, value) {
        Ok(()) => match accessor::try_read_int(nodes, name) {
            Ok(applied) => info!(node = name, applied, "offset set"),
            Err(err) => debug!(node = name, %err, "offset read-back failed"),
        },
        Err(err) => report.degrade(ConfigStep::Geometry, name, err.to_string()),
    }
}

fn configure_trigger<N: NodeTree>(
    nodes: &N,
    cfg: &DeviceConfig,
    report: &mut ConfigReport,
) -> Result<()> {
    match cfg.trigger_source {
        TriggerSource::Software => info!("software trigger chosen"),
        TriggerSource::Hardware(line) => info!(line, "hardware trigger chosen"),
    }

    // The source can only be selected while trigger mode is off, and a
    // device whose trigger mode cannot be written cannot honor the policy
    // at all.
    let mode = nodes.access_mode(names::TRIGGER_MODE);
    if !mode.writable() {
        return Err(access_failure(names::TRIGGER_MODE, mode));
    }

    accessor::try_write_enum(nodes, names::TRIGGER_MODE, "Off")?;
    debug!("trigger mode disabled");

    match accessor::try_write_enum(nodes, names::TRIGGER_SOURCE, &cfg.trigger_source.entry_name()) {
        Ok(()) => info!(source = %cfg.trigger_source.entry_name(), "trigger source selected"),
        Err(err) => report.degrade(ConfigStep::Trigger, names::TRIGGER_SOURCE, err.to_string()),
    }

    if cfg.trigger_enabled {
        match accessor::try_write_enum(nodes, names::TRIGGER_MODE, "On") {
            Ok(()) => info!("trigger mode turned back on"),
            Err(err) => report.degrade(ConfigStep::Trigger, names::TRIGGER_MODE, err.to_string()),
        }
    } else {
        info!("trigger left disabled, free-running at the frame rate");
    }
    Ok(())
}

fn configure_exposure<N: NodeTree>(
    nodes: &N,
    exposure: ExposureSetting,
    report: &mut ConfigReport,
) {
    match exposure {
        ExposureSetting::AutoContinuous => {
            match accessor::try_write_enum(nodes, names::EXPOSURE_AUTO, "Continuous") {
                Ok(()) => info!("automatic exposure enabled"),
                Err(err) => {
                    report.degrade(ConfigStep::Exposure, names::EXPOSURE_AUTO, err.to_string());
                }
            }
        }
        ExposureSetting::ManualMicroseconds(requested) => {
            // Manual time is meaningless while automatic exposure runs.
            if let Err(err) = accessor::try_write_enum(nodes, names::EXPOSURE_AUTO, "Off") {
                report.degrade(ConfigStep::Exposure, names::EXPOSURE_AUTO, err.to_string());
                return;
            }
            debug!("automatic exposure disabled");

            let range = match nodes.float_range(names::EXPOSURE_TIME) {
                Ok(range) => range,
                Err(err) => {
                    report.degrade(ConfigStep::Exposure, names::EXPOSURE_TIME, err.to_string());
                    return;
                }
            };
            // Out-of-range requests snap to the device minimum, never the
            // nearer bound.
            let value = if range.contains(requested) {
                requested
            } else {
                warn!(
                    requested,
                    min = range.min,
                    max = range.max,
                    "requested exposure outside device range, writing minimum"
                );
                range.min
            };
            match accessor::try_write_float(nodes, names::EXPOSURE_TIME, value) {
                Ok(()) => info!(microseconds = value, "manual exposure set"),
                Err(err) => {
                    report.degrade(ConfigStep::Exposure, names::EXPOSURE_TIME, err.to_string());
                }
            }
        }
    }
}

/// Disable the GigE-Vision link heartbeat so debugger pauses do not drop the
/// connection. Debug builds only; no-op for non-GigE transports. The camera
/// should be power cycled afterwards to restore its default state.
#[cfg(debug_assertions)]
pub fn disable_heartbeat<C: CameraDevice>(camera: &C) -> Result<()> {
    let device_type = accessor::try_read_enum(camera.transport_nodes(), names::DEVICE_TYPE)?;
    if device_type != "GEV" {
        debug!(%device_type, "not a GigE device, heartbeat untouched");
        return Ok(());
    }
    accessor::try_write_bool(camera.device_nodes(), names::GEV_HEARTBEAT_DISABLE, true)?;
    warn!("GigE heartbeat disabled for this debug session");
    Ok(())
}

/// Return the device to free-running capture by disabling trigger mode.
/// Best-effort teardown; returns whether the write succeeded.
pub fn reset_trigger<C: CameraDevice>(camera: &C) -> bool {
    match accessor::try_write_enum(camera.device_nodes(), names::TRIGGER_MODE, "Off") {
        Ok(()) => {
            info!("trigger mode disabled");
            true
        }
        Err(err) => {
            warn!(%err, "unable to disable trigger mode");
            false
        }
    }
}

/// Return the device to continuous automatic exposure.
/// Best-effort teardown; returns whether the write succeeded.
pub fn reset_exposure<C: CameraDevice>(camera: &C) -> bool {
    match accessor::try_write_enum(camera.device_nodes(), names::EXPOSURE_AUTO, "Continuous") {
        Ok(()) => {
            info!("automatic exposure restored");
            true
        }
        Err(err) => {
            warn!(%err, "unable to restore automatic exposure");
            false
        }
    }
}

fn access_failure(name: &str, mode: crate::traits::AccessMode) -> CameraError {
    if mode.present() {
        if mode.writable() {
            CameraError::NodeNotReadable(name.to_owned())
        } else {
            CameraError::NodeNotWritable(name.to_owned())
        }
    } else {
        CameraError::NodeUnavailable(name.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeviceConfig, ExposureSetting, TriggerSource};
    use crate::mock::MockCamera;
    use crate::names;
    use crate::traits::{AccessMode, NodeValue};

    fn software_cfg(index: usize) -> DeviceConfig {
        DeviceConfig::for_index(index)
            .expect("index in table")
            .with_trigger_source(TriggerSource::Software)
            .with_exposure(ExposureSetting::ManualMicroseconds(17_000.0))
    }

    fn writes_to(camera: &MockCamera, node: &str) -> Vec<NodeValue> {
        camera
            .device_write_log()
            .into_iter()
            .filter(|record| record.node == node)
            .map(|record| record.value)
            .collect()
    }

    #[test]
    fn geometry_is_applied_width_height_then_offsets() {
        let camera = MockCamera::new();
        let cfg = software_cfg(2);
        let report = configure(&camera, &cfg).expect("configuration succeeds");
        assert!(report.fully_ok(), "degraded: {:?}", report.degraded());

        let log = camera.device_write_log();
        let geometry: Vec<&str> = log
            .iter()
            .map(|record| record.node.as_str())
            .filter(|node| {
                matches!(
                    *node,
                    "Width" | "Height" | "OffsetX" | "OffsetY"
                )
            })
            .collect();
        assert_eq!(geometry, ["Width", "Height", "OffsetX", "OffsetY"]);
    }

    #[test]
    fn offsets_degrade_when_geometry_is_not_committed_first() {
        // Frame size at full sensor leaves zero offset headroom, so offset
        // writes are rejected by the device until width/height shrink.
        let camera = MockCamera::new();
        let nodes = camera.device_nodes_handle();
        nodes.set_access(names::WIDTH, AccessMode::ReadOnly);
        nodes.set_access(names::HEIGHT, AccessMode::ReadOnly);

        let cfg = software_cfg(2);
        let report = configure(&camera, &cfg).expect("still configures");
        assert!(!report.fully_ok());

        let offset_failures = report
            .degraded()
            .iter()
            .filter(|d| d.node == names::OFFSET_X || d.node == names::OFFSET_Y)
            .count();
        assert_eq!(offset_failures, 2);
        assert!(writes_to(&camera, names::OFFSET_X).is_empty());
    }

    #[test]
    fn trigger_source_is_only_written_while_mode_is_off() {
        let camera = MockCamera::new();
        let cfg = software_cfg(0);
        configure(&camera, &cfg).expect("configuration succeeds");

        let log = camera.device_write_log();
        let mut mode = NodeValue::Enumeration("Off".to_owned());
        for record in &log {
            if record.node == names::TRIGGER_MODE {
                mode = record.value.clone();
            }
            if record.node == names::TRIGGER_SOURCE {
                assert_eq!(
                    mode,
                    NodeValue::Enumeration("Off".to_owned()),
                    "trigger source written while mode was {mode}"
                );
            }
        }

        // The trigger block itself ends Off -> source -> On.
        let trigger_writes: Vec<NodeValue> = log
            .iter()
            .filter(|record| {
                record.node == names::TRIGGER_MODE || record.node == names::TRIGGER_SOURCE
            })
            .map(|record| record.value.clone())
            .collect();
        let tail = trigger_writes[trigger_writes.len() - 3..].to_vec();
        assert_eq!(
            tail,
            [
                NodeValue::Enumeration("Off".to_owned()),
                NodeValue::Enumeration("Software".to_owned()),
                NodeValue::Enumeration("On".to_owned()),
            ]
        );
    }

    #[test]
    fn trigger_mode_stays_off_when_disabled_by_config() {
        let camera = MockCamera::new();
        let cfg = software_cfg(0).with_trigger_enabled(false);
        configure(&camera, &cfg).expect("configuration succeeds");

        let modes = writes_to(&camera, names::TRIGGER_MODE);
        assert!(!modes.contains(&NodeValue::Enumeration("On".to_owned())));
    }

    #[test]
    fn in_range_exposure_is_written_unchanged() {
        let camera = MockCamera::new().with_exposure_range(20.0, 30_000_000.0);
        let cfg = software_cfg(2);
        configure(&camera, &cfg).expect("configuration succeeds");

        assert_eq!(
            writes_to(&camera, names::EXPOSURE_TIME),
            [NodeValue::Float(17_000.0)]
        );
    }

    #[test]
    fn out_of_range_exposure_snaps_to_minimum() {
        let camera = MockCamera::new().with_exposure_range(20.0, 30_000_000.0);

        let low = software_cfg(0).with_exposure(ExposureSetting::ManualMicroseconds(5.0));
        configure(&camera, &low).expect("configuration succeeds");
        assert_eq!(
            writes_to(&camera, names::EXPOSURE_TIME),
            [NodeValue::Float(20.0)]
        );

        // Above-maximum requests also land on the minimum, not the maximum.
        let camera = MockCamera::new().with_exposure_range(20.0, 30_000.0);
        let high = software_cfg(0).with_exposure(ExposureSetting::ManualMicroseconds(50_000.0));
        configure(&camera, &high).expect("configuration succeeds");
        assert_eq!(
            writes_to(&camera, names::EXPOSURE_TIME),
            [NodeValue::Float(20.0)]
        );
    }

    #[test]
    fn buffer_depth_clamp_is_surfaced_as_degradation() {
        let camera = MockCamera::new().with_buffer_count_max(2);
        let cfg = software_cfg(0);
        let report = configure(&camera, &cfg).expect("configuration succeeds");

        assert!(!report.fully_ok());
        let clamp = report
            .degraded()
            .iter()
            .find(|d| d.node == names::STREAM_BUFFER_COUNT_MANUAL)
            .expect("clamp recorded");
        assert_eq!(clamp.step, ConfigStep::BufferPolicy);
        assert!(clamp.reason.contains("requested depth 3"));
        assert!(clamp.reason.contains("applied 2"));
    }

    #[test]
    fn missing_acquisition_mode_is_fatal() {
        let camera = MockCamera::new();
        camera.device_nodes_handle().remove(names::ACQUISITION_MODE);
        let err = configure(&camera, &software_cfg(0)).expect_err("must abort");
        assert!(matches!(err, CameraError::NodeUnavailable(name) if name == names::ACQUISITION_MODE));
    }

    #[test]
    fn missing_buffer_count_chain_is_fatal() {
        let camera = MockCamera::new();
        camera
            .stream_nodes_handle()
            .remove(names::STREAM_BUFFER_COUNT_MANUAL);
        let err = configure(&camera, &software_cfg(0)).expect_err("must abort");
        assert!(matches!(err, CameraError::NodeUnavailable(_)));
    }

    #[test]
    fn unwritable_trigger_mode_is_fatal() {
        let camera = MockCamera::new();
        camera
            .device_nodes_handle()
            .set_access(names::TRIGGER_MODE, AccessMode::ReadOnly);
        let err = configure(&camera, &software_cfg(0)).expect_err("must abort");
        assert!(matches!(err, CameraError::NodeNotWritable(name) if name == names::TRIGGER_MODE));
    }

    #[test]
    fn read_only_pixel_format_degrades_and_continues() {
        let camera = MockCamera::new();
        camera
            .device_nodes_handle()
            .set_access(names::PIXEL_FORMAT, AccessMode::ReadOnly);
        let cfg = software_cfg(2);
        let report = configure(&camera, &cfg).expect("configuration succeeds");

        assert!(!report.fully_ok());
        assert_eq!(report.degraded().len(), 1);
        assert_eq!(report.degraded()[0].step, ConfigStep::PixelFormat);
        // Later steps still ran.
        assert_eq!(writes_to(&camera, names::WIDTH), [NodeValue::Integer(736)]);
    }

    #[test]
    fn zero_increment_geometry_node_is_never_written() {
        let camera = MockCamera::new().with_unranged_node(names::WIDTH);
        let cfg = software_cfg(0);
        let report = configure(&camera, &cfg).expect("configuration succeeds");

        assert!(writes_to(&camera, names::WIDTH).is_empty());
        assert!(report
            .degraded()
            .iter()
            .any(|d| d.node == names::WIDTH && d.step == ConfigStep::Geometry));
    }

    #[test]
    fn full_scenario_for_device_index_two() {
        let camera = MockCamera::new().with_exposure_range(20.0, 30_000_000.0);
        let cfg = software_cfg(2);
        let report = configure(&camera, &cfg).expect("configuration succeeds");
        assert!(report.fully_ok(), "degraded: {:?}", report.degraded());
        assert!(report.serial_number.is_some());

        let device = camera.device_nodes_handle();
        assert_eq!(
            device.current_value(names::ACQUISITION_MODE),
            Some(NodeValue::Enumeration("Continuous".to_owned()))
        );
        assert_eq!(
            device.current_value(names::PIXEL_FORMAT),
            Some(NodeValue::Enumeration("RGB8".to_owned()))
        );
        assert_eq!(device.current_value(names::WIDTH), Some(NodeValue::Integer(736)));
        assert_eq!(device.current_value(names::HEIGHT), Some(NodeValue::Integer(1280)));
        assert_eq!(device.current_value(names::OFFSET_X), Some(NodeValue::Integer(750)));
        assert_eq!(device.current_value(names::OFFSET_Y), Some(NodeValue::Integer(500)));
        assert_eq!(
            device.current_value(names::TRIGGER_SOURCE),
            Some(NodeValue::Enumeration("Software".to_owned()))
        );
        assert_eq!(
            device.current_value(names::TRIGGER_MODE),
            Some(NodeValue::Enumeration("On".to_owned()))
        );
        assert_eq!(
            device.current_value(names::EXPOSURE_TIME),
            Some(NodeValue::Float(17_000.0))
        );
    }

    #[test]
    fn teardown_restores_defaults() {
        let camera = MockCamera::new();
        configure(&camera, &software_cfg(0)).expect("configuration succeeds");

        assert!(reset_trigger(&camera));
        assert!(reset_exposure(&camera));

        let device = camera.device_nodes_handle();
        assert_eq!(
            device.current_value(names::TRIGGER_MODE),
            Some(NodeValue::Enumeration("Off".to_owned()))
        );
        assert_eq!(
            device.current_value(names::EXPOSURE_AUTO),
            Some(NodeValue::Enumeration("Continuous".to_owned()))
        );
    }

    #[cfg(debug_assertions)]
    #[test]
    fn heartbeat_disable_targets_gige_devices_only() {
        let camera = MockCamera::new();
        disable_heartbeat(&camera).expect("GigE device accepts the write");
        assert_eq!(
            camera
                .device_nodes_handle()
                .current_value(names::GEV_HEARTBEAT_DISABLE),
            Some(NodeValue::Boolean(true))
        );
    }
}
