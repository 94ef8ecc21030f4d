//! Demo binary wiring the capture pipeline to mock devices.
//!
//! Configures two cameras from the static tables, prints their identity,
//! then runs one acquisition loop per device for a few seconds with a pump
//! thread standing in for the hardware trigger line.

use gige_cam_capture::diagnostics::print_device_info;
use gige_cam_capture::mock::MockCamera;
use gige_cam_capture::sequencer::{reset_exposure, reset_trigger};
use gige_cam_capture::{
    configure, spawn_acquisition, DenseImage, DeviceConfig, FrameSink, StopToken,
};
use std::thread;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

struct StatsSink {
    index: usize,
    frames: u64,
}

impl FrameSink for StatsSink {
    fn on_frame(&mut self, image: &DenseImage<'_>) {
        self.frames += 1;
        if self.frames % 30 == 0 {
            info!(
                index = self.index,
                frames = self.frames,
                rows = image.rows(),
                cols = image.cols(),
                stride = image.stride(),
                "delivery checkpoint"
            );
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> gige_cam_capture::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut sessions = Vec::new();
    for index in 0..2 {
        let Some(cfg) = DeviceConfig::for_index(index) else {
            break;
        };
        let camera = MockCamera::new().with_serial(&format!("2329614{index}"));

        let report = configure(&camera, &cfg)?;
        if !report.fully_ok() {
            for degradation in report.degraded() {
                info!(
                    index,
                    node = degradation.node,
                    reason = %degradation.reason,
                    "running degraded"
                );
            }
        }
        print_device_info(camera.transport_nodes_handle());

        // Stand-in for the hardware trigger line: arrive frames at the
        // configured rate until shutdown.
        let stop = StopToken::new();
        let pump_camera = camera.clone();
        let pump_stop = stop.clone();
        let interval = Duration::from_secs_f64(1.0 / cfg.frame_rate);
        thread::spawn(move || {
            while !pump_stop.is_stopped() {
                pump_camera.push_frame();
                thread::sleep(interval);
            }
        });

        let sink = StatsSink { index, frames: 0 };
        let handle = spawn_acquisition(camera.clone(), cfg, sink, stop)?;
        sessions.push((camera, handle));
    }

    thread::sleep(Duration::from_secs(3));

    for (_, handle) in &sessions {
        handle.request_stop();
    }
    for (camera, handle) in sessions {
        let delivered = handle.join()?;
        info!(
            delivered,
            dropped = camera.frames_dropped(),
            outstanding = camera.frames_outstanding(),
            "device session finished"
        );
        reset_trigger(&camera);
        reset_exposure(&camera);
    }
    Ok(())
}
