//! Best-effort device identity report.

use crate::accessor;
use crate::names;
use crate::traits::NodeTree;

/// Print the device identity features to stdout, one `name : value` line per
/// feature, with a placeholder for unreadable members.
///
/// Read-only and best-effort; returns `false` only when the identity
/// category itself is unavailable.
pub fn print_device_info<N: NodeTree>(nodes: &N) -> bool {
    println!("*** DEVICE INFORMATION ***");

    let Ok(features) = nodes.category(names::DEVICE_INFORMATION) else {
        println!("Device control information not available.");
        return false;
    };

    for feature in features {
        match accessor::try_read(nodes, &feature) {
            Ok(value) => println!("{feature} : {value}"),
            Err(_) => println!("{feature} : Node not readable"),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockCamera;
    use crate::traits::CameraDevice;

    #[test]
    fn reports_true_when_category_present() {
        let camera = MockCamera::new();
        assert!(print_device_info(camera.transport_nodes()));
    }

    #[test]
    fn reports_false_when_category_missing() {
        let camera = MockCamera::new();
        camera
            .transport_nodes_handle()
            .remove(names::DEVICE_INFORMATION);
        assert!(!print_device_info(camera.transport_nodes()));
    }

    #[test]
    fn device_nodes_have_no_identity_category() {
        let camera = MockCamera::new();
        assert!(!print_device_info(camera.device_nodes()));
    }
}
