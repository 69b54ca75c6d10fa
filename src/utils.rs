//! Helper functions

use crate::kinematic_traits::Pose;
use nalgebra::Vector3;

pub(crate) mod dh_kinematics {
    /// Checks if all elements in the slice are finite
    pub fn is_valid(qs: &[f64]) -> bool {
        qs.iter().all(|&q| q.is_finite())
    }
}

pub use dh_kinematics::is_valid;

/// Convert angles in degrees to radians
pub fn as_radians(degrees: &[f64]) -> Vec<f64> {
    degrees.iter().map(|d| d.to_radians()).collect()
}

fn format_joints(joints: &[f64]) -> String {
    let mut row_str = String::new();
    for computed in joints {
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    format!("[{}]", row_str.trim_end())
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &[f64]) {
    println!("{}", format_joints(joints));
}

/// Print every waypoint of a joint space trajectory, converting radians to degrees.
pub fn dump_trajectory(trajectory: &[Vec<f64>]) {
    if trajectory.is_empty() {
        println!("No waypoints");
    }
    for (i, joints) in trajectory.iter().enumerate() {
        println!("{:3}: {}", i, format_joints(joints));
    }
}

pub fn format_position(position: &Vector3<f64>) -> String {
    format!("x: {:.5}, y: {:.5}, z: {:.5}", position.x, position.y, position.z)
}

pub fn dump_pose(pose: &Pose) {
    let rotation = pose.to_isometry().rotation;
    println!(
        "{},  quat: {:.5},{:.5},{:.5},{:.5}",
        format_position(&pose.translation),
        rotation.i,
        rotation.j,
        rotation.k,
        rotation.w
    );
}

/// formatting for YAML output
pub(crate) fn deg(x: &f64) -> String {
    if *x == 0.0 {
        return "0".to_string();
    }
    format!("deg({:.4})", x.to_degrees())
}
