//! Rust implementation of forward and inverse kinematics and trajectory planning for serial
//! robot arms described by Denavit-Hartenberg (DH) parameters.
//!
//! # Features
//!
//! - Forward kinematics returning the end effector pose and the frame of every joint.
//! - Numerical inverse kinematics for any chain (bounded damped least squares, position target).
//! - Closed form inverse kinematics for the base, shoulder and elbow joints.
//! - Joint space and Cartesian trajectories with linear, cubic (smoothstep) and quintic profiles.
//! - Kinematic chains from presets, from code, or from YAML files.
//!
//! # Parameters
//!
//! Every joint is described by four DH constants `(theta_offset, d, a, alpha)`. The joint
//! transform is `Rz(q + theta_offset) * Tz(d) * Tx(a) * Rx(alpha)` and the transforms are
//! composed from base to tip. Every joint also carries a `[min, max]` limit.
//!
//! The chain is an immutable value. Build it once and pass it by reference (or `Arc`) into
//! every call; all operations are pure functions and can run concurrently.
//!
//! ```
//! use nalgebra::Vector3;
//! use dh_kinematics::chain::KinematicChain;
//! use dh_kinematics::forward::forward_kinematics;
//! use dh_kinematics::inverse::solve_ik_analytical_3dof;
//! use dh_kinematics::trajectory::quintic_trajectory;
//!
//! let robot = KinematicChain::planar_elbow(0.5, 0.5);
//! let target = Vector3::new(0.4, 0.3, 0.2);
//! let joints = solve_ik_analytical_3dof(&target, &robot.link_lengths()).unwrap();
//! let pose = forward_kinematics(&joints, &robot).unwrap();
//! assert!((pose.translation - target).norm() < 1e-9);
//!
//! let path = quintic_trajectory(&[0.0; 6], &joints, 50).unwrap();
//! assert_eq!(path.len(), 50);
//! ```

pub mod error;

pub mod kinematic_traits;

pub mod chain;
mod chain_presets;

#[cfg(feature = "allow_filesystem")]
pub mod chain_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

pub mod utils;

pub mod forward;

pub mod jacobian;

pub mod inverse;

pub mod kinematics_impl;

pub mod trajectory;

#[cfg(test)]
#[cfg(feature = "allow_filesystem")]
mod tests;
