//! Value types shared by all kinematic components and the `Kinematics` trait.

extern crate nalgebra as na;

use crate::error::Result;
use na::{Isometry3, Matrix3, Matrix4, Rotation3, Translation3, UnitQuaternion, Vector3};

/// Joint angles of the 6 joint reference arm, in radians.
pub type Joints = [f64; 6];

/// Joint angles for a chain of arbitrary length, in radians, one per joint.
pub type JointAngles = Vec<f64>;

/// 4x4 homogeneous transform: 3x3 rotation block, 3x1 translation, bottom row [0, 0, 0, 1].
pub type Transform = Matrix4<f64>;

/// Ordered sequence of waypoints. The first one is the start, the last one is the end.
pub type Trajectory<W> = Vec<W>;

/// Pose of the end effector (or any joint frame) relative to the base frame.
///
/// Both parts are copied unchanged out of the accumulated homogeneous transform, so the
/// translation is bit-identical to the last column of that transform.
/// ```
/// use nalgebra::{Matrix3, Vector3};
/// use dh_kinematics::kinematic_traits::Pose;
///
/// let pose = Pose { translation: Vector3::new(0.5, 0.0, 0.4), rotation: Matrix3::identity() };
/// let isometry = pose.to_isometry();
/// assert_eq!(isometry.translation.vector, pose.translation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    /// Position (x, y, z) in meters.
    pub translation: Vector3<f64>,

    /// Orthonormal rotation matrix, determinant +1.
    pub rotation: Matrix3<f64>,
}

impl Pose {
    /// Extracts the pose from a homogeneous transform.
    pub fn from_transform(transform: &Transform) -> Self {
        Pose {
            translation: transform.fixed_view::<3, 1>(0, 3).into_owned(),
            rotation: transform.fixed_view::<3, 3>(0, 0).into_owned(),
        }
    }

    /// Quaternion based representation, as used by most of the nalgebra ecosystem.
    pub fn to_isometry(&self) -> Isometry3<f64> {
        let rotation = Rotation3::from_matrix_unchecked(self.rotation);
        Isometry3::from_parts(
            Translation3::from(self.translation),
            UnitQuaternion::from_rotation_matrix(&rotation),
        )
    }
}

/// Kinematics of a serial robot. Implemented by `KinematicChain`.
pub trait Kinematics {
    /// Number of joints.
    fn dof(&self) -> usize;

    /// Pose of the end effector for the given joint angles.
    fn forward(&self, qs: &[f64]) -> Result<Pose>;

    /// Accumulated transforms of the base frame and every joint frame (dof + 1 values).
    fn forward_with_joint_poses(&self, qs: &[f64]) -> Result<Vec<Transform>>;

    /// Joint angles that bring the end effector to the target position, searched
    /// starting from `initial`.
    fn inverse(&self, target: &Vector3<f64>, initial: &[f64]) -> Result<JointAngles>;
}
