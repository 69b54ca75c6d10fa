use crate::chain::KinematicChain;
use crate::error::Result;
use crate::forward::{forward_kinematics, get_all_transforms};
use crate::inverse::{IkConfig, solve_ik_with};
use crate::kinematic_traits::{JointAngles, Kinematics, Pose, Transform};
use nalgebra::Vector3;

impl Kinematics for KinematicChain {
    fn dof(&self) -> usize {
        KinematicChain::dof(self)
    }

    fn forward(&self, qs: &[f64]) -> Result<Pose> {
        forward_kinematics(qs, self)
    }

    fn forward_with_joint_poses(&self, qs: &[f64]) -> Result<Vec<Transform>> {
        get_all_transforms(qs, self)
    }

    /// Numerical inverse kinematics with the default configuration.
    fn inverse(&self, target: &Vector3<f64>, initial: &[f64]) -> Result<JointAngles> {
        solve_ik_with(target, initial, self, &IkConfig::default()).map(|solution| solution.joints)
    }
}
