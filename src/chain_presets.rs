//! Hardcoded kinematic chains

use crate::chain::{DhParameters, JointLimit, KinematicChain};
use std::f64::consts::{FRAC_PI_2, PI};

impl KinematicChain {
    /// Six joint reference arm: base rotation on a 0.4 m column, two 0.5 m links in the
    /// vertical plane, and a three joint wrist (0.3 m and 0.2 m offsets).
    pub fn reference_arm() -> Self {
        Self::from_static(
            [
                DhParameters::new(0.0, 0.4, 0.0, FRAC_PI_2),
                DhParameters::new(0.0, 0.0, 0.5, 0.0),
                DhParameters::new(0.0, 0.0, 0.5, 0.0),
                DhParameters::new(0.0, 0.3, 0.0, FRAC_PI_2),
                DhParameters::new(0.0, 0.0, 0.0, -FRAC_PI_2),
                DhParameters::new(0.0, 0.2, 0.0, 0.0),
            ],
            [
                JointLimit::new(-PI, PI),
                JointLimit::new(-FRAC_PI_2, FRAC_PI_2),
                JointLimit::new(-FRAC_PI_2, FRAC_PI_2),
                JointLimit::new(-PI, PI),
                JointLimit::new(-FRAC_PI_2, FRAC_PI_2),
                JointLimit::new(-PI, PI),
            ],
        )
    }

    /// Six joint arm with the shoulder at the base origin, upper arm `l2`, forearm `l3` and
    /// a wrist without offsets. This is the geometry the closed form 3-DOF solver assumes,
    /// so its solutions map back to the target exactly through forward kinematics.
    pub fn planar_elbow(l2: f64, l3: f64) -> Self {
        Self::from_static(
            [
                DhParameters::new(0.0, 0.0, 0.0, FRAC_PI_2),
                DhParameters::new(0.0, 0.0, l2, 0.0),
                DhParameters::new(0.0, 0.0, l3, 0.0),
                DhParameters::new(0.0, 0.0, 0.0, 0.0),
                DhParameters::new(0.0, 0.0, 0.0, 0.0),
                DhParameters::new(0.0, 0.0, 0.0, 0.0),
            ],
            [JointLimit::new(-PI, PI); 6],
        )
    }

    // Presets are checked by the tests below, no need to validate at runtime.
    fn from_static(dh: [DhParameters; 6], limits: [JointLimit; 6]) -> Self {
        KinematicChain::from_parts_unchecked(dh.to_vec(), limits.to_vec())
    }
}

impl Default for KinematicChain {
    fn default() -> Self {
        Self::reference_arm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for chain in [KinematicChain::reference_arm(), KinematicChain::planar_elbow(1.0, 0.5)] {
            let rebuilt = KinematicChain::new(
                chain.dh_parameters().to_vec(),
                chain.joint_limits().to_vec(),
            );
            assert_eq!(rebuilt.expect("preset must be valid"), chain);
        }
    }

    #[test]
    fn test_reference_arm_link_lengths() {
        let chain = KinematicChain::default();
        assert_eq!(chain.dof(), 6);
        assert_eq!(chain.link_lengths(), vec![0.0, 0.5, 0.5, 0.0, 0.0, 0.0]);
    }
}
