//! Forward kinematics: composes the per joint Denavit-Hartenberg transforms into the pose of
//! the end effector and of every intermediate joint frame.

use crate::chain::{DhParameters, KinematicChain};
use crate::error::{KinematicsError, Result};
use crate::kinematic_traits::{Pose, Transform};
use nalgebra::Vector3;

/// Standard DH transform of a single joint.
#[rustfmt::skip]
pub fn dh_transform(theta: f64, d: f64, a: f64, alpha: f64) -> Transform {
    let (st, ct) = theta.sin_cos();
    let (sa, ca) = alpha.sin_cos();

    Transform::new(
        ct, -st * ca, st * sa, a * ct,
        st, ct * ca, -ct * sa, a * st,
        0.0, sa, ca, d,
        0.0, 0.0, 0.0, 1.0,
    )
}

fn joint_transform(q: f64, p: &DhParameters) -> Transform {
    dh_transform(q + p.theta_offset, p.d, p.a, p.alpha)
}

/// Visits the running transform after every joint, starting from the identity. Both the pose
/// and the list of all transforms are computed here, so they never drift apart.
fn accumulate(
    qs: &[f64],
    chain: &KinematicChain,
    mut visit: impl FnMut(&Transform),
) -> Result<Transform> {
    KinematicsError::check_dimension(chain.dof(), qs.len())?;

    let mut t = Transform::identity();
    visit(&t);
    for (q, p) in qs.iter().zip(chain.dh_parameters()) {
        t *= joint_transform(*q, p);
        visit(&t);
    }
    Ok(t)
}

/// Pose of the end effector. Joint limits are not checked, any angle is accepted.
pub fn forward_kinematics(qs: &[f64], chain: &KinematicChain) -> Result<Pose> {
    let t = accumulate(qs, chain, |_| {})?;
    Ok(Pose::from_transform(&t))
}

/// Accumulated transforms of the base (identity) and of every joint frame, dof + 1 in total.
/// The last one is the end effector.
pub fn get_all_transforms(qs: &[f64], chain: &KinematicChain) -> Result<Vec<Transform>> {
    let mut transforms = Vec::with_capacity(chain.dof() + 1);
    accumulate(qs, chain, |t| transforms.push(*t))?;
    Ok(transforms)
}

/// Origins of the base and of every joint frame, for drawing the arm.
pub fn joint_positions(qs: &[f64], chain: &KinematicChain) -> Result<Vec<Vector3<f64>>> {
    let mut positions = Vec::with_capacity(chain.dof() + 1);
    accumulate(qs, chain, |t| positions.push(Pose::from_transform(t).translation))?;
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    const SMALL: f64 = 1e-12;

    #[test]
    fn test_dh_transform_pure_translation() {
        let t = dh_transform(0.0, 0.4, 0.5, 0.0);
        assert_eq!(t.fixed_view::<3, 3>(0, 0).into_owned(), nalgebra::Matrix3::identity());
        assert_eq!(t[(0, 3)], 0.5);
        assert_eq!(t[(1, 3)], 0.0);
        assert_eq!(t[(2, 3)], 0.4);
        assert_eq!(t.row(3).into_owned(), nalgebra::RowVector4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_dh_transform_rotation() {
        // Rotation by 90 degrees moves the link end from x to y
        let t = dh_transform(FRAC_PI_2, 0.0, 1.0, 0.0);
        assert!(t[(0, 3)].abs() < SMALL);
        assert!((t[(1, 3)] - 1.0).abs() < SMALL);
    }

    #[test]
    fn test_reference_arm_at_zero() {
        // At zero the arm is stretched along x; the column and the wrist offsets stack up
        // on the twisted axes.
        let chain = KinematicChain::reference_arm();
        let pose = forward_kinematics(&[0.0; 6], &chain).unwrap();
        let expected = Vector3::new(1.0, -0.5, 0.4);
        assert!(
            (pose.translation - expected).norm() < SMALL,
            "Unexpected position {:?}",
            pose.translation
        );
    }

    #[test]
    fn test_base_rotation() {
        let chain = KinematicChain::planar_elbow(1.0, 1.0);
        let pose = forward_kinematics(&[FRAC_PI_2, 0.0, 0.0, 0.0, 0.0, 0.0], &chain).unwrap();
        assert!((pose.translation - Vector3::new(0.0, 2.0, 0.0)).norm() < SMALL);
    }

    #[test]
    fn test_dimension_mismatch() {
        let chain = KinematicChain::reference_arm();
        let result = forward_kinematics(&[0.0; 5], &chain);
        assert!(matches!(
            result,
            Err(KinematicsError::DimensionMismatch { expected: 6, found: 5 })
        ));
        assert!(get_all_transforms(&[0.0; 7], &chain).is_err());
    }

    #[test]
    fn test_all_transforms_count_and_identity() {
        let chain = KinematicChain::reference_arm();
        let transforms = get_all_transforms(&[0.1, 0.2, 0.3, 0.4, 0.5, 0.6], &chain).unwrap();
        assert_eq!(transforms.len(), 7);
        assert_eq!(transforms[0], Transform::identity());
    }

    #[test]
    fn test_joint_positions() {
        let chain = KinematicChain::planar_elbow(1.0, 0.5);
        let positions = joint_positions(&[0.0; 6], &chain).unwrap();
        assert_eq!(positions.len(), 7);
        assert_eq!(positions[0], Vector3::zeros());
        assert!((positions[2] - Vector3::new(1.0, 0.0, 0.0)).norm() < SMALL);
        assert!((positions[6] - Vector3::new(1.5, 0.0, 0.0)).norm() < SMALL);
    }
}
