extern crate nalgebra as na;

use crate::error::Result;
use crate::kinematic_traits::Kinematics;
use na::Matrix3xX;

/// Function to compute the positional Jacobian for a given robot and joint configuration
///
/// # Arguments
///
/// * `robot` - A reference to the robot implementing the Kinematics trait
/// * `qs` - Joint configuration, one value per joint
/// * `epsilon` - A small value used for numerical differentiation
///
/// # Returns
///
/// A 3xN matrix. Column `i` is the derivative of the end effector position by joint `i`,
/// estimated with forward differences.
pub fn compute_position_jacobian(
    robot: &impl Kinematics,
    qs: &[f64],
    epsilon: f64,
) -> Result<Matrix3xX<f64>> {
    let current_position = robot.forward(qs)?.translation;
    let mut jacobian = Matrix3xX::zeros(qs.len());
    let mut perturbed_qs = qs.to_vec();

    for i in 0..qs.len() {
        perturbed_qs[i] = qs[i] + epsilon;
        let perturbed_position = robot.forward(&perturbed_qs)?.translation;
        perturbed_qs[i] = qs[i];

        let delta_position = (perturbed_position - current_position) / epsilon;
        jacobian.set_column(i, &delta_position);
    }

    Ok(jacobian)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::KinematicChain;
    use std::f64::consts::FRAC_PI_2;

    const EPSILON: f64 = 1e-7;

    #[test]
    fn test_planar_elbow_stretched() {
        // Arm stretched along x with 1 m + 1 m links. Turning the base moves the tip
        // along y by the full reach, the shoulder lifts it by 2 m/rad, the elbow by 1 m/rad.
        let chain = KinematicChain::planar_elbow(1.0, 1.0);
        let jacobian = compute_position_jacobian(&chain, &[0.0; 6], EPSILON).unwrap();
        assert_eq!(jacobian.ncols(), 6);

        let expected = [
            [0.0, 2.0, 0.0],
            [0.0, 0.0, 2.0],
            [0.0, 0.0, 1.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ];
        for (i, column) in expected.iter().enumerate() {
            for j in 0..3 {
                assert!(
                    (jacobian[(j, i)] - column[j]).abs() < 1e-5,
                    "jacobian[{},{}] = {} expected {}",
                    j, i, jacobian[(j, i)], column[j]
                );
            }
        }
    }

    #[test]
    fn test_elbow_bent() {
        let chain = KinematicChain::planar_elbow(1.0, 1.0);
        let qs = [0.0, 0.0, FRAC_PI_2, 0.0, 0.0, 0.0];
        let jacobian = compute_position_jacobian(&chain, &qs, EPSILON).unwrap();
        // Tip at (1, 0, 1): elbow rotation now moves it back along -x
        assert!((jacobian[(0, 2)] + 1.0).abs() < 1e-5);
        assert!(jacobian[(2, 2)].abs() < 1e-5);
    }

    #[test]
    fn test_dimension_mismatch() {
        let chain = KinematicChain::reference_arm();
        assert!(compute_position_jacobian(&chain, &[0.0; 3], EPSILON).is_err());
    }
}
