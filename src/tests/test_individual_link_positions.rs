#[cfg(test)]
mod tests {
    use nalgebra::Vector3;

    use crate::chain::KinematicChain;
    use crate::forward::{get_all_transforms, joint_positions};

    // Origins of the base frame and of every joint frame of the reference arm at zero angles.
    fn expected_origins() -> Vec<Vector3<f64>> {
        vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 0.4),
            Vector3::new(0.5, 0.0, 0.4),
            Vector3::new(1.0, 0.0, 0.4),
            Vector3::new(1.0, -0.3, 0.4),
            Vector3::new(1.0, -0.3, 0.4),
            Vector3::new(1.0, -0.5, 0.4),
        ]
    }

    #[test]
    fn test_individual_link_positions() {
        let chain = KinematicChain::reference_arm();
        let positions = joint_positions(&[0.0; 6], &chain).expect("Forward kinematics failed");
        let expected = expected_origins();
        assert_eq!(positions.len(), expected.len());

        for (i, (computed, expected)) in positions.iter().zip(&expected).enumerate() {
            assert!(
                (computed - expected).norm() < 1e-9,
                "Joint {}: expected {:?}, computed {:?}",
                i,
                expected,
                computed
            );
        }
    }

    #[test]
    fn test_link_positions_match_transforms() {
        let chain = KinematicChain::reference_arm();
        let qs = [0.1, -0.2, 0.3, -0.4, 0.5, -0.6];
        let positions = joint_positions(&qs, &chain).unwrap();
        let transforms = get_all_transforms(&qs, &chain).unwrap();
        for (position, transform) in positions.iter().zip(&transforms) {
            assert_eq!(*position, transform.fixed_view::<3, 1>(0, 3).into_owned());
        }
    }
}
