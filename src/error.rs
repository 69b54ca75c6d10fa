//! Error kinds reported by the kinematics core

use thiserror::Error;

use crate::utils::is_valid;

#[cfg(feature = "allow_filesystem")]
use crate::parameter_error::ParameterError;

/// Every failure the core can report. All errors are returned synchronously to the
/// immediate caller, nothing is retried and no partial result is produced.
#[derive(Debug, Error)]
pub enum KinematicsError {
    /// Joint vector (or start/end pair) has the wrong number of elements.
    #[error("dimension mismatch: expected {expected} values, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// Numerical solver did not reach the target. Carries the best position error (meters).
    #[error("inverse kinematics solution not found, remaining error {error:.6}")]
    IkUnreachable { error: f64 },

    /// Closed form solver target lies beyond the reach of the arm.
    #[error("target at distance {distance:.6} is out of reach (maximum {reach:.6})")]
    IkOutOfReach { distance: f64, reach: f64 },

    /// Trajectory requested with fewer than two waypoints.
    #[error("at least two trajectory points are required, got {points}")]
    InvalidPointCount { points: usize },

    /// Joint index outside of the chain.
    #[error("joint index {index} out of range for a chain of {dof} joints")]
    OutOfRange { index: usize, dof: usize },

    /// Joint limit with min greater than max.
    #[error("joint {joint} has invalid limits: min {min} > max {max}")]
    InvalidLimit { joint: usize, min: f64, max: f64 },

    /// Joint angles or target contain NaN or infinite values.
    #[error("input contains non finite values: {0:?}")]
    NonFinite(Vec<f64>),

    /// Closed form solver needs positive upper arm and forearm lengths.
    #[error("link {index} must have a positive length, got {length}")]
    InvalidLinkLength { index: usize, length: f64 },

    /// Chain without joints.
    #[error("kinematic chain must have at least one joint")]
    EmptyChain,

    /// Chain configuration could not be loaded.
    #[cfg(feature = "allow_filesystem")]
    #[error("chain configuration error: {0}")]
    Configuration(#[from] ParameterError),
}

impl KinematicsError {
    pub(crate) fn check_dimension(expected: usize, found: usize) -> Result<()> {
        if expected != found {
            return Err(KinematicsError::DimensionMismatch { expected, found });
        }
        Ok(())
    }

    pub(crate) fn check_finite(values: &[f64]) -> Result<()> {
        if !is_valid(values) {
            return Err(KinematicsError::NonFinite(values.to_vec()));
        }
        Ok(())
    }
}

pub type Result<T> = std::result::Result<T, KinematicsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_dimension() {
        assert!(KinematicsError::check_dimension(6, 6).is_ok());
        match KinematicsError::check_dimension(6, 5) {
            Err(KinematicsError::DimensionMismatch { expected, found }) => {
                assert_eq!(expected, 6);
                assert_eq!(found, 5);
            }
            other => panic!("Unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_messages() {
        let e = KinematicsError::IkUnreachable { error: 0.25 };
        assert_eq!(
            e.to_string(),
            "inverse kinematics solution not found, remaining error 0.250000"
        );
        let e = KinematicsError::OutOfRange { index: 7, dof: 6 };
        assert_eq!(e.to_string(), "joint index 7 out of range for a chain of 6 joints");
    }

    #[test]
    fn test_check_finite() {
        assert!(KinematicsError::check_finite(&[0.0, -1.5, 3.0]).is_ok());
        assert!(matches!(
            KinematicsError::check_finite(&[0.0, f64::NAN]),
            Err(KinematicsError::NonFinite(_))
        ));
        assert!(KinematicsError::check_finite(&[f64::NEG_INFINITY]).is_err());
    }
}
