//! Trajectory planning: time parameterized waypoint sequences between two joint
//! configurations or two Cartesian positions.
//!
//! Every waypoint is `start + s(t) * (end - start)` with `t = i / (points - 1)` and `s` given
//! by the chosen [`Profile`]. The first waypoint is exactly `start`, the last is exactly `end`.

use crate::error::{KinematicsError, Result};
use crate::kinematic_traits::{JointAngles, Trajectory};
use nalgebra::Vector3;

/// Number of waypoints used when the caller does not specify it.
pub const DEFAULT_POINTS: usize = 50;

/// Time scaling s(t) mapping t in [0, 1] onto [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// s = t. Constant velocity, velocity jumps at the ends.
    Linear,

    /// Smoothstep s = 3t² - 2t³. Zero velocity at both ends.
    Cubic,

    /// s = 6t⁵ - 15t⁴ + 10t³. Zero velocity and zero acceleration at both ends.
    Quintic,
}

impl Profile {
    pub fn blend(&self, t: f64) -> f64 {
        match self {
            Profile::Linear => t,
            Profile::Cubic => 3.0 * t * t - 2.0 * t * t * t,
            Profile::Quintic => t * t * t * (10.0 - 15.0 * t + 6.0 * t * t),
        }
    }

    /// ds/dt
    pub fn velocity(&self, t: f64) -> f64 {
        match self {
            Profile::Linear => 1.0,
            Profile::Cubic => 6.0 * t - 6.0 * t * t,
            Profile::Quintic => 30.0 * t * t * (1.0 - t) * (1.0 - t),
        }
    }

    /// d²s/dt²
    pub fn acceleration(&self, t: f64) -> f64 {
        match self {
            Profile::Linear => 0.0,
            Profile::Cubic => 6.0 - 12.0 * t,
            Profile::Quintic => 60.0 * t * (1.0 - t) * (1.0 - 2.0 * t),
        }
    }
}

impl std::str::FromStr for Profile {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(Profile::Linear),
            "cubic" | "smoothstep" => Ok(Profile::Cubic),
            "quintic" => Ok(Profile::Quintic),
            other => Err(format!("unknown profile '{}', use linear, cubic or quintic", other)),
        }
    }
}

/// Interpolation parameters t_i = i / (points - 1). The last one is exactly 1.0.
pub fn interpolation_parameters(points: usize) -> Result<Vec<f64>> {
    if points < 2 {
        return Err(KinematicsError::InvalidPointCount { points });
    }
    let last = (points - 1) as f64;
    Ok((0..points).map(|i| i as f64 / last).collect())
}

// (1 - s) * a + s * b is exactly a at s = 0 and exactly b at s = 1
#[inline]
fn mix(a: f64, b: f64, s: f64) -> f64 {
    (1.0 - s) * a + s * b
}

/// Joint space trajectory with the given profile.
pub fn joint_trajectory(
    start: &[f64],
    end: &[f64],
    points: usize,
    profile: Profile,
) -> Result<Trajectory<JointAngles>> {
    KinematicsError::check_dimension(start.len(), end.len())?;
    let parameters = interpolation_parameters(points)?;
    Ok(parameters
        .into_iter()
        .map(|t| {
            let s = profile.blend(t);
            start.iter().zip(end).map(|(a, b)| mix(*a, *b, s)).collect()
        })
        .collect())
}

/// Joint space trajectory with the cubic (smoothstep) profile.
pub fn plan_trajectory(
    start: &[f64],
    end: &[f64],
    points: usize,
) -> Result<Trajectory<JointAngles>> {
    joint_trajectory(start, end, points, Profile::Cubic)
}

/// Joint space trajectory with the quintic profile, for starts and stops without
/// acceleration jumps.
pub fn quintic_trajectory(
    start: &[f64],
    end: &[f64],
    points: usize,
) -> Result<Trajectory<JointAngles>> {
    joint_trajectory(start, end, points, Profile::Quintic)
}

/// Cartesian trajectory of positions with the given profile.
pub fn cartesian_trajectory(
    start: &Vector3<f64>,
    end: &Vector3<f64>,
    points: usize,
    profile: Profile,
) -> Result<Trajectory<Vector3<f64>>> {
    let parameters = interpolation_parameters(points)?;
    Ok(parameters
        .into_iter()
        .map(|t| {
            let s = profile.blend(t);
            start.zip_map(end, |a, b| mix(a, b, s))
        })
        .collect())
}

/// Straight line Cartesian trajectory with constant spacing.
pub fn plan_cartesian_trajectory(
    start: &Vector3<f64>,
    end: &Vector3<f64>,
    points: usize,
) -> Result<Trajectory<Vector3<f64>>> {
    cartesian_trajectory(start, end, points, Profile::Linear)
}
