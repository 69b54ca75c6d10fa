//! Inverse kinematics. Two independent solvers are provided:
//!
//! - [`solve_ik`]: numerical, works for any chain. Minimizes the distance between the end
//!   effector and the target with a bounded damped least squares (Levenberg-Marquardt) search.
//! - [`solve_ik_analytical_3dof`]: closed form for the base + shoulder + elbow subset of the arm,
//!   wrist joints stay at zero.

use crate::chain::KinematicChain;
use crate::error::{KinematicsError, Result};
use crate::forward::forward_kinematics;
use crate::jacobian::compute_position_jacobian;
use crate::kinematic_traits::{JointAngles, Joints};
use nalgebra::{DVector, Matrix3, Vector3};
use std::f64::consts::PI;
use tracing::{debug, trace};

/// Default iteration cap of the numerical solver.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Position error (meters) below which a numerical solution is accepted even if the
/// search did not converge.
pub const ACCEPTANCE_TOLERANCE: f64 = 0.01;

/// Box constraints applied to the joints by the numerical solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IkBounds {
    /// The same range for every joint.
    Uniform { min: f64, max: f64 },

    /// The chain's own joint limits.
    ChainLimits,
}

impl Default for IkBounds {
    fn default() -> Self {
        IkBounds::Uniform { min: -PI, max: PI }
    }
}

impl IkBounds {
    fn resolve(&self, chain: &KinematicChain) -> Vec<(f64, f64)> {
        match *self {
            IkBounds::Uniform { min, max } => vec![(min, max); chain.dof()],
            IkBounds::ChainLimits => chain
                .joint_limits()
                .iter()
                .map(|limit| (limit.min, limit.max))
                .collect(),
        }
    }
}

/// Configuration of the numerical solver.
#[derive(Debug, Clone)]
pub struct IkConfig {
    /// Hard cap on solver iterations. Every iteration evaluates one Jacobian.
    pub max_iterations: usize,

    /// Joint ranges the search is confined to.
    pub bounds: IkBounds,

    /// Position error (meters) that counts as convergence.
    pub convergence_tolerance: f64,

    /// Accepted steps shorter than this (radians) end the search.
    pub step_tolerance: f64,

    /// Position error (meters) still accepted when the search did not converge.
    pub acceptance_tolerance: f64,

    /// Initial damping (lambda) of the least squares step.
    pub damping: f64,

    /// Joint perturbation used for the numerical Jacobian.
    pub epsilon: f64,
}

impl Default for IkConfig {
    fn default() -> Self {
        IkConfig {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            bounds: IkBounds::default(),
            convergence_tolerance: 1e-6,
            step_tolerance: 1e-12,
            acceptance_tolerance: ACCEPTANCE_TOLERANCE,
            damping: 0.01,
            epsilon: 1e-7,
        }
    }
}

// Damping outside this range means the search is stuck.
const MIN_DAMPING: f64 = 1e-9;
const MAX_DAMPING: f64 = 1e6;

/// Outcome of a successful numerical solve.
#[derive(Debug, Clone)]
pub struct IkSolution {
    pub joints: JointAngles,

    /// Remaining distance between the end effector and the target (meters).
    pub error: f64,

    /// Number of iterations used.
    pub iterations: usize,

    /// Whether the error dropped below the convergence tolerance.
    pub converged: bool,
}

/// Numerical inverse kinematics: joint angles that bring the end effector to `target`,
/// searched from `initial_angles` within [-pi, pi] for every joint.
///
/// The result is a local optimum and depends on the initial angles.
/// ```
/// use nalgebra::Vector3;
/// use dh_kinematics::chain::KinematicChain;
/// use dh_kinematics::forward::forward_kinematics;
/// use dh_kinematics::inverse::solve_ik;
///
/// let chain = KinematicChain::reference_arm();
/// let target = forward_kinematics(&[0.3, 0.2, 0.1, 0.2, 0.1, 0.0], &chain).unwrap().translation;
/// let joints = solve_ik(&target, &[0.25, 0.15, 0.15, 0.2, 0.1, 0.0], &chain, 1000).unwrap();
/// let reached = forward_kinematics(&joints, &chain).unwrap().translation;
/// assert!((reached - target).norm() < 0.01);
/// ```
pub fn solve_ik(
    target: &Vector3<f64>,
    initial_angles: &[f64],
    chain: &KinematicChain,
    max_iterations: usize,
) -> Result<JointAngles> {
    let config = IkConfig { max_iterations, ..IkConfig::default() };
    solve_ik_with(target, initial_angles, chain, &config).map(|solution| solution.joints)
}

/// Numerical inverse kinematics with explicit configuration.
///
/// Fails with `IkUnreachable` carrying the best error achieved when the search neither
/// converged nor came closer than `acceptance_tolerance`.
pub fn solve_ik_with(
    target: &Vector3<f64>,
    initial_angles: &[f64],
    chain: &KinematicChain,
    config: &IkConfig,
) -> Result<IkSolution> {
    KinematicsError::check_dimension(chain.dof(), initial_angles.len())?;
    KinematicsError::check_finite(initial_angles)?;
    KinematicsError::check_finite(target.as_slice())?;
    let bounds = config.bounds.resolve(chain);
    let project = |q: &mut DVector<f64>| {
        for (value, (min, max)) in q.iter_mut().zip(&bounds) {
            *value = value.clamp(*min, *max);
        }
    };
    let position_error = |q: &DVector<f64>| -> Result<(Vector3<f64>, f64)> {
        let residual = target - forward_kinematics(q.as_slice(), chain)?.translation;
        Ok((residual, residual.norm()))
    };

    let mut q = DVector::from_column_slice(initial_angles);
    project(&mut q);
    let (mut residual, mut error) = position_error(&q)?;
    let mut damping = config.damping;
    let mut converged = false;
    let mut iterations = 0;

    debug!(
        "IK start: target [{:.4}, {:.4}, {:.4}], error {:.6}",
        target.x, target.y, target.z, error
    );

    while iterations < config.max_iterations {
        if error < config.convergence_tolerance {
            converged = true;
            break;
        }
        iterations += 1;

        // dq = J^T (J J^T + lambda^2 I)^-1 e
        let jacobian = compute_position_jacobian(chain, q.as_slice(), config.epsilon)?;
        let damped = &jacobian * jacobian.transpose() + Matrix3::identity() * (damping * damping);
        let Some(damped_inverse) = damped.try_inverse() else {
            damping *= 10.0;
            if damping > MAX_DAMPING {
                break;
            }
            continue;
        };
        let step = jacobian.transpose() * (damped_inverse * residual);

        let mut candidate = &q + step;
        project(&mut candidate);
        let (candidate_residual, candidate_error) = position_error(&candidate)?;
        trace!(
            "IK iteration {}: error {:.8}, candidate {:.8}, damping {:e}",
            iterations, error, candidate_error, damping
        );

        if candidate_error < error {
            let step_length = (&candidate - &q).norm();
            q = candidate;
            residual = candidate_residual;
            error = candidate_error;
            damping = (damping / 2.0).max(MIN_DAMPING);
            if step_length < config.step_tolerance {
                break;
            }
        } else {
            damping *= 10.0;
            if damping > MAX_DAMPING {
                break;
            }
        }
    }
    if !converged && error < config.convergence_tolerance {
        converged = true;
    }

    debug!(
        "IK finished after {} iterations: error {:.6}, converged {}",
        iterations, error, converged
    );

    if converged || error < config.acceptance_tolerance {
        Ok(IkSolution {
            joints: q.iter().copied().collect(),
            error,
            iterations,
            converged,
        })
    } else {
        Err(KinematicsError::IkUnreachable { error })
    }
}

/// Closed form inverse kinematics for the first three joints: base rotation, shoulder and
/// elbow (elbow down). `link_lengths` must hold at least three values, only the second and
/// the third (upper arm and forearm) are used and both must be positive. Wrist joints are
/// returned as zero.
///
/// Targets closer to the shoulder than |l2 - l3| are not detected.
/// ```
/// use nalgebra::Vector3;
/// use dh_kinematics::inverse::solve_ik_analytical_3dof;
///
/// let target = Vector3::new(2.0, 0.0, 0.0);
/// let joints = solve_ik_analytical_3dof(&target, &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(joints, [0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
/// ```
pub fn solve_ik_analytical_3dof(target: &Vector3<f64>, link_lengths: &[f64]) -> Result<Joints> {
    if link_lengths.len() < 3 {
        return Err(KinematicsError::DimensionMismatch {
            expected: 3,
            found: link_lengths.len(),
        });
    }
    KinematicsError::check_finite(target.as_slice())?;
    for index in [1, 2] {
        let length = link_lengths[index];
        if !(length.is_finite() && length > 0.0) {
            return Err(KinematicsError::InvalidLinkLength { index, length });
        }
    }
    let (x, y, z) = (target.x, target.y, target.z);
    let (l2, l3) = (link_lengths[1], link_lengths[2]);

    let theta1 = y.atan2(x);
    let r = (x * x + y * y).sqrt();
    let distance = (r * r + z * z).sqrt();

    let reach = l2 + l3;
    if distance > reach {
        return Err(KinematicsError::IkOutOfReach { distance, reach });
    }

    // Rounding may push the cosine slightly outside [-1, 1]
    let cos_theta3 = (distance * distance - l2 * l2 - l3 * l3) / (2.0 * l2 * l3);
    let theta3 = cos_theta3.clamp(-1.0, 1.0).acos();
    let theta2 = z.atan2(r) - (l3 * theta3.sin()).atan2(l2 + l3 * theta3.cos());

    Ok([theta1, theta2, theta3, 0.0, 0.0, 0.0])
}

/// Closed form solver taking the link lengths from the chain.
pub fn solve_ik_analytical_for_chain(
    target: &Vector3<f64>,
    chain: &KinematicChain,
) -> Result<Joints> {
    solve_ik_analytical_3dof(target, &chain.link_lengths())
}
