//! Defines the kinematic chain: DH parameters and joint limits of every joint.

use crate::error::{KinematicsError, Result};
use crate::utils::deg;

/// Denavit-Hartenberg parameters of a single joint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DhParameters {
    /// Constant offset added to the commanded joint angle (radians).
    pub theta_offset: f64,

    /// Link offset along the previous z axis (meters).
    pub d: f64,

    /// Link length along the new x axis (meters).
    pub a: f64,

    /// Link twist about the new x axis (radians).
    pub alpha: f64,
}

impl DhParameters {
    pub const fn new(theta_offset: f64, d: f64, a: f64, alpha: f64) -> Self {
        DhParameters { theta_offset, d, a, alpha }
    }
}

/// Allowed rotation range of a joint, in radians. Limits are advisory: forward kinematics
/// accepts any angle and only callers (or the numerical solver, when asked) use them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointLimit {
    pub min: f64,
    pub max: f64,
}

impl JointLimit {
    pub const fn new(min: f64, max: f64) -> Self {
        JointLimit { min, max }
    }

    pub fn contains(&self, angle: f64) -> bool {
        angle >= self.min && angle <= self.max
    }

    pub fn clamp(&self, angle: f64) -> f64 {
        angle.clamp(self.min, self.max)
    }
}

/// Immutable description of a serial robot. Constructed once and then shared by reference
/// (or `Arc`) with every kinematic operation.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicChain {
    dh: Vec<DhParameters>,
    limits: Vec<JointLimit>,
}

impl KinematicChain {
    /// Creates the chain, checking that there is a limit for every joint and that
    /// every limit has min <= max.
    pub fn new(dh: Vec<DhParameters>, limits: Vec<JointLimit>) -> Result<Self> {
        if dh.is_empty() {
            return Err(KinematicsError::EmptyChain);
        }
        KinematicsError::check_dimension(dh.len(), limits.len())?;
        for (joint, limit) in limits.iter().enumerate() {
            // Written as a negation so that NaN bounds are rejected too.
            if !(limit.min <= limit.max) {
                return Err(KinematicsError::InvalidLimit {
                    joint,
                    min: limit.min,
                    max: limit.max,
                });
            }
        }
        Ok(KinematicChain { dh, limits })
    }

    pub(crate) fn from_parts_unchecked(dh: Vec<DhParameters>, limits: Vec<JointLimit>) -> Self {
        KinematicChain { dh, limits }
    }

    /// Number of joints.
    pub fn dof(&self) -> usize {
        self.dh.len()
    }

    pub fn dh_parameters(&self) -> &[DhParameters] {
        &self.dh
    }

    pub fn joint_limits(&self) -> &[JointLimit] {
        &self.limits
    }

    /// Link length (`a`) of the joint with the given index.
    pub fn link_length(&self, index: usize) -> Result<f64> {
        self.dh
            .get(index)
            .map(|p| p.a)
            .ok_or(KinematicsError::OutOfRange { index, dof: self.dof() })
    }

    /// Link lengths of all joints in chain order.
    pub fn link_lengths(&self) -> Vec<f64> {
        self.dh.iter().map(|p| p.a).collect()
    }

    /// Checks the joint angles against the joint limits.
    pub fn within_limits(&self, qs: &[f64]) -> Result<bool> {
        KinematicsError::check_dimension(self.dof(), qs.len())?;
        Ok(self.limits.iter().zip(qs).all(|(limit, &q)| limit.contains(q)))
    }

    /// Clamps every joint angle into its limits.
    pub fn clamp_to_limits(&self, qs: &mut [f64]) -> Result<()> {
        KinematicsError::check_dimension(self.dof(), qs.len())?;
        for (q, limit) in qs.iter_mut().zip(&self.limits) {
            *q = limit.clamp(*q);
        }
        Ok(())
    }

    /// Chain built from the first `joints` joints only.
    pub fn truncated(&self, joints: usize) -> Result<Self> {
        if joints == 0 || joints > self.dof() {
            return Err(KinematicsError::OutOfRange { index: joints, dof: self.dof() });
        }
        Ok(KinematicChain {
            dh: self.dh[..joints].to_vec(),
            limits: self.limits[..joints].to_vec(),
        })
    }

    /// Convert to string yaml representation (quick viewing, etc). The output can be read
    /// back with `from_yaml_str`.
    pub fn to_yaml(&self) -> String {
        let dh_rows = self
            .dh
            .iter()
            .map(|p| {
                format!(
                    "  - [{}, {}, {}, {}]\n",
                    deg(&p.theta_offset),
                    p.d,
                    p.a,
                    deg(&p.alpha)
                )
            })
            .collect::<String>();
        let limit_rows = self
            .limits
            .iter()
            .map(|l| format!("  - [{}, {}]\n", deg(&l.min), deg(&l.max)))
            .collect::<String>();
        format!(
            "# theta_offset, d, a, alpha\ndh_parameters:\n{}joint_limits:\n{}",
            dh_rows, limit_rows
        )
    }
}
