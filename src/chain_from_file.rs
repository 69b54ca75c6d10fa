//! Supports reading the kinematic chain from a YAML file (optional)

use std::f64::consts::PI;
use std::path::Path;

use serde::Deserialize;
use serde_saphyr::Options;

use crate::chain::{DhParameters, JointLimit, KinematicChain};
use crate::error::Result;
use crate::parameter_error::ParameterError;

#[derive(Deserialize)]
struct Root {
    /// Rows of theta_offset, d, a, alpha
    dh_parameters: Vec<Vec<f64>>,
    /// Optional rows of min, max
    #[serde(default)]
    joint_limits: Option<Vec<Vec<f64>>>,
}

impl KinematicChain {
    /// Read the chain from YAML file. YAML file like this is supported:
    /// ```yaml
    /// # theta_offset, d, a, alpha
    /// dh_parameters:
    ///   - [0, 0.4, 0, deg(90)]
    ///   - [0, 0, 0.5, 0]
    ///   - [0, 0, 0.5, 0]
    /// joint_limits:
    ///   - [deg(-180), deg(180)]
    ///   - [deg(-90), deg(90)]
    ///   - [deg(-90), deg(90)]
    /// ```
    /// Angles are radians unless written as deg(angle) (serde_saphyr angle conversions).
    /// `joint_limits` is optional, [-pi, pi] is used for every joint when it is missing.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(ParameterError::from)?;
        Self::from_yaml_str(&contents)
    }

    /// Same as `from_yaml_file`, reading from a string.
    pub fn from_yaml_str(contents: &str) -> Result<Self> {
        let root: Root = serde_saphyr::from_str_with_options(
            contents,
            Options { angle_conversions: true, ..Default::default() },
        )
        .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;

        let dh = root
            .dh_parameters
            .into_iter()
            .map(|row| {
                let [theta_offset, d, a, alpha] = to_row::<4>(row, "dh_parameters")?;
                Ok(DhParameters { theta_offset, d, a, alpha })
            })
            .collect::<std::result::Result<Vec<_>, ParameterError>>()?;

        let limits = match root.joint_limits {
            None => vec![JointLimit::new(-PI, PI); dh.len()],
            Some(rows) => rows
                .into_iter()
                .map(|row| {
                    let [min, max] = to_row::<2>(row, "joint_limits")?;
                    Ok(JointLimit { min, max })
                })
                .collect::<std::result::Result<Vec<_>, ParameterError>>()?,
        };

        KinematicChain::new(dh, limits)
    }
}

/// Fixed size row with all values finite.
fn to_row<const N: usize>(
    row: Vec<f64>,
    field: &str,
) -> std::result::Result<[f64; N], ParameterError> {
    let found = row.len();
    let values: [f64; N] = row.try_into().map_err(|_| ParameterError::InvalidLength {
        field: field.to_string(),
        expected: N,
        found,
    })?;
    if let Some(bad) = values.iter().find(|v| !v.is_finite()) {
        return Err(ParameterError::ParseError(format!(
            "{} values must be finite (got {})",
            field, bad
        )));
    }
    Ok(values)
}
