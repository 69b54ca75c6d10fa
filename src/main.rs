use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nalgebra::Vector3;
use tracing_subscriber::EnvFilter;

use dh_kinematics::chain::KinematicChain;
use dh_kinematics::forward::{forward_kinematics, joint_positions};
use dh_kinematics::inverse::{
    DEFAULT_MAX_ITERATIONS, IkBounds, IkConfig, solve_ik_analytical_for_chain, solve_ik_with,
};
use dh_kinematics::trajectory::{DEFAULT_POINTS, Profile, cartesian_trajectory, joint_trajectory};
use dh_kinematics::utils::{as_radians, dump_joints, dump_pose, dump_trajectory, format_position};

/// Kinematics of a serial robot arm described by Denavit-Hartenberg parameters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// YAML file with the chain. The built-in six joint reference arm is used if not given.
    #[arg(long, global = true)]
    chain: Option<PathBuf>,

    /// Joint angles on input are in degrees rather than radians.
    #[arg(long, global = true)]
    degrees: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the chain parameters and joint limits.
    Info,

    /// Forward kinematics: pose of the end effector and origins of all joints.
    Fk {
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        angles: Vec<f64>,
    },

    /// Numerical inverse kinematics for a target position.
    Ik {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,

        /// Initial joint angles, zeros if not given.
        #[arg(long, num_args = 1.., allow_negative_numbers = true)]
        initial: Option<Vec<f64>>,

        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,

        /// Restrict the search to the joint limits of the chain instead of [-pi, pi].
        #[arg(long)]
        chain_limits: bool,
    },

    /// Closed form inverse kinematics of the base, shoulder and elbow joints.
    Ik3 {
        #[arg(allow_negative_numbers = true)]
        x: f64,
        #[arg(allow_negative_numbers = true)]
        y: f64,
        #[arg(allow_negative_numbers = true)]
        z: f64,
    },

    /// Joint space trajectory between two configurations.
    Trajectory {
        #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
        start: Vec<f64>,
        #[arg(long, required = true, num_args = 1.., allow_negative_numbers = true)]
        end: Vec<f64>,
        #[arg(long, default_value_t = DEFAULT_POINTS)]
        points: usize,
        /// linear, cubic or quintic
        #[arg(long, default_value = "cubic")]
        profile: Profile,
    },

    /// Cartesian trajectory between two positions.
    Cartesian {
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true)]
        start: Vec<f64>,
        #[arg(long, required = true, num_args = 3, allow_negative_numbers = true)]
        end: Vec<f64>,
        #[arg(long, default_value_t = DEFAULT_POINTS)]
        points: usize,
        /// linear, cubic or quintic
        #[arg(long, default_value = "linear")]
        profile: Profile,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let chain = match &cli.chain {
        Some(path) => KinematicChain::from_yaml_file(path)
            .with_context(|| format!("Failed to read chain from {}", path.display()))?,
        None => KinematicChain::reference_arm(),
    };
    let angles = |values: &[f64]| -> Vec<f64> {
        if cli.degrees { as_radians(values) } else { values.to_vec() }
    };

    match &cli.command {
        Command::Info => {
            println!("Joints: {}", chain.dof());
            print!("{}", chain.to_yaml());
        }
        Command::Fk { angles: values } => {
            let qs = angles(values.as_slice());
            let pose = forward_kinematics(&qs, &chain)?;
            dump_pose(&pose);
            println!("Joint positions:");
            for (i, position) in joint_positions(&qs, &chain)?.iter().enumerate() {
                println!("{:3}: {}", i, format_position(position));
            }
        }
        Command::Ik { x, y, z, initial, max_iterations, chain_limits } => {
            let initial = match initial {
                Some(values) => angles(values.as_slice()),
                None => vec![0.0; chain.dof()],
            };
            let config = IkConfig {
                max_iterations: *max_iterations,
                bounds: if *chain_limits { IkBounds::ChainLimits } else { IkBounds::default() },
                ..IkConfig::default()
            };
            let solution = solve_ik_with(&Vector3::new(*x, *y, *z), &initial, &chain, &config)?;
            dump_joints(&solution.joints);
            println!(
                "error: {:.6}, iterations: {}, converged: {}",
                solution.error, solution.iterations, solution.converged
            );
        }
        Command::Ik3 { x, y, z } => {
            let joints = solve_ik_analytical_for_chain(&Vector3::new(*x, *y, *z), &chain)?;
            dump_joints(&joints);
        }
        Command::Trajectory { start, end, points, profile } => {
            let (start, end) = (angles(start.as_slice()), angles(end.as_slice()));
            let trajectory = joint_trajectory(&start, &end, *points, *profile)?;
            dump_trajectory(&trajectory);
        }
        Command::Cartesian { start, end, points, profile } => {
            let start = Vector3::from_column_slice(start);
            let end = Vector3::from_column_slice(end);
            let trajectory = cartesian_trajectory(&start, &end, *points, *profile)?;
            for (i, position) in trajectory.iter().enumerate() {
                println!("{:3}: {}", i, format_position(position));
            }
        }
    }
    Ok(())
}
