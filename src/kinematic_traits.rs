//! Defines the data types and the kinematics trait of the two-link planar arm.

use crate::planning_error::SolverError;
use crate::utils::wrap_degrees;
use nalgebra::Point2;
use std::fmt;

/// Point2D is the position of the arm tip in the working plane. Units are the units
/// of the reach (for the drawing arm, millimeters).
/// ```
/// use rs_plotter_arm::kinematic_traits::Point2D;
///
/// let p = Point2D::new(10.0, 1.0);
/// let q = Point2D::new(-10.0, 1.0);
/// assert_eq!(nalgebra::distance(&p, &q), 20.0);
/// ```
pub type Point2D = Point2<f64>;

/// One configuration of the arm: absolute directions of the two links, in degrees,
/// measured clockwise from the +y axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointAngles {
    pub theta1: f64,
    pub theta2: f64,
}

impl JointAngles {
    pub fn new(theta1: f64, theta2: f64) -> Self {
        JointAngles { theta1, theta2 }
    }

    /// The same link directions, assigned to the links in the opposite order.
    /// This is the other elbow configuration reaching the same tip position.
    pub fn mirrored(&self) -> Self {
        JointAngles { theta1: self.theta2, theta2: self.theta1 }
    }

    /// Angular distance to the other configuration in degrees: sum of rotations both
    /// joints must make, taking the shorter way around.
    pub fn distance(&self, other: &JointAngles) -> f64 {
        wrap_degrees(self.theta1 - other.theta1).abs()
            + wrap_degrees(self.theta2 - other.theta2).abs()
    }

    /// Largest rotation any single joint must make to reach the other configuration.
    pub fn max_step(&self, other: &JointAngles) -> f64 {
        wrap_degrees(self.theta1 - other.theta1).abs()
            .max(wrap_degrees(self.theta2 - other.theta2).abs())
    }

    /// Checks if both angles are finite
    pub fn is_valid(&self) -> bool {
        self.theta1.is_finite() && self.theta2.is_finite()
    }
}

impl From<(f64, f64)> for JointAngles {
    fn from((theta1, theta2): (f64, f64)) -> Self {
        JointAngles { theta1, theta2 }
    }
}

impl From<JointAngles> for (f64, f64) {
    fn from(joints: JointAngles) -> Self {
        (joints.theta1, joints.theta2)
    }
}

impl fmt::Display for JointAngles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:7.2} {:7.2}]", self.theta1, self.theta2)
    }
}

/// Selects one of the two elbow configurations returned by the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Elbow {
    /// Solution `(base + elbow, base - elbow)`.
    #[default]
    Primary,

    /// Solution `(base - elbow, base + elbow)`.
    Mirrored,
}

impl Elbow {
    /// Name as used in the configuration files and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Elbow::Primary => "primary",
            Elbow::Mirrored => "mirrored",
        }
    }

    pub fn from_name(name: &str) -> Option<Elbow> {
        match name.trim().to_ascii_lowercase().as_str() {
            "primary" => Some(Elbow::Primary),
            "mirrored" => Some(Elbow::Mirrored),
            _ => None,
        }
    }

    /// Picks the configuration this value stands for.
    pub fn select(&self, solutions: &Solutions) -> JointAngles {
        match self {
            Elbow::Primary => solutions[0],
            Elbow::Mirrored => solutions[1],
        }
    }
}

/// Both elbow configurations for a reachable target, primary first. At the edge of
/// the envelope (arm fully stretched) the two are identical.
pub type Solutions = [JointAngles; 2];

pub trait Kinematics {
    /// Find both elbow configurations that place the tip at the given point.
    fn inverse(&self, target: &Point2D) -> Result<Solutions, SolverError>;

    /// Position of the tip for the given joint angles.
    fn forward(&self, joints: &JointAngles) -> Point2D;

    /// Maximal distance of the tip from the base.
    fn reach(&self) -> f64;
}
