//! Analytic inverse and forward kinematics of the two-link planar arm.
//!
//! Both links have the length of half the reach and are hinged at the base. Angles are
//! the absolute directions of the links in degrees, clockwise from the +y axis. For a
//! target at distance `D`, the links and the base-target line form an isosceles
//! triangle, so each link deviates from the base-target direction by
//! `acos(D / reach)`, one to each side.

use crate::kinematic_traits::{JointAngles, Kinematics, Point2D, Solutions};
use crate::planning_error::{check_reach, ConfigurationError, SolverError};
use tracing::trace;

#[derive(Debug, Clone, Copy)]
pub struct TwoLinkKinematics {
    reach: f64,
}

impl TwoLinkKinematics {
    /// Creates the solver for the arm with the given reach.
    pub fn new(reach: f64) -> Result<Self, ConfigurationError> {
        Ok(TwoLinkKinematics { reach: check_reach(reach)? })
    }

    /// Length of a single link.
    pub fn link_length(&self) -> f64 {
        self.reach / 2.0
    }
}

impl Kinematics for TwoLinkKinematics {
    fn inverse(&self, target: &Point2D) -> Result<Solutions, SolverError> {
        let primary = solve_checked(target.x, target.y, self.reach)?;
        Ok([primary, primary.mirrored()])
    }

    fn forward(&self, joints: &JointAngles) -> Point2D {
        let l = self.link_length();
        let (s1, c1) = joints.theta1.to_radians().sin_cos();
        let (s2, c2) = joints.theta2.to_radians().sin_cos();
        Point2D::new(l * (s1 + s2), l * (c1 + c2))
    }

    fn reach(&self) -> f64 {
        self.reach
    }
}

/// Solves the arm with the given reach for the target (x, y), returning the primary
/// configuration `(base + elbow, base - elbow)` in degrees.
///
/// ```
/// use rs_plotter_arm::kinematics_impl::solve;
///
/// let joints = solve(0.0, 200.0, 400.0).unwrap();
/// assert!((joints.theta1 - 60.0).abs() < 1e-9);
/// assert!((joints.theta2 + 60.0).abs() < 1e-9);
/// ```
pub fn solve(x: f64, y: f64, reach: f64) -> Result<JointAngles, SolverError> {
    let reach = check_reach(reach)?;
    solve_checked(x, y, reach)
}

/// Solves for both elbow configurations, primary first.
pub fn solve_both(x: f64, y: f64, reach: f64) -> Result<Solutions, SolverError> {
    let primary = solve(x, y, reach)?;
    Ok([primary, primary.mirrored()])
}

/// Solver core, reach is already known to be valid.
fn solve_checked(x: f64, y: f64, reach: f64) -> Result<JointAngles, SolverError> {
    if !x.is_finite() || !y.is_finite() {
        return Err(SolverError::NonFiniteTarget { x, y });
    }

    let distance = x.hypot(y);
    if distance > reach {
        return Err(SolverError::OutOfReach { distance, reach });
    }
    if distance == 0.0 {
        return Err(SolverError::Singularity);
    }

    // Measured from +y, so (x, y) and not (y, x).
    let base = f64::atan2(x, y);
    // Clamp as distance / reach may overshoot 1.0 by rounding when fully stretched.
    let elbow = (distance / reach).clamp(-1.0, 1.0).acos();

    let joints = JointAngles {
        theta1: (base + elbow).to_degrees(),
        theta2: (base - elbow).to_degrees(),
    };
    trace!("solved ({:.3}, {:.3}) as {}", x, y, joints);
    Ok(joints)
}
