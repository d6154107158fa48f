//! Rust implementation of Cartesian stroke planning for two-link planar plotting arms.
//!
//! The arm has two links of equal length hinged at the base; its reach is twice the
//! link length. A straight stroke between two points is interpolated into waypoints
//! at most `resolution` apart, every waypoint is solved analytically for the joint
//! angles, and the resulting commands are handed to the motion controller.
//!
//! # Features
//!
//! - Analytic inverse kinematics that is correct in all quadrants, including targets
//!   on the axes. Both elbow configurations are returned.
//! - Targets outside the reach or at the base are reported as errors, never clamped.
//! - Explicit elbow policy: fixed configuration, or the configuration closest to the
//!   previous command to avoid jumps along the path.
//! - Planning is all or nothing: either all waypoints are solved, or the error tells
//!   which waypoint failed and why.
//! - Multi-stroke paths (shapes) are planned as one path, with corners annotated.
//! - Parameters can be read from YAML.
//!
//! # Angles
//!
//! Joint angles are the absolute directions of the two links, in degrees, clockwise
//! from the +y axis. The tip is at
//! `(L (sin θ1 + sin θ2), L (cos θ1 + cos θ2))` where `L = reach / 2`.
//!
//! # Example
//!
//! ```
//! use rs_plotter_arm::kinematic_traits::Point2D;
//! use rs_plotter_arm::parameters::plotter_arm::Parameters;
//! use rs_plotter_arm::planner::Planner;
//!
//! let planner = Planner::new(&Parameters::plotter()).unwrap();
//! let path = planner.plan(&Point2D::new(10.0, 10.0), &Point2D::new(-10.0, 10.0)).unwrap();
//! assert_eq!(path.len(), 41);
//! ```

pub mod parameters;
pub mod parameters_arms;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod kinematic_traits;
pub mod kinematics_impl;
pub mod planning_error;

pub mod annotations;

#[path = "path_plan/interpolator.rs"]
pub mod interpolator;

#[path = "path_plan/planner.rs"]
pub mod planner;

pub mod shapes;

pub mod driver;
