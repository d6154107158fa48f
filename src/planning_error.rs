//! Errors reported by the interpolator, the solver and the planner.
//!
//! All failures are returned as values. Nothing is clamped or retried internally:
//! a target outside the envelope is an error, not a point on the envelope.

use std::fmt;

/// Invalid planning input that is not tied to any particular waypoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigurationError {
    /// Resolution (maximal spacing between waypoints) must be finite and strictly positive.
    NonPositiveResolution(f64),

    /// Reach of the mechanism must be finite and strictly positive.
    NonPositiveReach(f64),

    /// The sequence of corners to plan through is empty.
    EmptyPath,

    /// A stroke of this length would need more waypoints than can be planned at this
    /// resolution. Also reported if the length itself overflows.
    TooManyWaypoints { distance: f64, resolution: f64 },
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ConfigurationError::NonPositiveResolution(resolution) =>
                write!(f, "Resolution must be positive, got {}", resolution),
            ConfigurationError::NonPositiveReach(reach) =>
                write!(f, "Reach must be positive, got {}", reach),
            ConfigurationError::EmptyPath =>
                write!(f, "No points to plan through"),
            ConfigurationError::TooManyWaypoints { distance, resolution } =>
                write!(f, "Stroke of length {} is too long for resolution {}", distance, resolution),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// Failure to solve inverse kinematics for a single target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SolverError {
    /// The reach given to the solver is not usable.
    Configuration(ConfigurationError),

    /// The target is further from the base than the mechanism can reach.
    OutOfReach { distance: f64, reach: f64 },

    /// The target coincides with the base, direction is undefined.
    Singularity,

    /// One of the target coordinates is NaN or infinite.
    NonFiniteTarget { x: f64, y: f64 },
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            SolverError::Configuration(ref err) =>
                write!(f, "Configuration error: {}", err),
            SolverError::OutOfReach { distance, reach } =>
                write!(f, "Out of reach: target at {:.4} but reach is {:.4}", distance, reach),
            SolverError::Singularity =>
                write!(f, "Singularity: target coincides with the base"),
            SolverError::NonFiniteTarget { x, y } =>
                write!(f, "Target coordinates are not finite: ({}, {})", x, y),
        }
    }
}

impl std::error::Error for SolverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolverError::Configuration(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigurationError> for SolverError {
    fn from(err: ConfigurationError) -> Self {
        SolverError::Configuration(err)
    }
}

/// Planning failure. Planning is all or nothing, no partial path is ever returned
/// together with this error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathError {
    /// Planning parameters are invalid, no waypoint has been solved.
    Configuration(ConfigurationError),

    /// The waypoint at `index` (in traversal order) could not be solved.
    Waypoint { index: usize, cause: SolverError },
}

impl PathError {
    /// Index of the failing waypoint, if the failure is tied to one.
    pub fn index(&self) -> Option<usize> {
        match *self {
            PathError::Configuration(_) => None,
            PathError::Waypoint { index, .. } => Some(index),
        }
    }

    /// Solver failure behind this error, if the failure is tied to a waypoint.
    pub fn cause(&self) -> Option<&SolverError> {
        match self {
            PathError::Configuration(_) => None,
            PathError::Waypoint { cause, .. } => Some(cause),
        }
    }
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PathError::Configuration(ref err) =>
                write!(f, "Path not planned: {}", err),
            PathError::Waypoint { index, ref cause } =>
                write!(f, "Path not planned, waypoint {} failed: {}", index, cause),
        }
    }
}

impl std::error::Error for PathError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PathError::Configuration(err) => Some(err),
            PathError::Waypoint { cause, .. } => Some(cause),
        }
    }
}

impl From<ConfigurationError> for PathError {
    fn from(err: ConfigurationError) -> Self {
        PathError::Configuration(err)
    }
}

/// Checks the reach of the mechanism.
pub(crate) fn check_reach(reach: f64) -> Result<f64, ConfigurationError> {
    if reach.is_finite() && reach > 0.0 {
        Ok(reach)
    } else {
        Err(ConfigurationError::NonPositiveReach(reach))
    }
}

/// Checks the maximal spacing between waypoints.
pub(crate) fn check_resolution(resolution: f64) -> Result<f64, ConfigurationError> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(resolution)
    } else {
        Err(ConfigurationError::NonPositiveResolution(resolution))
    }
}
