//! Cartesian stroke

use crate::annotations::{AnnotatedJoints, AnnotatedPoint, PathFlags};
use crate::interpolator::interpolate_annotated;
use crate::kinematic_traits::{JointAngles, Kinematics, Point2D, Solutions};
use crate::kinematics_impl::TwoLinkKinematics;
use crate::parameters::plotter_arm::{ElbowChoice, Parameters};
use crate::planning_error::{check_resolution, ConfigurationError, PathError};
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Configurations closer than this (degrees) are considered equally far from the previous one.
const TIE_TOLERANCE: f64 = 1e-9;

/// Turns straight strokes into joint commands. Planning does not change the planner,
/// so the same planner can be used from multiple threads.
#[derive(Clone)]
pub struct Planner {
    pub kinematics: Arc<dyn Kinematics + Send + Sync>,

    /// Maximal distance between consecutive waypoints.
    pub resolution: f64,

    /// Policy to choose the elbow configuration per waypoint.
    pub elbow: ElbowChoice,
}

impl Planner {
    /// Creates the planner for the two-link arm described by the parameters.
    pub fn new(parameters: &Parameters) -> Result<Self, ConfigurationError> {
        parameters.validate()?;
        let kinematics = TwoLinkKinematics::new(parameters.reach)?;
        Self::with_kinematics(Arc::new(kinematics), parameters.resolution, parameters.elbow)
    }

    /// Creates the planner over any kinematics.
    pub fn with_kinematics(
        kinematics: Arc<dyn Kinematics + Send + Sync>,
        resolution: f64,
        elbow: ElbowChoice,
    ) -> Result<Self, ConfigurationError> {
        Ok(Planner {
            kinematics,
            resolution: check_resolution(resolution)?,
            elbow,
        })
    }

    /// Plans the straight stroke from `start` to `end`. The returned commands match
    /// the interpolated waypoints one to one, in the same order. If any waypoint
    /// cannot be solved, no commands are returned at all.
    pub fn plan(&self, start: &Point2D, end: &Point2D) -> Result<Vec<JointAngles>, PathError> {
        self.plan_polyline(&[*start, *end])
    }

    /// Plans the chain of straight strokes through all corners in order, as one path.
    /// The continuity policy carries over the corners.
    pub fn plan_polyline(&self, corners: &[Point2D]) -> Result<Vec<JointAngles>, PathError> {
        Ok(self
            .plan_annotated(corners)?
            .into_iter()
            .map(|step| step.joints)
            .collect())
    }

    /// As [Planner::plan_polyline], but every command also tells if it is a corner or
    /// an interpolated point.
    pub fn plan_annotated(&self, corners: &[Point2D]) -> Result<Vec<AnnotatedJoints>, PathError> {
        let waypoints = interpolate_annotated(corners, self.resolution)?;
        debug!(
            "Planning {} waypoints through {} corners",
            waypoints.len(),
            corners.len()
        );
        self.solve_annotated(&waypoints)
    }

    /// Solves the given waypoints, in order, without interpolating between them.
    pub fn solve_waypoints(&self, waypoints: &[Point2D]) -> Result<Vec<JointAngles>, PathError> {
        let mut previous = None;
        let mut path = Vec::with_capacity(waypoints.len());
        for (index, point) in waypoints.iter().enumerate() {
            let joints = self.solve_next(index, point, previous.as_ref())?;
            path.push(joints);
            previous = Some(joints);
        }
        Ok(path)
    }

    fn solve_annotated(&self, waypoints: &[AnnotatedPoint]) -> Result<Vec<AnnotatedJoints>, PathError> {
        let mut previous: Option<JointAngles> = None;
        let mut path = Vec::with_capacity(waypoints.len());
        for (index, step) in waypoints.iter().enumerate() {
            let joints = self.solve_next(index, &step.point, previous.as_ref())?;
            if step.flags.intersects(PathFlags::ORIGINAL) {
                trace!("corner {} at {:?} commanded as {}", index, step, joints);
            }
            path.push(AnnotatedJoints { joints, flags: step.flags });
            previous = Some(joints);
        }
        debug!("Planned {} commands", path.len());
        Ok(path)
    }

    fn solve_next(
        &self,
        index: usize,
        point: &Point2D,
        previous: Option<&JointAngles>,
    ) -> Result<JointAngles, PathError> {
        match self.kinematics.inverse(point) {
            Ok(solutions) => Ok(self.choose(&solutions, previous)),
            Err(cause) => {
                warn!(
                    "Waypoint {} at ({:.3}, {:.3}) cannot be reached: {}",
                    index, point.x, point.y, cause
                );
                Err(PathError::Waypoint { index, cause })
            }
        }
    }

    /// Picks one of the two configurations according to the elbow policy.
    pub fn choose(&self, solutions: &Solutions, previous: Option<&JointAngles>) -> JointAngles {
        let preferred = self.elbow.initial();
        match (self.elbow, previous) {
            (ElbowChoice::NearestToPrevious(_), Some(previous)) => {
                let primary = solutions[0].distance(previous);
                let mirrored = solutions[1].distance(previous);
                if (primary - mirrored).abs() <= TIE_TOLERANCE {
                    preferred.select(solutions)
                } else if primary < mirrored {
                    solutions[0]
                } else {
                    solutions[1]
                }
            }
            _ => preferred.select(solutions),
        }
    }
}

/// Plans the straight stroke from `start` to `end` for the two-link arm with the given
/// reach, waypoints at most `resolution` apart.
///
/// ```
/// use rs_plotter_arm::kinematic_traits::Point2D;
/// use rs_plotter_arm::parameters::plotter_arm::ElbowChoice;
/// use rs_plotter_arm::planner::plan;
///
/// let path = plan(&Point2D::new(10.0, 10.0), &Point2D::new(-10.0, 10.0),
///     0.5, 400.0, ElbowChoice::default()).unwrap();
/// assert_eq!(path.len(), 41);
/// ```
pub fn plan(
    start: &Point2D,
    end: &Point2D,
    resolution: f64,
    reach: f64,
    elbow: ElbowChoice,
) -> Result<Vec<JointAngles>, PathError> {
    let kinematics = TwoLinkKinematics::new(reach)?;
    Planner::with_kinematics(Arc::new(kinematics), resolution, elbow)?.plan(start, end)
}
