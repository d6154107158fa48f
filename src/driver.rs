//! Hand-off of planned commands to the motion controller.
//!
//! The serial link, command syntax and pacing belong to the driver implementation.
//! This module only defines the seam and sends a fully planned path through it.

use crate::kinematic_traits::{JointAngles, Point2D};
use crate::planner::Planner;
use anyhow::Context;
use std::fmt;
use tracing::{debug, info, warn};

/// Acknowledgment of a command by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Ack {
    /// Response of the controller, if it sends any.
    pub response: String,
}

/// Failure to deliver the command at `index` of the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmissionError {
    pub index: usize,
    pub reason: String,
}

impl fmt::Display for TransmissionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Command {} not delivered: {}", self.index, self.reason)
    }
}

impl std::error::Error for TransmissionError {}

/// Motion controller executing joint commands, one at a time. Implementations own
/// the timing: `send` returns when the controller accepted the command.
pub trait MotionDriver {
    /// Sends the command to move the links to the given angles (degrees). The
    /// `index` of the returned error is not known by the driver and can be left 0,
    /// [transmit] fills it in.
    fn send(&mut self, angle1: f64, angle2: f64) -> Result<Ack, TransmissionError>;
}

/// Sends all commands in order, stopping at the first one not delivered.
/// Returns the number of commands sent.
pub fn transmit(path: &[JointAngles], driver: &mut dyn MotionDriver) -> Result<usize, TransmissionError> {
    for (index, joints) in path.iter().enumerate() {
        match driver.send(joints.theta1, joints.theta2) {
            Ok(ack) => debug!("Command {} {} acknowledged {:?}", index, joints, ack.response),
            Err(err) => {
                warn!("Transmission stopped at command {} of {}: {}", index, path.len(), err.reason);
                return Err(TransmissionError { index, ..err });
            }
        }
    }
    Ok(path.len())
}

/// Plans the strokes through all corners and only then sends the commands. If
/// planning fails, nothing is sent.
pub fn plan_and_transmit(
    planner: &Planner,
    corners: &[Point2D],
    driver: &mut dyn MotionDriver,
) -> anyhow::Result<usize> {
    let path = planner
        .plan_polyline(corners)
        .context("Planning failed, nothing has been sent")?;
    info!("Sending {} commands", path.len());
    let sent = transmit(&path, driver).context("Path only partially executed")?;
    Ok(sent)
}

/// Driver that does not move anything but remembers and logs the commands.
#[derive(Debug, Default)]
pub struct DryRunDriver {
    pub commands: Vec<JointAngles>,

    /// If set, fails on the command with this index (counted from 0).
    pub fail_at: Option<usize>,
}

impl DryRunDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl MotionDriver for DryRunDriver {
    fn send(&mut self, angle1: f64, angle2: f64) -> Result<Ack, TransmissionError> {
        let index = self.commands.len();
        if self.fail_at == Some(index) {
            return Err(TransmissionError { index, reason: "simulated failure".into() });
        }
        let joints = JointAngles::new(angle1, angle2);
        debug!("dry run {:5}: {}", index, joints);
        self.commands.push(joints);
        Ok(Ack { response: "ok".into() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::plotter_arm::Parameters;

    fn planner() -> Planner {
        Planner::new(&Parameters::plotter()).expect("valid parameters")
    }

    #[test]
    fn test_transmit_all() {
        let path = [JointAngles::new(1.0, 2.0), JointAngles::new(3.0, 4.0)];
        let mut driver = DryRunDriver::new();
        assert_eq!(transmit(&path, &mut driver), Ok(2));
        assert_eq!(driver.commands, path.to_vec());
    }

    #[test]
    fn test_transmit_stops_on_failure() {
        let path = [JointAngles::new(1.0, 2.0); 5];
        let mut driver = DryRunDriver { fail_at: Some(3), ..Default::default() };
        let err = transmit(&path, &mut driver).unwrap_err();
        assert_eq!(err.index, 3);
        assert_eq!(driver.commands.len(), 3);
    }

    #[test]
    fn test_nothing_sent_if_planning_fails() {
        let mut driver = DryRunDriver::new();
        // The second stroke passes through the base
        let corners = [Point2D::new(10.0, 10.0), Point2D::new(0.0, 10.0), Point2D::new(0.0, -10.0)];
        let result = plan_and_transmit(&planner(), &corners, &mut driver);
        assert!(result.is_err());
        assert!(driver.commands.is_empty());
    }

    #[test]
    fn test_plan_and_transmit() {
        let mut driver = DryRunDriver::new();
        let corners = [Point2D::new(10.0, 10.0), Point2D::new(-10.0, 10.0)];
        let sent = plan_and_transmit(&planner(), &corners, &mut driver).unwrap();
        assert_eq!(sent, 41);
        assert_eq!(driver.commands, planner().plan_polyline(&corners).unwrap());
    }
}
