use crate::kinematic_traits::{JointAngles, Point2D};
use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Flags that can be set on the points and joint commands of a planned path
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct PathFlags: u32 {
        const NONE = 0b0000_0000;

        /// Position directly matches one of the corners given in the input.
        const TRACE =               0b0000_0100;

        /// Position is a linear interpolation between two corners. The pen moves
        /// along the straight line only if these positions are also commanded.
        const LIN_INTERP =          0b0000_1000;

        /// First position of the path, the pen lands here.
        const LAND =                0b0001_0000;

        /// Last position of the path, the pen is parked here.
        const PARK =                0b0100_0000;

        /// Combined flag representing the "original" position, so the one that was
        /// given in the input.
        const ORIGINAL = Self::TRACE.bits() | Self::LAND.bits() | Self::PARK.bits();
    }
}

fn flag_representation(flags: &PathFlags) -> String {
    const FLAG_MAP: &[(PathFlags, &str)] = &[
        (PathFlags::LAND, "LAND"),
        (PathFlags::TRACE, "TRACE"),
        (PathFlags::LIN_INTERP, "LIN_INTERP"),
        (PathFlags::PARK, "PARK"),
    ];

    FLAG_MAP
        .iter()
        .filter(|(flag, _)| flags.contains(*flag))
        .map(|(_, name)| *name)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Cartesian waypoint with its role in the path
#[derive(Clone, Copy, PartialEq)]
pub struct AnnotatedPoint {
    pub point: Point2D,
    pub flags: PathFlags,
}

/// Joint command with the role of the waypoint it was solved for
#[derive(Clone, Copy, PartialEq)]
pub struct AnnotatedJoints {
    pub joints: JointAngles,
    pub flags: PathFlags,
}

impl fmt::Debug for AnnotatedPoint {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: [{:.3}, {:.3}]",
            flag_representation(&self.flags),
            self.point.x,
            self.point.y
        )
    }
}

impl fmt::Debug for AnnotatedJoints {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{}: [{:.2}, {:.2}]",
            flag_representation(&self.flags),
            self.joints.theta1,
            self.joints.theta2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_lists_flags() {
        let step = AnnotatedPoint {
            point: Point2D::new(1.0, 2.0),
            flags: PathFlags::LAND | PathFlags::TRACE,
        };
        assert_eq!(format!("{:?}", step), "LAND | TRACE: [1.000, 2.000]");

        let step = AnnotatedJoints {
            joints: JointAngles::new(60.0, -60.0),
            flags: PathFlags::LIN_INTERP,
        };
        assert_eq!(format!("{:?}", step), "LIN_INTERP: [60.00, -60.00]");
    }

    #[test]
    fn test_original() {
        assert!(PathFlags::PARK.intersects(PathFlags::ORIGINAL));
        assert!(!PathFlags::LIN_INTERP.intersects(PathFlags::ORIGINAL));
    }
}
