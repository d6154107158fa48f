//! Corner lists of simple closed shapes, to be passed to [crate::planner::Planner::plan_polyline].

use crate::kinematic_traits::Point2D;

/// Closed axis-aligned rectangle with the opposite corners `from` and `to`. Starts
/// and ends at `from`, first moving along x.
pub fn rectangle(from: &Point2D, to: &Point2D) -> Vec<Point2D> {
    vec![
        *from,
        Point2D::new(to.x, from.y),
        *to,
        Point2D::new(from.x, to.y),
        *from,
    ]
}

/// Test figure of the drawing arm, 20 x 9 rectangle in front of the base.
pub fn demo_square() -> Vec<Point2D> {
    rectangle(&Point2D::new(10.0, 10.0), &Point2D::new(-10.0, 1.0))
}
