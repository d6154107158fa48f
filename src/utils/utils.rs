//! Helper functions

use crate::kinematic_traits::{JointAngles, Point2D, Solutions};

/// Maps angle in degrees into the range (-180, 180].
pub fn wrap_degrees(angle: f64) -> f64 {
    let x = angle.rem_euclid(360.0);
    if x > 180.0 { x - 360.0 } else { x }
}

/// Print both solutions, primary first.
#[allow(dead_code)]
pub fn dump_solutions(solutions: &Solutions) {
    for joints in solutions {
        dump_joints(joints);
    }
}

/// Print joint values in degrees.
#[allow(dead_code)]
pub fn dump_joints(joints: &JointAngles) {
    println!("[{:7.2} {:7.2}]", joints.theta1, joints.theta2);
}

/// Print the planned path, one command per line, prefixed with the index.
#[allow(dead_code)]
pub fn dump_path(path: &[JointAngles]) {
    if path.is_empty() {
        println!("No commands");
    }
    for (idx, joints) in path.iter().enumerate() {
        println!("{:5}: {}", idx, joints);
    }
}

pub fn dump_point(point: &Point2D) {
    println!("x: {:.5}, y: {:.5}", point.x, point.y);
}

/// Parses "x,y" into a point, as used on the command line.
pub fn parse_point(text: &str) -> Result<Point2D, String> {
    let mut parts = text.split(',').map(str::trim);
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(format!("expected 'x,y', got '{}'", text));
    };
    let x: f64 = x.parse().map_err(|e| format!("bad x coordinate '{}': {}", x, e))?;
    let y: f64 = y.parse().map_err(|e| format!("bad y coordinate '{}': {}", y, e))?;
    Ok(Point2D::new(x, y))
}

/// Checks if the two points are within the given distance, printing both if not.
pub fn assert_point_eq(a: &Point2D, b: &Point2D, tolerance: f64) -> bool {
    let distance = nalgebra::distance(a, b);
    if distance > tolerance {
        dump_point(a);
        dump_point(b);
        panic!("Points are {} apart, more than {} allowed", distance, tolerance);
    }
    true
}
