//! Straight-line interpolation between Cartesian waypoints.

use crate::annotations::{AnnotatedPoint, PathFlags};
use crate::kinematic_traits::Point2D;
use crate::planning_error::{check_resolution, ConfigurationError};

/// Default maximal spacing between interpolated points, as used by the drawing arm.
pub const DEFAULT_RESOLUTION: f64 = 0.5;

/// Most steps a single straight stroke may be divided into. A stroke needing more
/// is rejected with [ConfigurationError::TooManyWaypoints].
pub const MAX_STEPS: usize = 10_000_000;

/// Evenly spaced points from `start` to `end` inclusive. With `n = ceil(distance / resolution)`,
/// there are `n + 1` points, so consecutive points are never more than `resolution` apart.
/// The first and last points are exactly `start` and `end`. If `start == end`, the
/// single point `[start]` is returned. If the stroke would need more than [MAX_STEPS]
/// steps, or its length is not finite, [ConfigurationError::TooManyWaypoints] is returned.
///
/// ```
/// use rs_plotter_arm::kinematic_traits::Point2D;
/// use rs_plotter_arm::interpolator::interpolate;
///
/// let points = interpolate(&Point2D::new(0.0, 0.0), &Point2D::new(10.0, 0.0), 1.0).unwrap();
/// assert_eq!(points.len(), 11);
/// assert_eq!(points[3], Point2D::new(3.0, 0.0));
/// ```
pub fn interpolate(
    start: &Point2D,
    end: &Point2D,
    resolution: f64,
) -> Result<Vec<Point2D>, ConfigurationError> {
    let resolution = check_resolution(resolution)?;
    interpolate_checked(start, end, resolution)
}

/// Number of steps `ceil(distance / resolution)`, computed in floating point and
/// only then converted, so that it cannot saturate.
fn step_count(distance: f64, resolution: f64) -> Result<usize, ConfigurationError> {
    let steps = (distance / resolution).ceil();
    if steps.is_finite() && steps <= MAX_STEPS as f64 {
        Ok((steps as usize).max(1))
    } else {
        Err(ConfigurationError::TooManyWaypoints { distance, resolution })
    }
}

fn interpolate_checked(
    start: &Point2D,
    end: &Point2D,
    resolution: f64,
) -> Result<Vec<Point2D>, ConfigurationError> {
    if start == end {
        return Ok(vec![*start]);
    }

    let diff = *end - *start;
    let n = step_count(diff.norm(), resolution)?;
    let mut points = Vec::with_capacity(n + 1);
    for i in 0..n {
        // Multiply before dividing so that integer fractions land exactly.
        points.push(*start + diff * (i as f64) / (n as f64));
    }
    points.push(*end);
    Ok(points)
}

/// Interpolates the chain of straight strokes through all `corners`, in order.
/// Shared corners appear once. Corners are flagged `TRACE`, points in between
/// `LIN_INTERP`. The first point is also `LAND` and the last is `PARK`.
pub fn interpolate_annotated(
    corners: &[Point2D],
    resolution: f64,
) -> Result<Vec<AnnotatedPoint>, ConfigurationError> {
    let resolution = check_resolution(resolution)?;
    let (first, rest) = corners.split_first().ok_or(ConfigurationError::EmptyPath)?;

    let mut points = vec![AnnotatedPoint { point: *first, flags: PathFlags::TRACE }];
    let mut from = first;
    for to in rest {
        let segment = interpolate_checked(from, to, resolution)?;
        // The first point of the segment is the previous corner, already added.
        let last = segment.len() - 1;
        for (idx, point) in segment.into_iter().enumerate().skip(1) {
            let flags = if idx == last { PathFlags::TRACE } else { PathFlags::LIN_INTERP };
            points.push(AnnotatedPoint { point, flags });
        }
        from = to;
    }

    if let Some(first) = points.first_mut() {
        first.flags |= PathFlags::LAND;
    }
    if let Some(last) = points.last_mut() {
        last.flags |= PathFlags::PARK;
    }
    Ok(points)
}

/// As [interpolate_annotated], but returns points only.
pub fn interpolate_polyline(
    corners: &[Point2D],
    resolution: f64,
) -> Result<Vec<Point2D>, ConfigurationError> {
    Ok(interpolate_annotated(corners, resolution)?
        .into_iter()
        .map(|step| step.point)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn check_spacing(points: &[Point2D], resolution: f64) {
        for pair in points.windows(2) {
            let spacing = nalgebra::distance(&pair[0], &pair[1]);
            assert!(
                spacing <= resolution + EPSILON,
                "Spacing {} exceeds resolution {}", spacing, resolution
            );
        }
    }

    #[test]
    fn test_unit_steps_along_x() {
        let points = interpolate(&Point2D::new(0.0, 0.0), &Point2D::new(10.0, 0.0), 1.0).unwrap();
        let expected: Vec<Point2D> = (0..=10).map(|i| Point2D::new(i as f64, 0.0)).collect();
        assert_eq!(points, expected);
    }

    #[test]
    fn test_same_point() {
        let p = Point2D::new(-3.5, 7.25);
        assert_eq!(interpolate(&p, &p, 0.5).unwrap(), vec![p]);
        assert_eq!(interpolate(&p, &p, 1e6).unwrap(), vec![p]);
    }

    #[test]
    fn test_shorter_than_resolution() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(0.1, 0.1);
        assert_eq!(interpolate(&p1, &p2, 1.0).unwrap(), vec![p1, p2]);
    }

    #[test]
    fn test_endpoints_and_spacing() {
        let cases = [
            (Point2D::new(10.0, 10.0), Point2D::new(-10.0, 10.0), 0.5),
            (Point2D::new(-10.0, 1.0), Point2D::new(10.0, 1.0), 0.3),
            (Point2D::new(0.1, -7.0), Point2D::new(123.4, 56.7), 0.77),
            (Point2D::new(1.0, 1.0), Point2D::new(1.0, 1.0 + 1e-12), 0.5),
        ];
        for (p1, p2, resolution) in cases {
            let points = interpolate(&p1, &p2, resolution).unwrap();
            assert_eq!(points.first(), Some(&p1));
            assert_eq!(points.last(), Some(&p2));
            let n = (nalgebra::distance(&p1, &p2) / resolution).ceil() as usize;
            assert_eq!(points.len(), n + 1);
            check_spacing(&points, resolution);
        }
    }

    #[test]
    fn test_bad_resolution() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(1.0, 0.0);
        assert_eq!(
            interpolate(&p1, &p2, 0.0),
            Err(ConfigurationError::NonPositiveResolution(0.0))
        );
        assert!(interpolate(&p1, &p2, -1.0).is_err());
        assert!(interpolate(&p1, &p2, f64::NAN).is_err());
        // Even if there is nothing to interpolate
        assert!(interpolate(&p1, &p1, 0.0).is_err());
    }

    #[test]
    fn test_too_fine_resolution() {
        let p1 = Point2D::new(0.0, 0.0);
        let p2 = Point2D::new(1.0, 0.0);
        assert_eq!(
            interpolate(&p1, &p2, 1e-300),
            Err(ConfigurationError::TooManyWaypoints { distance: 1.0, resolution: 1e-300 })
        );
        // Would allocate hundreds of billions of points
        let p3 = Point2D::new(400.0, 0.0);
        assert!(matches!(
            interpolate(&p1, &p3, 1e-9),
            Err(ConfigurationError::TooManyWaypoints { .. })
        ));
        assert_eq!(interpolate(&p1, &p2, 1e-3).unwrap().len(), 1001);
        // A fine resolution does not matter if there is nothing to interpolate
        assert_eq!(interpolate(&p1, &p1, 1e-300).unwrap(), vec![p1]);
    }

    #[test]
    fn test_length_overflows() {
        let p1 = Point2D::new(-1e308, 0.0);
        let p2 = Point2D::new(1e308, 0.0);
        match interpolate(&p1, &p2, 0.5) {
            Err(ConfigurationError::TooManyWaypoints { distance, resolution }) => {
                assert!(distance.is_infinite());
                assert_eq!(resolution, 0.5);
            }
            other => panic!("Expected too many waypoints, got {:?}", other),
        }
        assert!(interpolate_polyline(&[Point2D::new(0.0, 0.0), p1, p2], 0.5).is_err());
    }

    #[test]
    fn test_polyline_shares_corners() {
        let corners = [
            Point2D::new(10.0, 10.0),
            Point2D::new(-10.0, 10.0),
            Point2D::new(-10.0, 1.0),
        ];
        let steps = interpolate_annotated(&corners, 1.0).unwrap();
        // 20 + 9 segments, 1 shared corner
        assert_eq!(steps.len(), 21 + 10 - 1);
        assert_eq!(steps[0].flags, PathFlags::TRACE | PathFlags::LAND);
        assert_eq!(steps[1].flags, PathFlags::LIN_INTERP);
        assert_eq!(steps[20].point, corners[1]);
        assert_eq!(steps[20].flags, PathFlags::TRACE);
        assert_eq!(steps[29].point, corners[2]);
        assert_eq!(steps[29].flags, PathFlags::TRACE | PathFlags::PARK);

        let corner_count = steps.iter().filter(|s| s.flags.contains(PathFlags::TRACE)).count();
        assert_eq!(corner_count, 3);

        let points = interpolate_polyline(&corners, 1.0).unwrap();
        check_spacing(&points, 1.0);
    }

    #[test]
    fn test_polyline_single_and_empty() {
        let p = Point2D::new(1.0, 2.0);
        let steps = interpolate_annotated(&[p], 0.5).unwrap();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].flags, PathFlags::ORIGINAL);

        assert_eq!(interpolate_polyline(&[], 0.5), Err(ConfigurationError::EmptyPath));
    }

    #[test]
    fn test_polyline_repeated_corner() {
        let p = Point2D::new(1.0, 2.0);
        let q = Point2D::new(2.0, 2.0);
        let points = interpolate_polyline(&[p, p, q], 0.5).unwrap();
        assert_eq!(points, vec![p, Point2D::new(1.5, 2.0), q]);
    }
}
