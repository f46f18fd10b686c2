use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::distance_map::haversine;
use crate::error::{Result, RouteError};
use crate::greedy::greedy_nearest_neighbor;
use crate::point::{GeoPoint, PointSet};
use crate::solution::{route_length, Solution};

/// The unoptimised and greedy routes over one point set.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Estimate {
    pub before: Solution,
    pub after: Solution,
    pub improvement_percent: f64,
}

/// Stateless entry point for the routing demo. Every method is a pure function of its inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct RouteEstimator;

impl RouteEstimator {
    pub fn distance(&self, point1: &GeoPoint, point2: &GeoPoint) -> f64 {
        haversine(point1, point2)
    }

    pub fn route_length(&self, points: &PointSet, route: &[u32]) -> Result<f64> {
        route_length(points, route)
    }

    pub fn greedy_nearest_neighbor(&self, points: &PointSet, start: u32) -> Result<Vec<u32>> {
        greedy_nearest_neighbor(points, start)
    }

    pub fn improvement_percent(&self, before: f64, after: f64) -> Result<f64> {
        improvement_percent(before, after)
    }

    /// Compares the identity order against the greedy order from `start`.
    ///
    /// A zero-length baseline reports 0% improvement.
    pub fn estimate(&self, points: &PointSet, start: u32) -> Result<Estimate> {
        if points.is_empty() {
            return Err(RouteError::EmptyPointSet);
        }

        let before = Solution::new(points, points.identity_route())?;
        debug!("identity route over {} points: {:.3} km", points.len(), before.distance);

        let after = Solution::new(points, greedy_nearest_neighbor(points, start)?)?;
        debug!("greedy route from {}: {:.3} km", start, after.distance);

        let improvement_percent = match improvement_percent(before.distance, after.distance) {
            Ok(percent) => percent,
            Err(RouteError::DivisionByZero) => 0.0,
            Err(e) => return Err(e),
        };

        info!(
            "{} points: {:.2} km -> {:.2} km ({:.1}% shorter)",
            points.len(),
            before.distance,
            after.distance,
            improvement_percent
        );

        Ok(Estimate {
            before,
            after,
            improvement_percent,
        })
    }
}

pub fn improvement_percent(before: f64, after: f64) -> Result<f64> {
    if before == 0.0 {
        return Err(RouteError::DivisionByZero);
    }
    Ok((before - after) / before * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn improvement_of_a_shorter_route() {
        let percent = improvement_percent(100.0, 72.0).unwrap();
        assert!((percent - 28.0).abs() < 1e-9);
    }

    #[test]
    fn longer_route_is_negative_improvement() {
        let percent = improvement_percent(50.0, 75.0).unwrap();
        assert!((percent + 50.0).abs() < 1e-9);
    }

    #[test]
    fn zero_baseline_is_an_error() {
        assert!(matches!(
            improvement_percent(0.0, 0.0),
            Err(RouteError::DivisionByZero)
        ));
    }

    #[test]
    fn estimate_compares_identity_and_greedy() {
        // Identity order zig-zags along the equator, greedy walks it in order.
        let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 3.0), (0.0, 1.0), (0.0, 2.0)]);
        let estimate = RouteEstimator.estimate(&points, 0).unwrap();

        assert_eq!(estimate.before.route, vec![0, 1, 2, 3]);
        assert_eq!(estimate.after.route, vec![0, 2, 3, 1]);
        // 3 + 2 + 1 degrees before, 1 + 1 + 1 after.
        assert!((estimate.improvement_percent - 50.0).abs() < 1e-6);
        assert!(estimate.after.distance < estimate.before.distance);
    }

    #[test]
    fn single_point_estimate_reports_no_improvement() {
        let points = PointSet::from_coords(&[(19.0760, 72.8777)]);
        let estimate = RouteEstimator.estimate(&points, 0).unwrap();

        assert_eq!(estimate.after.route, vec![0]);
        assert_eq!(estimate.after.distance, 0.0);
        assert_eq!(estimate.improvement_percent, 0.0);
    }

    #[test]
    fn empty_estimate_is_an_error() {
        let err = RouteEstimator.estimate(&PointSet::default(), 0).unwrap_err();
        assert!(matches!(err, RouteError::EmptyPointSet));
    }
}
