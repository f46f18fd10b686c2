use serde::{Deserialize, Serialize};

use crate::distance_map::haversine;
use crate::error::{Result, RouteError};
use crate::point::PointSet;

/// A visiting order over a point set and its open-path length in kilometres.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Solution {
    pub route: Vec<u32>,
    pub distance: f64,
}

impl Solution {
    pub fn len(&self) -> usize {
        self.route.len()
    }

    pub fn is_empty(&self) -> bool {
        self.route.is_empty()
    }

    /// Validates `route` against `points` and measures it.
    pub fn new(points: &PointSet, route: Vec<u32>) -> Result<Solution> {
        let distance = route_length(points, &route)?;
        Ok(Solution { route, distance })
    }

    /// `[lat, lon]` pairs in visiting order, ready to be drawn as a polyline.
    pub fn path(&self, points: &PointSet) -> Vec<[f64; 2]> {
        self.route
            .iter()
            .filter_map(|&index| points.get(index))
            .map(|point| [point.lat, point.lon])
            .collect()
    }
}

/// Rejects empty routes, indices outside the point set and repeated indices.
///
/// A route may visit fewer points than the set holds.
pub fn validate_route(route: &[u32], num_points: usize) -> Result<()> {
    if route.is_empty() {
        return Err(RouteError::invalid_route("route is empty"));
    }

    let mut seen = vec![false; num_points];
    for &index in route {
        let Some(visited) = seen.get_mut(index as usize) else {
            return Err(RouteError::invalid_route(format!(
                "index {index} is out of range for {num_points} points"
            )));
        };
        if *visited {
            return Err(RouteError::invalid_route(format!("index {index} appears twice")));
        }
        *visited = true;
    }

    Ok(())
}

/// Sum of consecutive-pair distances. There is no leg back to the start.
pub fn route_length(points: &PointSet, route: &[u32]) -> Result<f64> {
    validate_route(route, points.len())?;

    let length = route
        .iter()
        .zip(route.iter().skip(1))
        .map(|(&current, &next)| {
            haversine(
                &points.points[current as usize],
                &points.points[next as usize],
            )
        })
        .sum();

    Ok(length)
}
