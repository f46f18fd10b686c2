use log::trace;
use ordered_float::OrderedFloat;

use crate::distance_map::DistanceMap;
use crate::error::{Result, RouteError};
use crate::point::PointSet;

/// Nearest-neighbour tour starting at `start`.
///
/// Unvisited candidates are scanned in ascending index order and the first minimum wins, so
/// equidistant candidates always resolve to the lowest index.
pub fn greedy_nearest_neighbor(points: &PointSet, start: u32) -> Result<Vec<u32>> {
    if points.is_empty() {
        return Err(RouteError::EmptyPointSet);
    }
    if start as usize >= points.len() {
        return Err(RouteError::StartOutOfRange {
            start,
            len: points.len(),
        });
    }

    let map = DistanceMap::new(points);
    Ok(get_greedy(&map, start))
}

fn get_greedy(map: &DistanceMap, start: u32) -> Vec<u32> {
    let mut solution: Vec<u32> = Vec::with_capacity(map.point_count());
    let mut in_solution = vec![false; map.point_count()];

    solution.push(start);
    in_solution[start as usize] = true;
    let mut current_node = start;

    while solution.len() < map.point_count() {
        // min_by_key keeps the first of several equal minima.
        let closest = (0..map.point_count() as u32)
            .filter(|&index| !in_solution[index as usize])
            .min_by_key(|&index| OrderedFloat(map.get_distance_from_points(current_node, index)));

        let Some(closest) = closest else {
            break;
        };

        trace!(
            "{} -> {} ({:.3} km)",
            current_node,
            closest,
            map.get_distance_from_points(current_node, closest)
        );

        solution.push(closest);
        in_solution[closest as usize] = true;
        current_node = closest;
    }

    solution
}
