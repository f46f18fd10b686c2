use dashmap::DashMap;
use rayon::prelude::*;

use crate::point::GeoPoint;
use crate::point::PointSet;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance in kilometres.
///
/// Coordinates are not range checked. Latitudes outside [-90, 90] or longitudes outside
/// [-180, 180] still produce a number, it just has no geographic meaning.
pub fn haversine(point1: &GeoPoint, point2: &GeoPoint) -> f64 {
    let phi1 = point1.lat.to_radians();
    let phi2 = point2.lat.to_radians();
    let delta_phi = (point2.lat - point1.lat).to_radians();
    let delta_lambda = (point2.lon - point1.lon).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    // Rounding can push `a` just past 1 for antipodal pairs.
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[derive(Clone)]
pub struct DistanceMap {
    pub map: DashMap<(u32, u32), f64>,
    pub num_points: u32,
}

impl DistanceMap {
    /* Calculate the distances between every pair once. Only (smaller, larger) keys are stored. */
    pub fn new(points: &PointSet) -> DistanceMap {
        let num_points = points.len() as u32;
        let pairs = (num_points as usize * num_points.saturating_sub(1) as usize) / 2;
        let map = DashMap::with_capacity(pairs);

        points.points.par_iter().enumerate().for_each(|(i, point1)| {
            for (j, point2) in points.points.iter().enumerate().skip(i + 1) {
                map.insert((i as u32, j as u32), haversine(point1, point2));
            }
        });

        DistanceMap { map, num_points }
    }

    pub fn point_count(&self) -> usize {
        self.num_points as usize
    }

    pub fn len(&self) -> usize {
        self.point_count()
    }

    pub fn is_empty(&self) -> bool {
        self.num_points == 0
    }

    pub fn get_distance_from_points(&self, point1: u32, point2: u32) -> f64 {
        /* Return 0 if they are the same point */
        if point1 == point2 {
            return 0.0;
        }

        let (smaller, larger) = if point1 < point2 {
            (point1, point2)
        } else {
            (point2, point1)
        };

        self.map.get(&(smaller, larger)).map_or(0.0, |v| *v)
    }
}
