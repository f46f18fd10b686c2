use serde::{Deserialize, Serialize};

/// A stop on the map. Coordinates are in degrees.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub id: u32,
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(id: u32, lat: f64, lon: f64) -> GeoPoint {
        GeoPoint { id, lat, lon }
    }
}

/// Points are referenced by their position in `points`, not by `id`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PointSet {
    pub points: Vec<GeoPoint>,
}

impl PointSet {
    pub fn new(points: Vec<GeoPoint>) -> PointSet {
        PointSet { points }
    }

    /// Builds a set from `(lat, lon)` pairs, numbering ids by position.
    pub fn from_coords(coords: &[(f64, f64)]) -> PointSet {
        let points = coords
            .iter()
            .enumerate()
            .map(|(i, &(lat, lon))| GeoPoint::new(i as u32, lat, lon))
            .collect();

        PointSet { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: u32) -> Option<&GeoPoint> {
        self.points.get(index as usize)
    }

    /// The visiting order `0..N-1`, used as the unoptimised baseline.
    pub fn identity_route(&self) -> Vec<u32> {
        (0..self.len() as u32).collect()
    }
}
