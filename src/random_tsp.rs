use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cache::MemoCache;
use crate::point::{GeoPoint, PointSet};

pub const DEFAULT_CENTER_LAT: f64 = 19.0760;
pub const DEFAULT_CENTER_LON: f64 = 72.8777;
pub const DEFAULT_SPREAD: f64 = 0.1;
pub const DEFAULT_COUNT: u32 = 12;
pub const DEFAULT_SEED: u64 = 42;

/// Cache key for generated sets: seed plus the generator settings, floats by bit pattern.
pub type GeneratorKey = (u64, u32, u64, u64, u64);

pub type PointSetCache = MemoCache<GeneratorKey, PointSet>;

/// Scatters points uniformly in a box of side `spread` degrees around a centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RandomPointGenerator {
    center_lat: f64,
    center_lon: f64,
    spread: f64,
    count: u32,
}

impl Default for RandomPointGenerator {
    fn default() -> Self {
        RandomPointGenerator::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_COUNT)
    }
}

impl RandomPointGenerator {
    pub fn new(center_lat: f64, center_lon: f64, count: u32) -> RandomPointGenerator {
        RandomPointGenerator {
            center_lat,
            center_lon,
            spread: DEFAULT_SPREAD,
            count,
        }
    }

    pub fn with_spread(mut self, spread: f64) -> RandomPointGenerator {
        self.spread = spread;
        self
    }

    /// Same seed and settings always give the same set. Latitude is drawn before longitude.
    pub fn generate(&self, seed: u64) -> PointSet {
        let mut rng = StdRng::seed_from_u64(seed);

        let points = (0..self.count)
            .map(|id| {
                let lat = self.center_lat + (rng.gen::<f64>() - 0.5) * self.spread;
                let lon = self.center_lon + (rng.gen::<f64>() - 0.5) * self.spread;
                GeoPoint::new(id, lat, lon)
            })
            .collect();

        PointSet::new(points)
    }

    pub fn key(&self, seed: u64) -> GeneratorKey {
        (
            seed,
            self.count,
            self.center_lat.to_bits(),
            self.center_lon.to_bits(),
            self.spread.to_bits(),
        )
    }

    pub fn generate_cached(&self, seed: u64, cache: &PointSetCache) -> PointSet {
        cache.get_or_insert_with(self.key(seed), || {
            debug!("generating {} points for seed {}", self.count, seed);
            self.generate(seed)
        })
    }
}
