pub mod cache;
pub mod distance_map;
pub mod error;
pub mod estimator;
pub mod greedy;
pub mod input_parsers;
pub mod logging;
pub mod point;
pub mod query;
pub mod random_tsp;
pub mod solution;

pub use distance_map::haversine;
pub use error::{Result, RouteError};
pub use estimator::{improvement_percent, Estimate, RouteEstimator};
pub use greedy::greedy_nearest_neighbor;
pub use point::{GeoPoint, PointSet};
pub use solution::{route_length, Solution};
