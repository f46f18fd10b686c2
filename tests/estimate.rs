use route_estimator::random_tsp::{PointSetCache, RandomPointGenerator, DEFAULT_SEED};
use route_estimator::{
    greedy_nearest_neighbor, haversine, improvement_percent, route_length, GeoPoint, PointSet,
    RouteError, RouteEstimator,
};

fn demo_points() -> PointSet {
    RandomPointGenerator::default().generate(DEFAULT_SEED)
}

#[test]
fn demo_points_are_reproducible() {
    let points = demo_points();
    assert_eq!(points.len(), 12);
    assert_eq!(points, demo_points());

    // StdRng (ChaCha12) stream for seed 42.
    let first = points.points[0];
    assert!((first.lat - 19.029457705612206).abs() < 1e-9, "lat {}", first.lat);
    assert!((first.lon - 72.83487849005904).abs() < 1e-9, "lon {}", first.lon);
    let second = points.points[1];
    assert!((second.lat - 19.048807857080966).abs() < 1e-9, "lat {}", second.lat);
    assert!((second.lon - 72.89033104395433).abs() < 1e-9, "lon {}", second.lon);

    for point in &points.points {
        assert!((point.lat - 19.0760).abs() <= 0.05);
        assert!((point.lon - 72.8777).abs() <= 0.05);
    }
}

#[test]
fn demo_estimate_is_consistent() {
    let points = demo_points();
    let estimate = RouteEstimator.estimate(&points, 0).unwrap();

    assert_eq!(estimate.before.route, points.identity_route());
    assert_eq!(
        estimate.before.distance,
        route_length(&points, &points.identity_route()).unwrap()
    );

    let mut visited = estimate.after.route.clone();
    visited.sort_unstable();
    assert_eq!(visited, points.identity_route());
    assert_eq!(estimate.after.route[0], 0);
    assert_eq!(estimate.after.route, greedy_nearest_neighbor(&points, 0).unwrap());

    let expected = improvement_percent(estimate.before.distance, estimate.after.distance).unwrap();
    assert!((estimate.improvement_percent - expected).abs() < 1e-9);

    assert_eq!(estimate, RouteEstimator.estimate(&points, 0).unwrap());
}

#[test]
fn estimate_serializes_both_routes() {
    let points = PointSet::from_coords(&[(0.0, 0.0), (0.0, 2.0), (0.0, 1.0)]);
    let estimate = RouteEstimator.estimate(&points, 0).unwrap();

    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["before"]["route"], serde_json::json!([0, 1, 2]));
    assert_eq!(json["after"]["route"], serde_json::json!([0, 2, 1]));
    assert!(json["improvement_percent"].as_f64().unwrap() > 0.0);

    assert_eq!(
        estimate.after.path(&points),
        vec![[0.0, 0.0], [0.0, 1.0], [0.0, 2.0]]
    );
}

#[test]
fn distance_properties_hold_on_generated_points() {
    let points = demo_points();
    for a in &points.points {
        assert!(haversine(a, a).abs() < 1e-9);
        for b in &points.points {
            let d = RouteEstimator.distance(a, b);
            assert!(d >= 0.0);
            assert_eq!(d, RouteEstimator.distance(b, a));
        }
    }
}

#[test]
fn every_start_gives_a_full_route() {
    let points = demo_points();
    for start in 0..points.len() as u32 {
        let route = RouteEstimator.greedy_nearest_neighbor(&points, start).unwrap();
        assert_eq!(route.len(), points.len());
        assert_eq!(route[0], start);
    }
}

#[test]
fn cached_generation_feeds_the_estimator() {
    let cache = PointSetCache::new(None);
    let generator = RandomPointGenerator::default();

    let first = RouteEstimator
        .estimate(&generator.generate_cached(DEFAULT_SEED, &cache), 0)
        .unwrap();
    let again = RouteEstimator
        .estimate(&generator.generate_cached(DEFAULT_SEED, &cache), 0)
        .unwrap();

    assert_eq!(first, again);
    assert_eq!(cache.len(), 1);
}

#[test]
fn contract_violations_surface_as_errors() {
    let points = PointSet::new(vec![GeoPoint::new(7, 1.0, 1.0), GeoPoint::new(9, 2.0, 2.0)]);

    assert!(matches!(
        RouteEstimator.route_length(&points, &[0, 2]),
        Err(RouteError::InvalidRoute { .. })
    ));
    assert!(matches!(
        RouteEstimator.improvement_percent(0.0, 1.0),
        Err(RouteError::DivisionByZero)
    ));
    assert!(matches!(
        greedy_nearest_neighbor(&PointSet::default(), 0),
        Err(RouteError::EmptyPointSet)
    ));
}
