use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use route_estimator::estimator::{Estimate, RouteEstimator};
use route_estimator::input_parsers::{normalize_file_name, read_points, write_json};
use route_estimator::logging::init_logger;
use route_estimator::point::PointSet;
use route_estimator::query::{GeneratorArgs, UserQuery, Usage};
use route_estimator::random_tsp::PointSetCache;

fn main() -> anyhow::Result<()> {
    let query = UserQuery::parse();
    init_logger(query.log_level.to_filter(), query.log_timestamp)?;

    match query.usage {
        Usage::Generate {
            generator,
            seed,
            output,
        } => generate(generator, seed, &output),
        Usage::Estimate {
            input,
            generator,
            seed,
            start,
            output,
        } => {
            let start_time = Instant::now();
            let estimates = match input {
                Some(file_name) => {
                    let path = normalize_file_name(&file_name);
                    let points = read_points(&path)
                        .with_context(|| format!("failed to read points from {}", path.display()))?;
                    vec![estimate(&points, start, None)?]
                }
                None => {
                    let generator = generator.generator();
                    let cache = PointSetCache::new(None);
                    seed.iter()
                        .map(|&seed| {
                            let points = generator.generate_cached(seed, &cache);
                            estimate(&points, start, Some(seed))
                        })
                        .collect::<anyhow::Result<Vec<_>>>()?
                }
            };
            debug!("estimated {} point sets in {:?}", estimates.len(), start_time.elapsed());

            if let Some(file_name) = output {
                let path = normalize_file_name(&file_name);
                write_json(&estimates, &path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
            }
            Ok(())
        }
    }
}

fn generate(generator: GeneratorArgs, seed: u64, output: &str) -> anyhow::Result<()> {
    let points = generator.generator().generate(seed);
    let path = normalize_file_name(output);

    write_json(&points, &path).with_context(|| format!("failed to write {}", path.display()))?;
    info!("generated {} points with seed {}", points.len(), seed);
    Ok(())
}

fn estimate(points: &PointSet, start: u32, seed: Option<u64>) -> anyhow::Result<Estimate> {
    let estimate = RouteEstimator.estimate(points, start)?;

    if let Some(seed) = seed {
        println!("Seed:            {}", seed);
    }
    println!("Points:          {}", points.len());
    println!("Distance before: {:.2} km", estimate.before.distance);
    println!("Distance after:  {:.2} km", estimate.after.distance);
    println!("Improvement:     {:.1}%", estimate.improvement_percent);
    println!("Route:           {:?}", estimate.after.route);
    println!();

    Ok(estimate)
}
