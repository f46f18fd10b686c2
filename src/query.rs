use clap::{Args, Parser, Subcommand, ValueEnum};
use log::LevelFilter;

use crate::random_tsp::{
    RandomPointGenerator, DEFAULT_CENTER_LAT, DEFAULT_CENTER_LON, DEFAULT_COUNT, DEFAULT_SEED,
    DEFAULT_SPREAD,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Greedy route estimation over geographic points", long_about = None)]
pub struct UserQuery {
    #[command(subcommand)]
    pub usage: Usage,

    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    pub log_level: LogLevel,

    /// Prefix log lines with a millisecond timestamp
    #[arg(long, global = true)]
    pub log_timestamp: bool,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Usage {
    /// Generate a random point set and write it as JSON
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        generator: GeneratorArgs,

        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Output file, `.json` is appended when missing
        #[arg(short, long, default_value = "points.json")]
        output: String,
    },
    /// Compare the identity route with the greedy route
    #[command(visible_alias = "e")]
    Estimate {
        /// Point set JSON file. When absent, points are generated from `--seed`
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        generator: GeneratorArgs,

        /// Seeds to estimate, may be repeated
        #[arg(long, default_values_t = [DEFAULT_SEED])]
        seed: Vec<u64>,

        /// Index the greedy route starts from
        #[arg(long, default_value_t = 0)]
        start: u32,

        /// Write the estimates as JSON, `.json` is appended when missing
        #[arg(short, long)]
        output: Option<String>,
    },
}

#[derive(Args, Debug, Clone, Copy, PartialEq)]
pub struct GeneratorArgs {
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: u32,

    #[arg(long, default_value_t = DEFAULT_CENTER_LAT, allow_negative_numbers = true)]
    pub center_lat: f64,

    #[arg(long, default_value_t = DEFAULT_CENTER_LON, allow_negative_numbers = true)]
    pub center_lon: f64,

    /// Side of the box points are scattered in, in degrees
    #[arg(long, default_value_t = DEFAULT_SPREAD)]
    pub spread: f64,
}

impl GeneratorArgs {
    pub fn generator(&self) -> RandomPointGenerator {
        RandomPointGenerator::new(self.center_lat, self.center_lon, self.count)
            .with_spread(self.spread)
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}
