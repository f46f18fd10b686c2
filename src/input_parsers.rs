use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::error::Result;
use crate::point::PointSet;

/// `points` -> `points.json`, `points.txt` -> `points.json`, anything ending in `.json` is kept.
pub fn normalize_file_name(file_name: &str) -> PathBuf {
    let mut file_name = file_name.to_string();

    if let Some(stem) = file_name.strip_suffix(".txt") {
        file_name = format!("{stem}.json");
    } else if !file_name.ends_with(".json") {
        file_name.push_str(".json");
    }

    PathBuf::from(file_name)
}

pub fn read_points(path: &Path) -> Result<PointSet> {
    let file = File::open(path)?;
    let points: PointSet = serde_json::from_reader(BufReader::new(file))?;

    info!("read {} points from {}", points.len(), path.display());
    Ok(points)
}

pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let json_string = serde_json::to_string_pretty(value)?;
    fs::write(path, json_string)?;

    info!("wrote {}", path.display());
    Ok(())
}
