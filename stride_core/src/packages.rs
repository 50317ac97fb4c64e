//! Sensor package input: the JSONL feed format and the built-in sample batch.

use crate::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A raw sensor package: workout code plus the positional numeric payload
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

/// Cached demo batch matching the reference sensor feed
static SAMPLE_PACKAGES: Lazy<Vec<SensorPackage>> = Lazy::new(|| {
    vec![
        SensorPackage {
            workout_type: "SWM".into(),
            data: vec![720.0, 1.0, 80.0, 25.0, 40.0],
        },
        SensorPackage {
            workout_type: "RUN".into(),
            data: vec![15000.0, 1.0, 75.0],
        },
        SensorPackage {
            workout_type: "WLK".into(),
            data: vec![9000.0, 1.0, 75.0, 180.0],
        },
    ]
});

/// Get the built-in sample batch
pub fn sample_packages() -> &'static [SensorPackage] {
    &SAMPLE_PACKAGES
}

/// Read sensor packages from a JSONL file, one package per line.
///
/// Blank lines are ignored. Unparseable lines are logged and skipped so a
/// single corrupt entry does not lose the rest of the feed.
pub fn load_packages(path: &Path) -> Result<Vec<SensorPackage>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut packages = Vec::new();

    for (line_num, line_result) in reader.lines().enumerate() {
        let line = line_result?;
        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<SensorPackage>(&line) {
            Ok(package) => packages.push(package),
            Err(e) => {
                tracing::warn!("Failed to parse package at line {}: {}", line_num + 1, e);
            }
        }
    }

    tracing::debug!("Read {} packages from {:?}", packages.len(), path);
    Ok(packages)
}
