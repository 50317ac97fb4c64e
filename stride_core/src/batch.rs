//! Sequential batch processing of sensor packages.

use crate::factory::read_package;
use crate::packages::SensorPackage;
use crate::{Error, Result};

/// Process packages in order, producing one report line per recognized code.
///
/// An unknown workout code is logged and skipped; the batch continues with
/// the next package. Invalid parameters abort the batch because the numbers
/// behind every remaining computation can no longer be trusted.
pub fn process_packages(packages: &[SensorPackage]) -> Result<Vec<String>> {
    let mut lines = Vec::with_capacity(packages.len());

    for package in packages {
        match read_package(&package.workout_type, &package.data) {
            Ok(workout) => lines.push(workout.report().message()),
            Err(Error::UnknownWorkoutCode(code)) => {
                tracing::warn!("Unknown workout code {:?}, skipping package", code);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(lines)
}
