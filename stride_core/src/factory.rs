//! Sensor package decoding: maps a workout code to its strategy.

use crate::training::{Running, Swimming, Walking, Workout};
use crate::{Error, Result};

/// Decode a sensor package into a constructed workout strategy.
///
/// `data` is the positional numeric payload for the code's constructor:
/// - `"RUN"`: action, duration_h, weight_kg
/// - `"WLK"`: action, duration_h, weight_kg, height_cm
/// - `"SWM"`: action, duration_h, weight_kg, pool_length_m, pool_laps
///
/// An unknown code yields [`Error::UnknownWorkoutCode`] so batch callers can
/// skip the package and keep going; a wrong value count is a caller
/// precondition violation reported as [`Error::InvalidParameters`].
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Workout> {
    match workout_type {
        "RUN" => {
            check_len(workout_type, data, 3)?;
            let running = Running::new(to_count(workout_type, data[0])?, data[1], data[2])?;
            Ok(Workout::Running(running))
        }
        "WLK" => {
            check_len(workout_type, data, 4)?;
            let walking =
                Walking::new(to_count(workout_type, data[0])?, data[1], data[2], data[3])?;
            Ok(Workout::Walking(walking))
        }
        "SWM" => {
            check_len(workout_type, data, 5)?;
            let swimming = Swimming::new(
                to_count(workout_type, data[0])?,
                data[1],
                data[2],
                data[3],
                to_count(workout_type, data[4])?,
            )?;
            Ok(Workout::Swimming(swimming))
        }
        other => Err(Error::UnknownWorkoutCode(other.to_string())),
    }
}

fn check_len(workout_type: &str, data: &[f64], expected: usize) -> Result<()> {
    if data.len() != expected {
        return Err(Error::InvalidParameters(format!(
            "{} package carries {} values, expected {}",
            workout_type,
            data.len(),
            expected
        )));
    }
    Ok(())
}

/// Sensor counts (steps, strokes, laps) arrive as numbers but must be
/// non-negative integers.
fn to_count(workout_type: &str, value: f64) -> Result<u32> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::InvalidParameters(format!(
            "{} package carries a negative count",
            workout_type
        )));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swm_always_yields_swimming() {
        let workout = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
        assert!(matches!(workout, Workout::Swimming(_)));
    }

    #[test]
    fn test_run_and_wlk_yield_their_variants() {
        let running = read_package("RUN", &[15000.0, 1.0, 75.0]).unwrap();
        assert!(matches!(running, Workout::Running(_)));

        let walking = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert!(matches!(walking, Workout::Walking(_)));
    }

    #[test]
    fn test_unknown_code_is_reported() {
        let err = read_package("WL", &[3000.0, 2.112, 75.8, 180.1]).unwrap_err();
        match err {
            Error::UnknownWorkoutCode(code) => assert_eq!(code, "WL"),
            other => panic!("expected UnknownWorkoutCode, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_value_count_is_invalid_parameters() {
        assert!(matches!(
            read_package("RUN", &[15000.0, 1.0]),
            Err(Error::InvalidParameters(_))
        ));
        assert!(matches!(
            read_package("SWM", &[720.0, 1.0, 80.0, 25.0]),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_negative_count_is_invalid_parameters() {
        assert!(matches!(
            read_package("RUN", &[-15000.0, 1.0, 75.0]),
            Err(Error::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_non_positive_duration_surfaces_from_constructor() {
        assert!(matches!(
            read_package("WLK", &[9000.0, 0.0, 75.0, 180.0]),
            Err(Error::InvalidParameters(_))
        ));
    }
}
