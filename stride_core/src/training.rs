//! Calculation strategies for the three supported workout types.
//!
//! Each strategy computes distance, mean speed and calories from the raw
//! sensor parameters it was constructed with. `Training` is the shared
//! contract; `Running` and `Walking` use the default step-based distance
//! and speed formulas, `Swimming` overrides both with pool geometry.

use crate::report::WorkoutReport;
use crate::{Error, Result};

/// Metres in a kilometre
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;

/// Stride length in metres for step-based workouts
pub const STRIDE_LEN_M: f64 = 0.65;

/// Shared calculation contract for all workout types.
///
/// Accessors expose the common sensor parameters; the computed methods
/// carry default formula bodies that step-based workouts inherit as-is.
pub trait Training {
    /// Human-readable label used in the report line
    fn label(&self) -> &'static str;

    /// Raw action count from the sensor (steps or strokes)
    fn action(&self) -> u32;

    /// Workout duration in hours
    fn duration_h(&self) -> f64;

    /// Athlete weight in kilograms
    fn weight_kg(&self) -> f64;

    /// Distance covered, in km
    fn distance_km(&self) -> f64 {
        f64::from(self.action()) * STRIDE_LEN_M / M_IN_KM
    }

    /// Mean speed over the workout, in km/h
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.duration_h()
    }

    /// Calories burned, in kcal; formula is specific to each workout type
    fn calories_kcal(&self) -> f64;

    /// Build the report value object for this workout
    fn report(&self) -> WorkoutReport {
        WorkoutReport {
            training_type: self.label().to_string(),
            duration_h: self.duration_h(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        }
    }
}

/// Validate the parameters every workout type shares.
///
/// Duration must be strictly positive because every speed and calorie
/// formula divides by it.
fn check_common(duration_h: f64, weight_kg: f64) -> Result<()> {
    if !duration_h.is_finite() || duration_h <= 0.0 {
        return Err(Error::InvalidParameters("non-positive duration".into()));
    }
    if !weight_kg.is_finite() || weight_kg < 0.0 {
        return Err(Error::InvalidParameters("negative weight".into()));
    }
    Ok(())
}

// ============================================================================
// Running
// ============================================================================

/// Running workout: step-based distance, minute-based calorie formula
#[derive(Clone, Debug)]
pub struct Running {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 1.79;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64) -> Result<Self> {
        check_common(duration_h, weight_kg)?;
        Ok(Self {
            action,
            duration_h,
            weight_kg,
        })
    }
}

impl Training for Running {
    fn label(&self) -> &'static str {
        "Running"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// (18 * mean_speed + 1.79) * weight / 1000 * duration_minutes
    fn calories_kcal(&self) -> f64 {
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() + Self::SPEED_SHIFT) * self.weight_kg
            / M_IN_KM
            * (self.duration_h * MIN_IN_H)
    }
}

// ============================================================================
// Walking
// ============================================================================

/// Walking workout: step-based distance, height enters the calorie formula
#[derive(Clone, Debug)]
pub struct Walking {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    height_cm: f64,
}

impl Walking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const KMH_IN_MSEC: f64 = 0.278;
    const CM_IN_M: f64 = 100.0;

    pub fn new(action: u32, duration_h: f64, weight_kg: f64, height_cm: f64) -> Result<Self> {
        check_common(duration_h, weight_kg)?;
        // The calorie formula divides by height
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(Error::InvalidParameters("non-positive height".into()));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            height_cm,
        })
    }
}

impl Training for Walking {
    fn label(&self) -> &'static str {
        "Walking"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// (0.035 * weight + (speed_in_m_per_s)^2 / height_in_m * 0.029 * weight)
    /// * duration_minutes
    fn calories_kcal(&self) -> f64 {
        let speed_msec = self.mean_speed_kmh() * Self::KMH_IN_MSEC;
        (Self::WEIGHT_MULTIPLIER * self.weight_kg
            + speed_msec.powi(2) / (self.height_cm / Self::CM_IN_M)
                * Self::SPEED_HEIGHT_MULTIPLIER
                * self.weight_kg)
            * (self.duration_h * MIN_IN_H)
    }
}

// ============================================================================
// Swimming
// ============================================================================

/// Swimming workout: distance and speed come from pool geometry, not strokes
#[derive(Clone, Debug)]
pub struct Swimming {
    action: u32,
    duration_h: f64,
    weight_kg: f64,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self> {
        check_common(duration_h, weight_kg)?;
        if !pool_length_m.is_finite() || pool_length_m < 0.0 {
            return Err(Error::InvalidParameters("negative pool length".into()));
        }
        Ok(Self {
            action,
            duration_h,
            weight_kg,
            pool_length_m,
            pool_laps,
        })
    }
}

impl Training for Swimming {
    fn label(&self) -> &'static str {
        "Swimming"
    }

    fn action(&self) -> u32 {
        self.action
    }

    fn duration_h(&self) -> f64 {
        self.duration_h
    }

    fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    fn distance_km(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * f64::from(self.pool_laps) / M_IN_KM / self.duration_h
    }

    /// (mean_speed + 1.1) * 2 * weight * duration_hours
    ///
    /// Duration enters in hours here, unlike the minute-based running and
    /// walking formulas. The asymmetry is part of the formula definition.
    fn calories_kcal(&self) -> f64 {
        (self.mean_speed_kmh() + Self::SPEED_SHIFT)
            * Self::WEIGHT_MULTIPLIER
            * self.weight_kg
            * self.duration_h
    }
}

// ============================================================================
// Workout (closed set of strategies)
// ============================================================================

/// A constructed workout strategy, one variant per supported type
#[derive(Clone, Debug)]
pub enum Workout {
    Running(Running),
    Walking(Walking),
    Swimming(Swimming),
}

impl Workout {
    /// View the variant through the shared calculation contract
    pub fn as_training(&self) -> &dyn Training {
        match self {
            Workout::Running(t) => t,
            Workout::Walking(t) => t,
            Workout::Swimming(t) => t,
        }
    }

    /// Compute the full report for this workout
    pub fn report(&self) -> WorkoutReport {
        self.as_training().report()
    }
}
