//! Human-readable workout report rendering.

/// Computed statistics for a single workout.
///
/// Built once per computation by [`crate::training::Training::report`] and
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct WorkoutReport {
    pub training_type: String,
    pub duration_h: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl WorkoutReport {
    /// Render the fixed report template.
    ///
    /// Every numeric value is printed with exactly 3 decimals and a decimal
    /// point regardless of locale; downstream consumers match on this text.
    pub fn message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3} kcal.",
            self.training_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
