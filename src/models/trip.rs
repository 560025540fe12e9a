use serde::{Deserialize, Serialize};

/// Trip-level payload from the planning API. Only `current_hours_used`
/// feeds the calculators; the locations ride along for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trip {
    pub current_location: String,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub current_hours_used: f64,
}
