use serde::{Deserialize, Serialize};

/// Lowest value any stat can take
pub const STAT_MIN: f64 = 0.0;

/// Highest value any stat can take
pub const STAT_MAX: f64 = 100.0;

/// Clamp a stat into `[STAT_MIN, STAT_MAX]`
pub fn clamp(value: f64) -> f64 {
    value.min(STAT_MAX).max(STAT_MIN)
}

/// The bunny's wellbeing stats
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// 0 = full, 100 = starving
    pub hunger: f64,
    /// 0 = sad, 100 = delighted
    pub happiness: f64,
    /// 0 = messy, 100 = sparkling
    pub cleanliness: f64,
    /// 0 = exhausted, 100 = rested
    pub energy: f64,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            hunger: 40.0,
            happiness: 70.0,
            cleanliness: 80.0,
            energy: 70.0,
        }
    }
}

impl Stats {
    /// Apply signed deltas to every stat, clamping each result
    pub fn adjust(&mut self, hunger: f64, happiness: f64, cleanliness: f64, energy: f64) {
        self.hunger = clamp(self.hunger + hunger);
        self.happiness = clamp(self.happiness + happiness);
        self.cleanliness = clamp(self.cleanliness + cleanliness);
        self.energy = clamp(self.energy + energy);
    }

    /// Weighted wellbeing score, rounded to one decimal place
    pub fn overall_health(&self) -> f64 {
        let health = clamp(STAT_MAX - self.hunger) * 0.4
            + self.happiness * 0.3
            + self.cleanliness * 0.2
            + self.energy * 0.1;
        (health * 10.0).round() / 10.0
    }

    pub fn status(&self) -> Status {
        Status {
            hunger: self.hunger,
            happiness: self.happiness,
            cleanliness: self.cleanliness,
            energy: self.energy,
            overall_health: self.overall_health(),
        }
    }
}

/// Snapshot returned by every endpoint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub hunger: f64,
    pub happiness: f64,
    pub cleanliness: f64,
    pub energy: f64,
    pub overall_health: f64,
}
