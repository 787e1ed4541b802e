use serde::{Deserialize, Serialize};

/// Weighting policy for item scoring. Every constant the rules apply lives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub base: f64,
    pub warmth_penalty_per_step: f64,
    pub formality_exact: f64,
    pub formality_adjacent: f64,
    pub activity_match: f64,
    pub sunny_heat_threshold_f: f64,
    pub sunny_heavy_warmth: i32,
    pub sunny_heavy_penalty: f64,
    pub rainy_outerwear: f64,
    pub rainy_boots: f64,
    pub snowy_warm_threshold: i32,
    pub snowy_warm_bonus: f64,
    pub snowy_light_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            base: 10.0,
            warmth_penalty_per_step: 1.2,
            formality_exact: 3.0,
            formality_adjacent: 1.0,
            activity_match: 2.0,
            sunny_heat_threshold_f: 85.0,
            sunny_heavy_warmth: 6,
            sunny_heavy_penalty: 3.0,
            rainy_outerwear: 1.5,
            rainy_boots: 2.0,
            snowy_warm_threshold: 7,
            snowy_warm_bonus: 2.5,
            snowy_light_penalty: 2.0,
        }
    }
}
