use super::super::domain::{Category, Item, RecommendationContext, WeatherCondition};
use super::bands::warmth_band;
use super::config::ScoringWeights;
use super::profiles::occasion_profile;
use super::{ScoreComponent, ScoreFactor};

/// Applies every rule to `item`. Returns `None` when the item has no warmth rating.
pub(crate) fn score_item(
    item: &Item,
    context: &RecommendationContext,
    weights: &ScoringWeights,
) -> Option<(Vec<ScoreComponent>, f64)> {
    let warmth = item.warmth_score?;
    let mut components = Vec::with_capacity(6);
    let mut total = weights.base;

    components.push(ScoreComponent {
        factor: ScoreFactor::Base,
        delta: weights.base,
        notes: "base score".to_string(),
    });

    let target = warmth_band(context.temp_f);
    let warmth_penalty = f64::from(warmth.abs_diff(target)) * weights.warmth_penalty_per_step;
    total -= warmth_penalty;
    components.push(ScoreComponent {
        factor: ScoreFactor::Warmth,
        delta: -warmth_penalty,
        notes: format!(
            "warmth {warmth} vs target {target} at {:.1}°F",
            context.temp_f
        ),
    });

    let profile = occasion_profile(&context.occasion);

    let (formality_bonus, formality_notes) = match (item.formality, profile.formality) {
        (Some(have), Some(want)) if have == want => (
            weights.formality_exact,
            format!("{} matches {}", have.label(), context.occasion),
        ),
        (Some(have), Some(want)) if have.is_business_casual() && want.is_business_casual() => (
            weights.formality_adjacent,
            format!("{} is close to {}", have.label(), want.label()),
        ),
        (_, None) => (0.0, format!("{} has no formality preference", context.occasion)),
        _ => (0.0, "formality does not fit".to_string()),
    };
    total += formality_bonus;
    components.push(ScoreComponent {
        factor: ScoreFactor::Formality,
        delta: formality_bonus,
        notes: formality_notes,
    });

    let activity_matches = matches!(
        (item.activity_comfort, profile.activity),
        (Some(have), Some(want)) if have == want
    );
    let activity_bonus = if activity_matches {
        weights.activity_match
    } else {
        0.0
    };
    total += activity_bonus;
    components.push(ScoreComponent {
        factor: ScoreFactor::Activity,
        delta: activity_bonus,
        notes: match profile.activity {
            Some(want) if activity_matches => format!("comfortable {}", want.label()),
            Some(want) => format!("not suited to {}", want.label()),
            None => "no activity preference".to_string(),
        },
    });

    if let Some(condition) = &context.condition {
        for component in condition_adjustments(item, warmth, condition, context.temp_f, weights) {
            total += component.delta;
            components.push(component);
        }
    }

    Some((components, total))
}

/// Rules are evaluated independently per condition, so rain can yield two adjustments.
fn condition_adjustments(
    item: &Item,
    warmth: i32,
    condition: &WeatherCondition,
    temp_f: f64,
    weights: &ScoringWeights,
) -> Vec<ScoreComponent> {
    let mut adjustments = Vec::new();

    match condition {
        WeatherCondition::Sunny => {
            if temp_f >= weights.sunny_heat_threshold_f && warmth >= weights.sunny_heavy_warmth {
                adjustments.push(ScoreComponent {
                    factor: ScoreFactor::Condition,
                    delta: -weights.sunny_heavy_penalty,
                    notes: format!("warmth {warmth} is too heavy for hot sun"),
                });
            }
        }
        WeatherCondition::Rainy => {
            if item.category == Category::Outerwear {
                adjustments.push(ScoreComponent {
                    factor: ScoreFactor::Condition,
                    delta: weights.rainy_outerwear,
                    notes: "outerwear for rain".to_string(),
                });
            }
            if item.category == Category::Shoes && item.name.to_lowercase().contains("boot") {
                adjustments.push(ScoreComponent {
                    factor: ScoreFactor::Condition,
                    delta: weights.rainy_boots,
                    notes: "boots for rain".to_string(),
                });
            }
        }
        WeatherCondition::Snowy => {
            if warmth >= weights.snowy_warm_threshold {
                adjustments.push(ScoreComponent {
                    factor: ScoreFactor::Condition,
                    delta: weights.snowy_warm_bonus,
                    notes: format!("warmth {warmth} holds up in snow"),
                });
            } else {
                adjustments.push(ScoreComponent {
                    factor: ScoreFactor::Condition,
                    delta: -weights.snowy_light_penalty,
                    notes: format!("warmth {warmth} is too light for snow"),
                });
            }
        }
        WeatherCondition::Other(_) => {}
    }

    adjustments
}
