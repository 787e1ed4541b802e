mod bands;
mod config;
mod profiles;
mod rules;

pub use bands::{warmth_band, COLDEST_BAND, WARMTH_BANDS};
pub use config::ScoringWeights;
pub use profiles::{occasion_profile, OccasionProfile};

use std::cmp::Ordering;

use super::domain::{Item, ItemId, RecommendationContext};
use serde::{Deserialize, Serialize};

/// Historical numeric stand-in for "cannot be scored". Far below any reachable score.
pub const DISQUALIFIED_SCORE: f64 = -999.0;

/// Stateless scorer that applies the weighting policy to one item at a time.
#[derive(Debug, Clone, Default)]
pub struct ItemScorer {
    weights: ScoringWeights,
}

impl ItemScorer {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Full breakdown of an item's fitness, or `None` if the item has no warmth rating.
    pub fn evaluate(&self, item: &Item, context: &RecommendationContext) -> Option<ScoreCard> {
        let (components, total) = rules::score_item(item, context, &self.weights)?;
        Some(ScoreCard {
            item_id: item.id,
            total,
            components,
        })
    }

    pub fn score(&self, item: &Item, context: &RecommendationContext) -> Option<f64> {
        rules::score_item(item, context, &self.weights).map(|(_, total)| total)
    }

    /// Scores the whole catalog for diagnostics: best first, catalog order on ties,
    /// disqualified items last.
    pub fn rank<'a>(&self, items: &'a [Item], context: &RecommendationContext) -> Vec<RankedItem<'a>> {
        let mut ranked: Vec<(usize, RankedItem<'a>)> = items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let card = self.evaluate(item, context);
                let label = ScoreLabel::for_score(card.as_ref().map(|card| card.total));
                (index, RankedItem { item, card, label })
            })
            .collect();

        ranked.sort_by(|(left_index, left), (right_index, right)| {
            compare_scores(right.score(), left.score()).then(left_index.cmp(right_index))
        });

        ranked.into_iter().map(|(_, entry)| entry).collect()
    }
}

/// Disqualified (`None`) sorts below every real score.
fn compare_scores(left: Option<f64>, right: Option<f64>) -> Ordering {
    match (left, right) {
        (Some(left), Some(right)) => left.total_cmp(&right),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// Flat scoring entry point that keeps the sentinel contract for diagnostic tooling.
pub fn score_item(item: &Item, temp_f: f64, occasion: &str, condition: Option<&str>) -> f64 {
    let context = RecommendationContext::from_tags(temp_f, Some(occasion), condition);
    ItemScorer::default()
        .score(item, &context)
        .unwrap_or(DISQUALIFIED_SCORE)
}

/// Rule family that produced a score component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    Base,
    Warmth,
    Formality,
    Activity,
    Condition,
}

/// Discrete contribution to an item's score, kept for transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub delta: f64,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreCard {
    pub item_id: ItemId,
    pub total: f64,
    pub components: Vec<ScoreComponent>,
}

impl ScoreCard {
    pub fn delta_for(&self, factor: ScoreFactor) -> f64 {
        self.components
            .iter()
            .filter(|component| component.factor == factor)
            .map(|component| component.delta)
            .sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreLabel {
    Great,
    Good,
    Okay,
    Poor,
    Disqualified,
}

impl ScoreLabel {
    pub fn for_score(score: Option<f64>) -> Self {
        match score {
            None => Self::Disqualified,
            Some(score) if score >= 10.0 => Self::Great,
            Some(score) if score >= 5.0 => Self::Good,
            Some(score) if score > 0.0 => Self::Okay,
            Some(_) => Self::Poor,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem<'a> {
    pub item: &'a Item,
    pub card: Option<ScoreCard>,
    pub label: ScoreLabel,
}

impl RankedItem<'_> {
    pub fn score(&self) -> Option<f64> {
        self.card.as_ref().map(|card| card.total)
    }
}
