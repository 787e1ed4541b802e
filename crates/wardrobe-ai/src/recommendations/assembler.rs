use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::domain::{Category, Item, ItemId, RecommendationContext};
use super::scoring::ItemScorer;

/// Slot selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssemblyPolicy {
    pub limit: usize,
    /// Outerwear gets a dedicated slot only below this temperature (°F).
    pub outerwear_gate_f: f64,
}

impl Default for AssemblyPolicy {
    fn default() -> Self {
        Self {
            limit: 4,
            outerwear_gate_f: 65.0,
        }
    }
}

/// Fixed slots filled in this order before backfill.
const CORE_SLOTS: [(Category, OutfitSlot); 3] = [
    (Category::Top, OutfitSlot::Top),
    (Category::Bottom, OutfitSlot::Bottom),
    (Category::Shoes, OutfitSlot::Shoes),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutfitSlot {
    Top,
    Bottom,
    Shoes,
    Outerwear,
    Backfill,
}

/// An item that scored above zero, with its catalog position for tie-breaks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub item: &'a Item,
    pub score: f64,
    pub catalog_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutfitPick<'a> {
    pub item: &'a Item,
    pub score: f64,
    pub slot: OutfitSlot,
}

/// Ordered selection with unique item identities.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outfit<'a> {
    picks: Vec<OutfitPick<'a>>,
}

impl<'a> Outfit<'a> {
    pub fn picks(&self) -> &[OutfitPick<'a>] {
        &self.picks
    }

    pub fn items(&self) -> impl Iterator<Item = &'a Item> + '_ {
        self.picks.iter().map(|pick| pick.item)
    }

    pub fn item_ids(&self) -> Vec<ItemId> {
        self.picks.iter().map(|pick| pick.item.id).collect()
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.picks.iter().any(|pick| pick.item.id == id)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}

/// Builds multi-slot outfits from the best-scoring catalog items.
#[derive(Debug, Clone, Default)]
pub struct OutfitAssembler {
    scorer: ItemScorer,
    policy: AssemblyPolicy,
}

impl OutfitAssembler {
    pub fn new(scorer: ItemScorer, policy: AssemblyPolicy) -> Self {
        Self { scorer, policy }
    }

    pub fn scorer(&self) -> &ItemScorer {
        &self.scorer
    }

    pub fn policy(&self) -> &AssemblyPolicy {
        &self.policy
    }

    pub fn assemble<'a>(&self, items: &'a [Item], context: &RecommendationContext) -> Outfit<'a> {
        self.assemble_with_limit(items, context, self.policy.limit)
    }

    pub fn assemble_with_limit<'a>(
        &self,
        items: &'a [Item],
        context: &RecommendationContext,
        limit: usize,
    ) -> Outfit<'a> {
        let ranked = self.candidates(items, context);
        if ranked.is_empty() {
            return Outfit::default();
        }

        let mut buckets: HashMap<&Category, Vec<&ScoredCandidate<'a>>> = HashMap::new();
        for candidate in &ranked {
            buckets
                .entry(&candidate.item.category)
                .or_default()
                .push(candidate);
        }
        let best_from = |category: &Category| {
            buckets
                .get(category)
                .and_then(|bucket| bucket.first().copied())
        };

        // Each pick is a distinct candidate, so `ranked.len()` bounds the outfit whatever `limit` is.
        let mut picks: Vec<OutfitPick<'a>> = Vec::with_capacity(limit.min(ranked.len()));
        let mut used: HashSet<ItemId> = HashSet::new();
        for (category, slot) in &CORE_SLOTS {
            if let Some(candidate) = best_from(category).filter(|c| used.insert(c.item.id)) {
                picks.push(OutfitPick {
                    item: candidate.item,
                    score: candidate.score,
                    slot: *slot,
                });
            }
        }

        if context.temp_f < self.policy.outerwear_gate_f {
            if let Some(candidate) =
                best_from(&Category::Outerwear).filter(|c| used.insert(c.item.id))
            {
                picks.push(OutfitPick {
                    item: candidate.item,
                    score: candidate.score,
                    slot: OutfitSlot::Outerwear,
                });
            }
        }

        // Backfill draws from every candidate, outerwear included, regardless of the gate.
        for candidate in &ranked {
            if picks.len() >= limit {
                break;
            }
            if used.insert(candidate.item.id) {
                picks.push(OutfitPick {
                    item: candidate.item,
                    score: candidate.score,
                    slot: OutfitSlot::Backfill,
                });
            }
        }

        picks.truncate(limit);

        tracing::debug!(
            candidates = ranked.len(),
            picked = picks.len(),
            limit,
            "outfit assembled"
        );

        Outfit { picks }
    }

    /// Positively scored items, best first with catalog order breaking ties.
    pub fn candidates<'a>(
        &self,
        items: &'a [Item],
        context: &RecommendationContext,
    ) -> Vec<ScoredCandidate<'a>> {
        let mut candidates: Vec<ScoredCandidate<'a>> = items
            .iter()
            .enumerate()
            .filter_map(|(catalog_index, item)| {
                let score = self.scorer.score(item, context)?;
                (score > 0.0).then_some(ScoredCandidate {
                    item,
                    score,
                    catalog_index,
                })
            })
            .collect();

        candidates.sort_by(|left, right| {
            right
                .score
                .total_cmp(&left.score)
                .then(left.catalog_index.cmp(&right.catalog_index))
        });

        candidates
    }
}
