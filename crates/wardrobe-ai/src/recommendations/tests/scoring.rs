use super::common::*;
use crate::recommendations::domain::{
    ActivityComfort, Category, Formality, Item, Occasion, WeatherCondition,
};
use crate::recommendations::scoring::{
    score_item, ItemScorer, ScoreFactor, ScoreLabel, ScoringWeights, DISQUALIFIED_SCORE,
};

#[test]
fn perfect_fit_collects_every_bonus() {
    let scorer = ItemScorer::default();
    let shirt = casual_outdoor(1, "T-Shirt", Category::Top, 2);
    let ctx = context(95.0, Occasion::CasualOuting, None);

    let card = scorer.evaluate(&shirt, &ctx).expect("rated item");
    assert_close(card.total, 15.0);
    assert_close(card.delta_for(ScoreFactor::Base), 10.0);
    assert_close(card.delta_for(ScoreFactor::Warmth), 0.0);
    assert_close(card.delta_for(ScoreFactor::Formality), 3.0);
    assert_close(card.delta_for(ScoreFactor::Activity), 2.0);
}

#[test]
fn warmth_distance_is_penalized_per_step() {
    let scorer = ItemScorer::default();
    let ctx = context(95.0, Occasion::CasualOuting, None);

    let shorts = casual_outdoor(2, "Shorts", Category::Bottom, 3);
    assert_close(scorer.score(&shorts, &ctx).expect("rated"), 13.8);

    // Cooler than the target is penalized the same as warmer.
    let tank = casual_outdoor(3, "Tank Top", Category::Top, 1);
    assert_close(scorer.score(&tank, &ctx).expect("rated"), 13.8);
}

#[test]
fn missing_warmth_disqualifies_the_item() {
    let scorer = ItemScorer::default();
    let scarf = item(
        9,
        "Scarf",
        Category::Other("accessory".to_string()),
        Some(Formality::Casual),
        None,
        Some(ActivityComfort::Outdoor),
    );
    let ctx = context(40.0, Occasion::CasualOuting, None);

    assert!(scorer.evaluate(&scarf, &ctx).is_none());
    assert_eq!(scorer.score(&scarf, &ctx), None);
    assert_eq!(score_item(&scarf, 40.0, "casual_outing", None), DISQUALIFIED_SCORE);
}

#[test]
fn business_and_casual_earn_partial_credit_for_each_other() {
    let scorer = ItemScorer::default();
    let ctx = context(70.0, Occasion::WorkOffice, None);

    let chinos = item(
        1,
        "Chinos",
        Category::Bottom,
        Some(Formality::Casual),
        Some(5),
        Some(ActivityComfort::Indoor),
    );
    let card = scorer.evaluate(&chinos, &ctx).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Formality), 1.0);
    assert_close(card.total, 13.0);

    let tuxedo = item(
        2,
        "Tuxedo Jacket",
        Category::Top,
        Some(Formality::Formal),
        Some(5),
        Some(ActivityComfort::Indoor),
    );
    let card = scorer.evaluate(&tuxedo, &ctx).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Formality), 0.0);
    assert_close(card.total, 12.0);
}

#[test]
fn cold_office_prefers_warm_business_wear() {
    let scorer = ItemScorer::default();
    let ctx = context(30.0, Occasion::WorkOffice, None);

    let wool_suit = item(
        1,
        "Wool Suit Jacket",
        Category::Outerwear,
        Some(Formality::Business),
        Some(9),
        Some(ActivityComfort::Indoor),
    );
    let tee = casual_outdoor(2, "T-Shirt", Category::Top, 2);

    assert_close(scorer.score(&wool_suit, &ctx).expect("rated"), 15.0);
    assert_close(scorer.score(&tee, &ctx).expect("rated"), 2.6);
}

#[test]
fn unrecognized_occasion_scores_base_and_warmth_only() {
    let scorer = ItemScorer::default();
    let ctx = context(70.0, Occasion::parse("brunch"), None);
    let shirt = item(
        1,
        "Oxford Shirt",
        Category::Outerwear,
        Some(Formality::Business),
        Some(5),
        Some(ActivityComfort::Indoor),
    );

    let card = scorer.evaluate(&shirt, &ctx).expect("rated");
    assert_close(card.total, 10.0);
    assert_close(card.delta_for(ScoreFactor::Formality), 0.0);
    assert_close(card.delta_for(ScoreFactor::Activity), 0.0);
}

#[test]
fn occasion_tags_are_case_sensitive() {
    let scorer = ItemScorer::default();
    let shirt = item(
        1,
        "Oxford Shirt",
        Category::Top,
        Some(Formality::Business),
        Some(5),
        Some(ActivityComfort::Indoor),
    );

    let exact = context(70.0, Occasion::parse("work_office"), None);
    assert_close(scorer.score(&shirt, &exact).expect("rated"), 15.0);

    for tag in ["Work_Office", "WORK_OFFICE"] {
        let ctx = context(70.0, Occasion::parse(tag), None);
        let card = scorer.evaluate(&shirt, &ctx).expect("rated");
        assert_close(card.delta_for(ScoreFactor::Formality), 0.0);
        assert_close(card.delta_for(ScoreFactor::Activity), 0.0);
        assert_close(card.total, 10.0);
    }
    assert_eq!(
        score_item(&shirt, 70.0, "Work_Office", None),
        score_item(&shirt, 70.0, "brunch", None)
    );
}

#[test]
fn missing_attributes_earn_no_bonus() {
    let scorer = ItemScorer::default();
    let ctx = context(95.0, Occasion::CasualOuting, None);
    let plain = item(1, "Plain Tee", Category::Top, None, Some(2), None);

    assert_close(scorer.score(&plain, &ctx).expect("rated"), 10.0);
}

#[test]
fn hot_sun_penalizes_heavy_items_from_the_threshold() {
    let scorer = ItemScorer::default();
    let hoodie = casual_outdoor(1, "Hoodie", Category::Top, 6);
    let light = casual_outdoor(2, "Light Jacket", Category::Outerwear, 5);

    let at_threshold = context(85.0, Occasion::CasualOuting, Some(WeatherCondition::Sunny));
    let card = scorer.evaluate(&hoodie, &at_threshold).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Condition), -3.0);

    let card = scorer.evaluate(&light, &at_threshold).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Condition), 0.0);

    let below = context(84.9, Occasion::CasualOuting, Some(WeatherCondition::Sunny));
    let card = scorer.evaluate(&hoodie, &below).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Condition), 0.0);
}

#[test]
fn rain_rewards_outerwear_and_boots_independently() {
    let scorer = ItemScorer::default();
    let ctx = context(55.0, Occasion::CasualOuting, Some(WeatherCondition::Rainy));

    let raincoat = casual_outdoor(1, "Raincoat", Category::Outerwear, 5);
    let boots = casual_outdoor(2, "Rain BOOTS", Category::Shoes, 5);
    let sneakers = casual_outdoor(3, "Sneakers", Category::Shoes, 2);
    let boot_cut = casual_outdoor(4, "Bootcut Jeans", Category::Bottom, 4);

    let delta = |item: &Item| {
        scorer
            .evaluate(item, &ctx)
            .expect("rated")
            .delta_for(ScoreFactor::Condition)
    };
    assert_close(delta(&raincoat), 1.5);
    assert_close(delta(&boots), 2.0);
    assert_close(delta(&sneakers), 0.0);
    // Only shoes qualify for the boot bonus.
    assert_close(delta(&boot_cut), 0.0);
}

#[test]
fn snow_splits_items_at_the_warmth_threshold() {
    let scorer = ItemScorer::default();
    let ctx = context(25.0, Occasion::CasualOuting, Some(WeatherCondition::Snowy));

    let thermal = casual_outdoor(1, "Thermal Shirt", Category::Top, 7);
    let hoodie = casual_outdoor(2, "Hoodie", Category::Top, 6);

    let card = scorer.evaluate(&thermal, &ctx).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Condition), 2.5);
    let card = scorer.evaluate(&hoodie, &ctx).expect("rated");
    assert_close(card.delta_for(ScoreFactor::Condition), -2.0);
}

#[test]
fn snow_adjustment_is_exactly_the_configured_delta() {
    let scorer = ItemScorer::default();
    let plain = context(25.0, Occasion::CasualOuting, None);
    let snowy = context(25.0, Occasion::CasualOuting, Some(WeatherCondition::Snowy));

    let parka = casual_outdoor(1, "Parka", Category::Outerwear, 8);
    let tee = casual_outdoor(2, "T-Shirt", Category::Top, 3);

    let shift = |item: &Item| {
        scorer.score(item, &snowy).expect("rated") - scorer.score(item, &plain).expect("rated")
    };
    assert_close(shift(&parka), 2.5);
    assert_close(shift(&tee), -2.0);
}

#[test]
fn unknown_condition_leaves_score_untouched() {
    let scorer = ItemScorer::default();
    let shirt = casual_outdoor(1, "T-Shirt", Category::Top, 2);

    let clear = context(95.0, Occasion::CasualOuting, None);
    let cloudy = context(
        95.0,
        Occasion::CasualOuting,
        WeatherCondition::parse("cloudy"),
    );
    assert_eq!(scorer.score(&shirt, &clear), scorer.score(&shirt, &cloudy));
}

#[test]
fn flat_entry_point_accepts_raw_tags() {
    let boots = casual_outdoor(1, "Boots", Category::Shoes, 5);
    let typed = ItemScorer::default()
        .score(
            &boots,
            &context(55.0, Occasion::CasualOuting, Some(WeatherCondition::Rainy)),
        )
        .expect("rated");

    assert_close(score_item(&boots, 55.0, " casual_outing ", Some("Rainy")), typed);
}

#[test]
fn custom_weights_replace_the_defaults() {
    let weights = ScoringWeights {
        base: 20.0,
        warmth_penalty_per_step: 2.0,
        ..ScoringWeights::default()
    };
    let scorer = ItemScorer::new(weights);
    let shorts = casual_outdoor(1, "Shorts", Category::Bottom, 3);

    let total = scorer
        .score(&shorts, &context(95.0, Occasion::CasualOuting, None))
        .expect("rated");
    assert_close(total, 23.0);
    assert_close(scorer.weights().base, 20.0);
}

#[test]
fn score_labels_follow_thresholds() {
    assert_eq!(ScoreLabel::for_score(Some(10.0)), ScoreLabel::Great);
    assert_eq!(ScoreLabel::for_score(Some(9.99)), ScoreLabel::Good);
    assert_eq!(ScoreLabel::for_score(Some(5.0)), ScoreLabel::Good);
    assert_eq!(ScoreLabel::for_score(Some(0.1)), ScoreLabel::Okay);
    assert_eq!(ScoreLabel::for_score(Some(0.0)), ScoreLabel::Poor);
    assert_eq!(ScoreLabel::for_score(Some(-4.0)), ScoreLabel::Poor);
    assert_eq!(ScoreLabel::for_score(None), ScoreLabel::Disqualified);
}

#[test]
fn ranking_orders_by_score_then_catalog_position() {
    let scorer = ItemScorer::default();
    let items = vec![
        casual_outdoor(1, "Shorts", Category::Bottom, 3),
        item(2, "Mystery Box", Category::Top, None, None, None),
        casual_outdoor(3, "T-Shirt", Category::Top, 2),
        casual_outdoor(4, "Sneakers", Category::Shoes, 2),
    ];
    let ranked = scorer.rank(&items, &context(95.0, Occasion::CasualOuting, None));

    let ids: Vec<u64> = ranked.iter().map(|entry| entry.item.id.0).collect();
    assert_eq!(ids, vec![3, 4, 1, 2]);
    assert_eq!(ranked[0].label, ScoreLabel::Great);
    assert_eq!(ranked[3].label, ScoreLabel::Disqualified);
    assert_eq!(ranked[3].score(), None);
}
