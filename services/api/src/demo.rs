use crate::infra::{build_service, InMemoryRecommendationRecorder};
use clap::Args;
use wardrobe_ai::config::AppConfig;
use wardrobe_ai::error::AppError;
use wardrobe_ai::recommendations::{
    OutfitSlot, RankingResponse, RecommendationRequest, RecommendationResponse, ScoreFactor,
    ScoreLabel, TemperatureInput,
};

#[derive(Args, Debug)]
pub(crate) struct RecommendArgs {
    /// Current temperature in °F. Required unless --location is given.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) temp_f: Option<f64>,
    /// Look the weather up by city instead of passing --temp-f
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Occasion tag: casual_outing, work_office, formal_event or workout
    #[arg(long, default_value = "casual_outing")]
    pub(crate) occasion: String,
    /// Weather condition: sunny, rainy or snowy
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Maximum number of items in the outfit
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Record the recommendation for this user
    #[arg(long)]
    pub(crate) user: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Current temperature in °F. Required unless --location is given.
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) temp_f: Option<f64>,
    /// Look the weather up by city instead of passing --temp-f
    #[arg(long)]
    pub(crate) location: Option<String>,
    /// Occasion tag: casual_outing, work_office, formal_event or workout
    #[arg(long, default_value = "casual_outing")]
    pub(crate) occasion: String,
    /// Weather condition: sunny, rainy or snowy
    #[arg(long)]
    pub(crate) condition: Option<String>,
    /// Number of ranked items to print
    #[arg(long, default_value_t = 10)]
    pub(crate) top: usize,
    /// Print the per-factor breakdown under each item
    #[arg(long)]
    pub(crate) breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// User the demo outfits are recorded for
    #[arg(long, default_value = "demo")]
    pub(crate) user: String,
    /// Skip the catalog ranking at the end of the demo
    #[arg(long)]
    pub(crate) skip_rank: bool,
}

struct Scenario {
    title: &'static str,
    temp_f: Option<f64>,
    location: Option<&'static str>,
    occasion: &'static str,
    condition: Option<&'static str>,
}

static DEMO_SCENARIOS: [Scenario; 4] = [
    Scenario {
        title: "Heatwave outing",
        temp_f: Some(95.0),
        location: None,
        occasion: "casual_outing",
        condition: Some("sunny"),
    },
    Scenario {
        title: "Rainy office commute",
        temp_f: None,
        location: Some("Seattle"),
        occasion: "work_office",
        condition: None,
    },
    Scenario {
        title: "Snowy evening gala",
        temp_f: None,
        location: Some("Minneapolis"),
        occasion: "formal_event",
        condition: None,
    },
    Scenario {
        title: "Cool morning workout",
        temp_f: Some(48.0),
        location: None,
        occasion: "workout",
        condition: None,
    },
];

impl Scenario {
    fn request(&self, user: &str) -> RecommendationRequest {
        RecommendationRequest {
            temp_f: self.temp_f.map(TemperatureInput::from),
            occasion: Some(self.occasion.to_string()),
            condition: self.condition.map(str::to_string),
            location: self.location.map(str::to_string),
            limit: None,
            user: Some(user.to_string()),
        }
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (service, recorder) = build_service(&config)?;

    let request = RecommendationRequest {
        temp_f: args.temp_f.map(TemperatureInput::from),
        occasion: Some(args.occasion),
        condition: args.condition,
        location: args.location,
        limit: args.limit,
        user: args.user,
    };
    let response = service.recommend(request)?;
    render_outfit(&response);
    render_saved(&response, &recorder);
    Ok(())
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (service, _) = build_service(&config)?;

    let request = RecommendationRequest {
        temp_f: args.temp_f.map(TemperatureInput::from),
        occasion: Some(args.occasion),
        condition: args.condition,
        location: args.location,
        limit: Some(args.top),
        user: None,
    };
    let ranking = service.rank(request)?;
    render_ranking(&ranking, args.breakdown);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let (service, recorder) = build_service(&config)?;

    println!("Wardrobe recommendation demo");
    for scenario in &DEMO_SCENARIOS {
        println!("\n== {} ==", scenario.title);
        let response = service.recommend(scenario.request(&args.user))?;
        render_outfit(&response);
    }

    let records = recorder.records();
    println!("\n{} recommendations recorded for {}", records.len(), args.user);
    for record in &records {
        println!(
            "- #{} {} at {:.0}°F | {} items | {}",
            record.id.0,
            record.occasion,
            record.weather.temp_f,
            record.outfit.len(),
            record.recorded_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    if !args.skip_rank {
        if let Some(scenario) = DEMO_SCENARIOS.first() {
            println!("\nTop candidates for '{}'", scenario.title);
            let mut request = scenario.request(&args.user);
            request.user = None;
            request.limit = Some(5);
            let ranking = service.rank(request)?;
            render_ranking(&ranking, true);
        }
    }

    Ok(())
}

fn render_outfit(response: &RecommendationResponse) {
    println!(
        "Outfit for {} at {:.0}°F ({})",
        response.occasion,
        response.temp_f,
        response.condition.as_deref().unwrap_or("no condition")
    );
    if response.items.is_empty() {
        println!("- nothing in the catalog suits these conditions");
        return;
    }
    for view in &response.items {
        println!(
            "- [{:<9}] {} (#{}, {}) score {:.1}",
            slot_label(view.slot),
            view.item.name,
            view.item.id,
            view.item.category.as_deref().unwrap_or("uncategorized"),
            view.score
        );
    }
}

fn render_saved(response: &RecommendationResponse, recorder: &InMemoryRecommendationRecorder) {
    let Some(id) = response.saved_recommendation_id else {
        return;
    };
    if let Some(record) = recorder.records().iter().find(|record| record.id == id) {
        println!(
            "Saved recommendation #{} for {} at {}",
            id.0,
            record.user,
            record.recorded_at.to_rfc3339()
        );
    }
}

fn render_ranking(ranking: &RankingResponse, breakdown: bool) {
    println!(
        "{} at {:.0}°F ({}) | target warmth {} | {} positively scored",
        ranking.occasion,
        ranking.temp_f,
        ranking.condition.as_deref().unwrap_or("no condition"),
        ranking.target_warmth,
        ranking.candidates
    );
    for view in &ranking.items {
        let score = view
            .score
            .map(|score| format!("{score:>6.1}"))
            .unwrap_or_else(|| "     -".to_string());
        println!(
            "{score} {:<12} {} (#{})",
            label_text(view.label),
            view.item.name,
            view.item.id
        );
        if breakdown {
            for component in &view.components {
                println!(
                    "         {:<9} {:+5.1}  {}",
                    factor_text(component.factor),
                    component.delta,
                    component.notes
                );
            }
        }
    }
}

fn slot_label(slot: OutfitSlot) -> &'static str {
    match slot {
        OutfitSlot::Top => "top",
        OutfitSlot::Bottom => "bottom",
        OutfitSlot::Shoes => "shoes",
        OutfitSlot::Outerwear => "outerwear",
        OutfitSlot::Backfill => "extra",
    }
}

fn label_text(label: ScoreLabel) -> &'static str {
    match label {
        ScoreLabel::Great => "great",
        ScoreLabel::Good => "good",
        ScoreLabel::Okay => "okay",
        ScoreLabel::Poor => "poor",
        ScoreLabel::Disqualified => "disqualified",
    }
}

fn factor_text(factor: ScoreFactor) -> &'static str {
    match factor {
        ScoreFactor::Base => "base",
        ScoreFactor::Warmth => "warmth",
        ScoreFactor::Formality => "formality",
        ScoreFactor::Activity => "activity",
        ScoreFactor::Condition => "condition",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{build_assembler, AppRecommendationService, SampleWeather};
    use std::sync::Arc;
    use wardrobe_ai::config::ScoringConfig;
    use wardrobe_ai::recommendations::{CatalogSnapshot, RecommendationService};

    fn service() -> (AppRecommendationService, InMemoryRecommendationRecorder) {
        let recorder = InMemoryRecommendationRecorder::default();
        let service = RecommendationService::new(
            Arc::new(CatalogSnapshot::standard()),
            Arc::new(recorder.clone()),
            Arc::new(SampleWeather),
            build_assembler(&ScoringConfig::default()),
        );
        (service, recorder)
    }

    #[test]
    fn every_demo_scenario_produces_an_outfit() {
        let (service, recorder) = service();

        for scenario in &DEMO_SCENARIOS {
            let response = service
                .recommend(scenario.request("demo"))
                .unwrap_or_else(|err| panic!("{} failed: {err}", scenario.title));
            assert!(!response.items.is_empty(), "{} is empty", scenario.title);
        }

        assert_eq!(recorder.records().len(), DEMO_SCENARIOS.len());
    }

    #[test]
    fn located_scenarios_take_weather_from_the_sample_table() {
        let (service, _) = service();
        let gala = &DEMO_SCENARIOS[2];

        let response = service.recommend(gala.request("demo")).expect("gala outfit");
        assert_eq!(response.temp_f, 18.0);
        assert_eq!(response.condition.as_deref(), Some("snowy"));
        assert!(response
            .items
            .iter()
            .any(|view| view.slot == OutfitSlot::Outerwear));
    }
}
