use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque catalog identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Storage shape of a catalog row. Attribute columns are free-form strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub formality: Option<String>,
    #[serde(default)]
    pub warmth_score: Option<i32>,
    #[serde(default)]
    pub activity_comfort: Option<String>,
}

/// Wearable item with its attributes parsed into closed variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    pub formality: Option<Formality>,
    pub warmth_score: Option<i32>,
    pub activity_comfort: Option<ActivityComfort>,
}

impl From<CatalogItem> for Item {
    fn from(row: CatalogItem) -> Self {
        Self {
            id: row.id,
            name: row.name,
            category: Category::parse(row.category.as_deref().unwrap_or_default()),
            formality: row.formality.as_deref().and_then(Formality::parse),
            warmth_score: row.warmth_score,
            activity_comfort: row.activity_comfort.as_deref().and_then(ActivityComfort::parse),
        }
    }
}

impl From<&CatalogItem> for Item {
    fn from(row: &CatalogItem) -> Self {
        Item::from(row.clone())
    }
}

impl From<&Item> for CatalogItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: Some(item.category.label().to_string()),
            formality: item.formality.map(|value| value.label().to_string()),
            warmth_score: item.warmth_score,
            activity_comfort: item.activity_comfort.map(|value| value.label().to_string()),
        }
    }
}

/// Outfit slot bucket. Unknown tags are kept lower-cased so they still group together.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Top,
    Bottom,
    Outerwear,
    Shoes,
    Other(String),
}

impl Category {
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "top" => Self::Top,
            "bottom" => Self::Bottom,
            "outerwear" => Self::Outerwear,
            "shoes" => Self::Shoes,
            _ => Self::Other(normalized),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Category::Top => "top",
            Category::Bottom => "bottom",
            Category::Outerwear => "outerwear",
            Category::Shoes => "shoes",
            Category::Other(tag) => tag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Casual,
    Business,
    Formal,
    Workout,
}

impl Formality {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "casual" => Some(Self::Casual),
            "business" => Some(Self::Business),
            "formal" => Some(Self::Formal),
            "workout" => Some(Self::Workout),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Formality::Casual => "casual",
            Formality::Business => "business",
            Formality::Formal => "formal",
            Formality::Workout => "workout",
        }
    }

    /// Casual and business are close enough to earn partial credit for each other.
    pub const fn is_business_casual(self) -> bool {
        matches!(self, Formality::Casual | Formality::Business)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityComfort {
    Indoor,
    Outdoor,
    Workout,
}

impl ActivityComfort {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "indoor" => Some(Self::Indoor),
            "outdoor" => Some(Self::Outdoor),
            "workout" => Some(Self::Workout),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            ActivityComfort::Indoor => "indoor",
            ActivityComfort::Outdoor => "outdoor",
            ActivityComfort::Workout => "workout",
        }
    }
}

/// Occasion tag supplied with a request.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Occasion {
    CasualOuting,
    WorkOffice,
    FormalEvent,
    Workout,
    Unrecognized(String),
}

impl Occasion {
    pub const DEFAULT_TAG: &'static str = "casual_outing";

    /// Tags match exactly after trimming; `Work_Office` is not `work_office`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed {
            "casual_outing" => Self::CasualOuting,
            "work_office" => Self::WorkOffice,
            "formal_event" => Self::FormalEvent,
            "workout" => Self::Workout,
            _ => Self::Unrecognized(trimmed.to_string()),
        }
    }

    /// Boundary parsing: a missing or blank tag means a casual outing.
    pub fn from_request(raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => Self::parse(value),
            None => Self::CasualOuting,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Occasion::CasualOuting => "casual_outing",
            Occasion::WorkOffice => "work_office",
            Occasion::FormalEvent => "formal_event",
            Occasion::Workout => "workout",
            Occasion::Unrecognized(tag) => tag,
        }
    }
}

impl fmt::Display for Occasion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Normalized weather condition. Conditions without a scoring rule are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WeatherCondition {
    Sunny,
    Rainy,
    Snowy,
    Other(String),
}

impl WeatherCondition {
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => None,
            "sunny" => Some(Self::Sunny),
            "rainy" => Some(Self::Rainy),
            "snowy" => Some(Self::Snowy),
            _ => Some(Self::Other(normalized)),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            WeatherCondition::Sunny => "sunny",
            WeatherCondition::Rainy => "rainy",
            WeatherCondition::Snowy => "snowy",
            WeatherCondition::Other(tag) => tag,
        }
    }
}

/// Everything an item is scored against.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationContext {
    pub temp_f: f64,
    pub occasion: Occasion,
    pub condition: Option<WeatherCondition>,
}

impl RecommendationContext {
    pub fn new(temp_f: f64, occasion: Occasion, condition: Option<WeatherCondition>) -> Self {
        Self {
            temp_f,
            occasion,
            condition,
        }
    }

    /// Builds a context from request-shaped strings.
    pub fn from_tags(temp_f: f64, occasion: Option<&str>, condition: Option<&str>) -> Self {
        Self::new(
            temp_f,
            Occasion::from_request(occasion),
            condition.and_then(WeatherCondition::parse),
        )
    }
}
