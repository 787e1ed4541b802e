use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{CatalogItem, ItemId};
use super::repository::{CatalogError, CatalogProvider};

/// Immutable in-memory catalog. Every request sees the same snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSnapshot {
    items: Vec<CatalogItem>,
}

impl CatalogSnapshot {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Loads a CSV export with an `id,name,category,formality,warmth_score,activity_comfort`
    /// header. Blank cells are treated as absent attributes.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_csv_reader(file)
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut items = Vec::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            items.push(row.into_item(index + 1)?);
        }

        Ok(Self { items })
    }

    /// Starter catalog: ten garments per category, each listed twice (base and variant).
    pub fn standard() -> Self {
        let mut items = Vec::with_capacity(STANDARD_GARMENTS.len() * 2);
        let mut next_id = 1;

        for (category, garments) in STANDARD_GARMENTS {
            for (name, formality, warmth, activity) in garments.iter() {
                for display in [name.to_string(), format!("{name} (Variant)")] {
                    items.push(CatalogItem {
                        id: ItemId(next_id),
                        name: display,
                        category: Some(category.to_string()),
                        formality: Some(formality.to_string()),
                        warmth_score: Some(*warmth),
                        activity_comfort: Some(activity.to_string()),
                    });
                    next_id += 1;
                }
            }
        }

        Self { items }
    }
}

impl CatalogProvider for CatalogSnapshot {
    fn items(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Ok(self.items.clone())
    }
}

type Garment = (&'static str, &'static str, i32, &'static str);

const STANDARD_GARMENTS: [(&str, [Garment; 10]); 4] = [
    (
        "top",
        [
            ("Tank Top", "casual", 1, "outdoor"),
            ("T-Shirt", "casual", 2, "outdoor"),
            ("Polo Shirt", "casual", 3, "indoor"),
            ("Long Sleeve Shirt", "casual", 4, "indoor"),
            ("Dress Shirt", "business", 4, "indoor"),
            ("Blouse", "business", 4, "indoor"),
            ("Thermal Shirt", "casual", 7, "outdoor"),
            ("Sweater", "casual", 7, "indoor"),
            ("Hoodie", "casual", 6, "outdoor"),
            ("Workout Tee", "workout", 1, "workout"),
        ],
    ),
    (
        "bottom",
        [
            ("Shorts", "casual", 1, "outdoor"),
            ("Running Shorts", "workout", 1, "workout"),
            ("Jeans", "casual", 4, "outdoor"),
            ("Chinos", "casual", 3, "indoor"),
            ("Dress Pants", "business", 4, "indoor"),
            ("Sweatpants", "casual", 5, "indoor"),
            ("Leggings", "workout", 2, "workout"),
            ("Cargo Pants", "casual", 5, "outdoor"),
            ("Skirt", "casual", 2, "indoor"),
            ("Slacks", "business", 4, "indoor"),
        ],
    ),
    (
        "outerwear",
        [
            ("Light Jacket", "casual", 5, "outdoor"),
            ("Windbreaker", "casual", 4, "outdoor"),
            ("Denim Jacket", "casual", 5, "outdoor"),
            ("Leather Jacket", "casual", 7, "outdoor"),
            ("Blazer", "business", 6, "indoor"),
            ("Cardigan", "casual", 4, "indoor"),
            ("Puffer Jacket", "casual", 9, "outdoor"),
            ("Peacoat", "formal", 8, "indoor"),
            ("Overcoat", "formal", 8, "indoor"),
            ("Fleece Jacket", "casual", 6, "outdoor"),
        ],
    ),
    (
        "shoes",
        [
            ("Sneakers", "casual", 2, "outdoor"),
            ("Running Shoes", "workout", 2, "workout"),
            ("Boots", "casual", 5, "outdoor"),
            ("Dress Shoes", "business", 3, "indoor"),
            ("Loafers", "business", 3, "indoor"),
            ("Heels", "formal", 2, "indoor"),
            ("Sandals", "casual", 1, "outdoor"),
            ("Hiking Boots", "casual", 6, "outdoor"),
            ("Flats", "casual", 2, "indoor"),
            ("Slip-ons", "casual", 1, "indoor"),
        ],
    ),
];

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u64,
    name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    category: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    formality: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    warmth_score: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    activity_comfort: Option<String>,
}

impl CatalogRow {
    fn into_item(self, row: usize) -> Result<CatalogItem, CatalogError> {
        let warmth_score = self
            .warmth_score
            .map(|raw| {
                raw.parse::<i32>().map_err(|_| CatalogError::Malformed {
                    row,
                    message: format!("warmth_score '{raw}' is not an integer"),
                })
            })
            .transpose()?;

        Ok(CatalogItem {
            id: ItemId(self.id),
            name: self.name,
            category: self.category,
            formality: self.formality,
            warmth_score,
            activity_comfort: self.activity_comfort,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
