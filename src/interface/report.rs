use serde::Serialize;

use crate::catalog::Food;
use crate::error::Result;
use crate::models::{Menu, Nutrition, NutritionalElement};

/// Serializable snapshot of one element's values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementReport {
    pub name: String,
    pub per_100g: bool,
    #[serde(flatten)]
    pub nutrition: Nutrition,
}

impl ElementReport {
    pub fn from_element<E: NutritionalElement + ?Sized>(element: &E) -> Result<Self> {
        Ok(Self {
            name: element.name().to_string(),
            per_100g: element.per_100g(),
            nutrition: element.nutrition()?,
        })
    }
}

/// Snapshot of a whole catalog plus one menu built from it.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogReport {
    pub raw_materials: Vec<ElementReport>,
    pub products: Vec<ElementReport>,
    pub recipes: Vec<ElementReport>,
    pub menu: ElementReport,
}

impl CatalogReport {
    /// Evaluate every element. Fails on the first recipe that cannot be
    /// resolved.
    pub fn build(food: &Food, menu: &Menu<'_>) -> Result<Self> {
        Ok(Self {
            raw_materials: collect(food.raw_materials())?,
            products: collect(food.products())?,
            recipes: collect(food.recipes())?,
            menu: ElementReport::from_element(menu)?,
        })
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn collect<I, E>(elements: I) -> Result<Vec<ElementReport>>
where
    I: IntoIterator<Item = E>,
    E: NutritionalElement,
{
    elements
        .into_iter()
        .map(|e| ElementReport::from_element(&e))
        .collect()
}
