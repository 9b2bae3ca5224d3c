//! Menu model
//!
//! A menu combines servings of recipes with whole units of packaged products.
//! Its values are absolute totals for the whole menu.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Food;
use crate::constants::basis_fraction;
use crate::error::Result;
use crate::models::nutrition::{Nutrition, NutritionalElement};
use crate::models::product::Product;
use crate::models::recipe::RecipeRef;

/// A serving of a recipe within a menu.
#[derive(Debug, Clone, Copy)]
pub struct Serving<'a> {
    pub recipe: RecipeRef<'a>,
    /// Serving size in grams.
    pub grams: f64,
}

/// A menu bound to the catalog it was created from.
///
/// Menus are not stored in the catalog. They borrow it read-only for as long
/// as they live.
#[derive(Debug, Clone)]
pub struct Menu<'a> {
    name: String,
    food: &'a Food,
    /// One serving per recipe, keyed by recipe name.
    recipes: BTreeMap<String, Serving<'a>>,
    /// Each product counts as exactly one unit.
    products: BTreeMap<String, &'a Product>,
}

impl<'a> Menu<'a> {
    pub(crate) fn new(name: impl Into<String>, food: &'a Food) -> Self {
        Self {
            name: name.into(),
            food,
            recipes: BTreeMap::new(),
            products: BTreeMap::new(),
        }
    }

    /// Add a serving of `grams` of a catalog recipe.
    ///
    /// The recipe is resolved now; adding the same recipe again replaces its
    /// serving size.
    pub fn add_recipe(&mut self, recipe: &str, grams: f64) -> Result<&mut Self> {
        let resolved = self.food.get_recipe(recipe)?;
        debug!(menu = %self.name, recipe, grams, "recipe serving set");
        self.recipes.insert(
            recipe.to_string(),
            Serving {
                recipe: resolved,
                grams,
            },
        );
        Ok(self)
    }

    /// Add one unit of a catalog product. Adding it again has no effect.
    pub fn add_product(&mut self, product: &str) -> Result<&mut Self> {
        let resolved = self.food.get_product(product)?;
        debug!(menu = %self.name, product, "product added");
        self.products.insert(product.to_string(), resolved);
        Ok(self)
    }

    /// Recipe servings ordered by recipe name.
    pub fn recipe_servings(&self) -> impl Iterator<Item = &Serving<'a>> {
        self.recipes.values()
    }

    /// Products ordered by name.
    pub fn products(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.products.values().copied()
    }
}

impl NutritionalElement for Menu<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn nutrition(&self) -> Result<Nutrition> {
        let from_recipes = self
            .recipes
            .values()
            .map(|serving| Ok(serving.recipe.nutrition()? * basis_fraction(serving.grams)))
            .sum::<Result<Nutrition>>()?;

        let from_products: Nutrition = self.products.values().map(|p| p.values()).sum();

        Ok(from_recipes + from_products)
    }

    fn per_100g(&self) -> bool {
        false
    }
}
