//! Recipe model
//!
//! A recipe is a set of raw-material quantities. Its values are expressed per
//! 100g of the resulting mixture and are computed on every query by resolving
//! the ingredient names against the catalog that owns the recipe.

use std::collections::BTreeMap;

use tracing::debug;

use crate::catalog::Food;
use crate::constants::{basis_fraction, GRAMS_BASIS};
use crate::error::{DietError, Result};
use crate::models::nutrition::{Nutrition, NutritionalElement};

/// A recipe as stored in the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    /// Grams of each raw material, keyed by material name.
    ingredients: BTreeMap<String, f64>,
}

impl Recipe {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ingredients: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add `quantity` grams of a raw material.
    ///
    /// Adding the same material again replaces its quantity. The name is only
    /// resolved when values are queried.
    pub fn add_ingredient(&mut self, material: impl Into<String>, quantity: f64) -> &mut Self {
        let material = material.into();
        debug!(recipe = %self.name, %material, quantity, "ingredient set");
        self.ingredients.insert(material, quantity);
        self
    }

    /// Ingredients and their grams, ordered by material name.
    pub fn ingredients(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ingredients.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn ingredient_count(&self) -> usize {
        self.ingredients.len()
    }

    /// Total mass of the ingredients in grams.
    pub fn total_quantity(&self) -> f64 {
        self.ingredients.values().sum()
    }

    /// Per-100g values of this recipe, resolving ingredients through `food`.
    pub fn nutrition_in(&self, food: &Food) -> Result<Nutrition> {
        let absolute = self
            .ingredients
            .iter()
            .map(|(material, qty)| {
                let raw = food.get_raw_material(material)?;
                Ok(raw.values() * basis_fraction(*qty))
            })
            .sum::<Result<Nutrition>>()?;

        let total = self.total_quantity();
        if total <= 0.0 || total.is_nan() {
            return Err(DietError::EmptyRecipe(self.name.clone()));
        }

        Ok(absolute * (GRAMS_BASIS / total))
    }

    /// Bind this recipe to the catalog used to resolve its ingredients.
    pub fn bind<'a>(&'a self, food: &'a Food) -> RecipeRef<'a> {
        RecipeRef { recipe: self, food }
    }
}

/// A recipe together with a read-only view of its catalog.
///
/// This is the [`NutritionalElement`] form of a recipe handed out by
/// [`Food::get_recipe`] and [`Food::recipes`].
#[derive(Debug, Clone, Copy)]
pub struct RecipeRef<'a> {
    recipe: &'a Recipe,
    food: &'a Food,
}

impl<'a> RecipeRef<'a> {
    pub fn recipe(&self) -> &'a Recipe {
        self.recipe
    }
}

impl NutritionalElement for RecipeRef<'_> {
    fn name(&self) -> &str {
        self.recipe.name()
    }

    fn nutrition(&self) -> Result<Nutrition> {
        self.recipe.nutrition_in(self.food)
    }

    fn per_100g(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_food() -> Food {
        let mut food = Food::new();
        food.define_raw_material("Pasta", 350.0, 12.0, 72.2, 1.5);
        food.define_raw_material("Nutella", 530.0, 6.8, 56.0, 31.0);
        food.define_raw_material("Sugar", 400.0, 0.0, 100.0, 0.0);
        food
    }

    #[test]
    fn test_per_100g_mixture() {
        let food = sample_food();
        let mut recipe = Recipe::new("R");
        recipe.add_ingredient("Pasta", 70.0).add_ingredient("Nutella", 30.0);

        let n = recipe.nutrition_in(&food).unwrap();
        assert!((n.calories - 404.0).abs() < 1e-9);
        assert!((n.proteins - 10.44).abs() < 1e-9);
        assert!((n.carbs - 67.34).abs() < 1e-9);
        assert!((n.fat - 10.35).abs() < 1e-9);
    }

    #[test]
    fn test_total_quantity_not_100g() {
        let food = sample_food();
        let mut recipe = Recipe::new("Sweet pasta");
        recipe.add_ingredient("Pasta", 150.0).add_ingredient("Sugar", 50.0);

        // (350 * 1.5 + 400 * 0.5) * 100 / 200
        let cal = recipe.bind(&food).calories().unwrap();
        assert!((cal - 362.5).abs() < 1e-9);
    }

    #[test]
    fn test_add_ingredient_overwrites() {
        let food = sample_food();
        let mut recipe = Recipe::new("R");
        recipe.add_ingredient("Pasta", 10.0).add_ingredient("Pasta", 100.0);

        assert_eq!(recipe.ingredient_count(), 1);
        assert_eq!(recipe.total_quantity(), 100.0);
        assert!((recipe.bind(&food).calories().unwrap() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_ingredient_is_error() {
        let food = sample_food();
        let mut recipe = Recipe::new("R");
        recipe.add_ingredient("Butter", 20.0);

        match recipe.nutrition_in(&food) {
            Err(DietError::RawMaterialNotFound { name, .. }) => assert_eq!(name, "Butter"),
            other => panic!("expected RawMaterialNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_recipe_is_error() {
        let food = sample_food();
        let recipe = Recipe::new("Nothing");
        assert!(matches!(
            recipe.nutrition_in(&food),
            Err(DietError::EmptyRecipe(name)) if name == "Nothing"
        ));
    }

    #[test]
    fn test_zero_quantities_is_error() {
        let food = sample_food();
        let mut recipe = Recipe::new("Air");
        recipe.add_ingredient("Sugar", 0.0);
        assert!(matches!(
            recipe.nutrition_in(&food),
            Err(DietError::EmptyRecipe(_))
        ));
    }

    #[test]
    fn test_ingredients_ordered_by_name() {
        let mut recipe = Recipe::new("R");
        recipe
            .add_ingredient("Sugar", 1.0)
            .add_ingredient("Nutella", 2.0)
            .add_ingredient("Pasta", 3.0);
        let names: Vec<&str> = recipe.ingredients().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Nutella", "Pasta", "Sugar"]);
    }
}
