use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::catalog::lookup::closest_name;
use crate::error::{DietError, Result};
use crate::models::{Menu, Nutrition, Product, RawMaterial, Recipe, RecipeRef};

/// Registry of raw materials, products and recipes.
///
/// Each collection is keyed by exact name and enumerated in ascending name
/// order. The same name may be used in different collections. Defining a
/// name that already exists in a collection replaces the previous entry.
#[derive(Debug, Clone, Default)]
pub struct Food {
    raw_materials: BTreeMap<String, RawMaterial>,
    products: BTreeMap<String, Product>,
    recipes: BTreeMap<String, Recipe>,
}

impl Food {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a raw material with values for 100g.
    pub fn define_raw_material(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fat: f64,
    ) {
        let name = name.into();
        let material = RawMaterial::new(name.clone(), Nutrition::new(calories, proteins, carbs, fat));

        if self.raw_materials.insert(name.clone(), material).is_some() {
            warn!(%name, "raw material redefined, previous definition replaced");
        } else {
            debug!(%name, calories, "raw material defined");
        }
    }

    /// All raw materials in ascending name order.
    pub fn raw_materials(&self) -> impl Iterator<Item = &RawMaterial> {
        self.raw_materials.values()
    }

    /// Get a raw material by exact name.
    pub fn get_raw_material(&self, name: &str) -> Result<&RawMaterial> {
        self.raw_materials
            .get(name)
            .ok_or_else(|| DietError::RawMaterialNotFound {
                name: name.to_string(),
                suggestion: closest_name(name, self.raw_materials.keys()),
            })
    }

    /// Define a packaged product with values for one unit.
    pub fn define_product(
        &mut self,
        name: impl Into<String>,
        calories: f64,
        proteins: f64,
        carbs: f64,
        fat: f64,
    ) {
        let name = name.into();
        let product = Product::new(name.clone(), Nutrition::new(calories, proteins, carbs, fat));

        if self.products.insert(name.clone(), product).is_some() {
            warn!(%name, "product redefined, previous definition replaced");
        } else {
            debug!(%name, calories, "product defined");
        }
    }

    /// All products in ascending name order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Get a product by exact name.
    pub fn get_product(&self, name: &str) -> Result<&Product> {
        self.products
            .get(name)
            .ok_or_else(|| DietError::ProductNotFound {
                name: name.to_string(),
                suggestion: closest_name(name, self.products.keys()),
            })
    }

    /// Create and register an empty recipe, returning it for editing.
    ///
    /// An existing recipe with the same name is replaced.
    pub fn create_recipe(&mut self, name: impl Into<String>) -> &mut Recipe {
        match self.recipes.entry(name.into()) {
            Entry::Occupied(mut entry) => {
                warn!(name = %entry.key(), "recipe recreated, previous ingredients dropped");
                entry.insert(Recipe::new(entry.key().clone()));
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(name = %entry.key(), "recipe created");
                let recipe = Recipe::new(entry.key().clone());
                entry.insert(recipe)
            }
        }
    }

    /// All recipes in ascending name order, bound to this catalog.
    pub fn recipes(&self) -> impl Iterator<Item = RecipeRef<'_>> {
        self.recipes.values().map(|recipe| recipe.bind(self))
    }

    /// Get a recipe by exact name, bound to this catalog.
    pub fn get_recipe(&self, name: &str) -> Result<RecipeRef<'_>> {
        self.recipes
            .get(name)
            .map(|recipe| recipe.bind(self))
            .ok_or_else(|| self.recipe_not_found(name))
    }

    /// Get a recipe for further editing.
    pub fn recipe_mut(&mut self, name: &str) -> Result<&mut Recipe> {
        if !self.recipes.contains_key(name) {
            return Err(self.recipe_not_found(name));
        }
        self.recipes
            .get_mut(name)
            .ok_or_else(|| DietError::RecipeNotFound {
                name: name.to_string(),
                suggestion: None,
            })
    }

    /// Create a menu that resolves its recipes and products in this catalog.
    ///
    /// Menus are not registered in the catalog.
    pub fn create_menu(&self, name: impl Into<String>) -> Menu<'_> {
        Menu::new(name, self)
    }

    /// Number of entries across the three collections.
    pub fn len(&self) -> usize {
        self.raw_materials.len() + self.products.len() + self.recipes.len()
    }

    /// Check if the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn recipe_not_found(&self, name: &str) -> DietError {
        DietError::RecipeNotFound {
            name: name.to_string(),
            suggestion: closest_name(name, self.recipes.keys()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NutritionalElement;

    fn sample_food() -> Food {
        let mut food = Food::new();
        food.define_raw_material("Sugar", 400.0, 0.0, 100.0, 0.0);
        food.define_raw_material("Mais", 70.0, 2.7, 12.0, 1.3);
        food.define_raw_material("Pasta", 350.0, 12.0, 72.2, 1.5);
        food.define_product("Crackers", 111.0, 2.6, 17.2, 3.5);
        food
    }

    #[test]
    fn test_raw_materials_sorted_by_name() {
        let food = sample_food();
        let names: Vec<&str> = food.raw_materials().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Mais", "Pasta", "Sugar"]);
    }

    #[test]
    fn test_get_raw_material() {
        let food = sample_food();
        let mais = food.get_raw_material("Mais").unwrap();
        assert_eq!(mais.calories().unwrap(), 70.0);
        assert!(mais.per_100g());
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let food = sample_food();
        match food.get_raw_material("pasta") {
            Err(DietError::RawMaterialNotFound { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("Pasta"));
            }
            other => panic!("expected RawMaterialNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_names_are_errors() {
        let food = Food::new();
        assert!(matches!(
            food.get_raw_material("Unknown"),
            Err(DietError::RawMaterialNotFound { suggestion: None, .. })
        ));
        assert!(matches!(
            food.get_product("Unknown"),
            Err(DietError::ProductNotFound { suggestion: None, .. })
        ));
        assert!(matches!(
            food.get_recipe("Unknown"),
            Err(DietError::RecipeNotFound { suggestion: None, .. })
        ));
    }

    #[test]
    fn test_redefinition_replaces() {
        let mut food = sample_food();
        food.define_raw_material("Sugar", 387.0, 0.0, 99.8, 0.0);

        assert_eq!(food.raw_materials().count(), 3);
        assert_eq!(food.get_raw_material("Sugar").unwrap().calories().unwrap(), 387.0);
    }

    #[test]
    fn test_same_name_in_different_collections() {
        let mut food = sample_food();
        food.define_product("Pasta", 700.0, 24.0, 144.4, 3.0);
        food.create_recipe("Pasta").add_ingredient("Pasta", 100.0);

        assert_eq!(food.get_raw_material("Pasta").unwrap().calories().unwrap(), 350.0);
        assert_eq!(food.get_product("Pasta").unwrap().calories().unwrap(), 700.0);
        assert!((food.get_recipe("Pasta").unwrap().calories().unwrap() - 350.0).abs() < 1e-9);
        assert_eq!(food.len(), 6);
    }

    #[test]
    fn test_create_recipe_registers() {
        let mut food = sample_food();
        food.create_recipe("Polenta").add_ingredient("Mais", 100.0);

        let recipe = food.get_recipe("Polenta").unwrap();
        assert_eq!(recipe.name(), "Polenta");
        assert!(recipe.per_100g());
        assert!((recipe.calories().unwrap() - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_create_recipe_twice_resets() {
        let mut food = sample_food();
        food.create_recipe("R").add_ingredient("Mais", 100.0);
        food.create_recipe("R");

        assert_eq!(food.recipes().count(), 1);
        assert_eq!(food.get_recipe("R").unwrap().recipe().ingredient_count(), 0);
    }

    #[test]
    fn test_recipe_mut_continues_editing() {
        let mut food = sample_food();
        food.create_recipe("R").add_ingredient("Mais", 50.0);
        food.recipe_mut("R").unwrap().add_ingredient("Sugar", 50.0);

        // (70 * 0.5 + 400 * 0.5) * 100 / 100
        assert!((food.get_recipe("R").unwrap().calories().unwrap() - 235.0).abs() < 1e-9);
        assert!(matches!(
            food.recipe_mut("Nope"),
            Err(DietError::RecipeNotFound { .. })
        ));
    }

    #[test]
    fn test_is_empty() {
        assert!(Food::new().is_empty());
        assert!(!sample_food().is_empty());
    }
}
