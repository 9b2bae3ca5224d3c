//! The reference catalog used by the `diet_composer` binary.

use crate::catalog::Food;
use crate::constants::{DEMO_MENU, DEMO_RECIPE};
use crate::error::Result;
use crate::models::Menu;

/// Raw materials, products and the pasta recipe of the demonstration.
pub fn demo_catalog() -> Food {
    let mut food = Food::new();

    food.define_raw_material("Sugar", 400.0, 0.0, 100.0, 0.0);
    food.define_raw_material("Mais", 70.0, 2.7, 12.0, 1.3);
    food.define_raw_material("Pasta", 350.0, 12.0, 72.2, 1.5);
    food.define_raw_material("Oil", 900.0, 0.0, 0.0, 100.0);
    food.define_raw_material("Nutella", 530.0, 6.8, 56.0, 31.0);

    food.define_product("Crackers", 111.0, 2.6, 17.2, 3.5);

    food.create_recipe(DEMO_RECIPE)
        .add_ingredient("Pasta", 70.0)
        .add_ingredient("Nutella", 30.0);

    food
}

/// The demonstration menu: a serving of the pasta recipe and one pack of
/// crackers.
pub fn demo_menu(food: &Food, serving_grams: f64) -> Result<Menu<'_>> {
    let mut menu = food.create_menu(DEMO_MENU);
    menu.add_recipe(DEMO_RECIPE, serving_grams)?
        .add_product("Crackers")?;
    Ok(menu)
}
