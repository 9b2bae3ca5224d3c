mod menu;
mod nutrition;
mod product;
mod raw_material;
mod recipe;

pub use menu::{Menu, Serving};
pub use nutrition::{Nutrition, NutritionalElement};
pub use product::Product;
pub use raw_material::RawMaterial;
pub use recipe::{Recipe, RecipeRef};
