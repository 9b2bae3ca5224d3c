pub mod catalog;
pub mod cli;
pub mod constants;
pub mod demo;
pub mod error;
pub mod interface;
pub mod models;

pub use catalog::Food;
pub use error::{DietError, Result};
pub use models::{Menu, Nutrition, NutritionalElement, Product, RawMaterial, Recipe, RecipeRef};
