//! Shared nutrition values and the contract every nutritional entity exposes.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// The four tracked nutritional values.
///
/// Whether they refer to 100g or to a whole unit depends on the element
/// they come from, see [`NutritionalElement::per_100g`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub proteins: f64, // grams
    pub carbs: f64,    // grams
    pub fat: f64,      // grams
}

impl Nutrition {
    pub fn new(calories: f64, proteins: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            proteins,
            carbs,
            fat,
        }
    }

    /// All values zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every value by a multiplier.
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            proteins: self.proteins * multiplier,
            carbs: self.carbs * multiplier,
            fat: self.fat * multiplier,
        }
    }

    /// Field-wise sum with another set of values.
    pub fn add(&self, other: &Nutrition) -> Self {
        Self {
            calories: self.calories + other.calories,
            proteins: self.proteins + other.proteins,
            carbs: self.carbs + other.carbs,
            fat: self.fat + other.fat,
        }
    }
}

impl std::ops::Add for Nutrition {
    type Output = Nutrition;

    fn add(self, other: Nutrition) -> Nutrition {
        Nutrition::add(&self, &other)
    }
}

impl std::ops::Mul<f64> for Nutrition {
    type Output = Nutrition;

    fn mul(self, multiplier: f64) -> Nutrition {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for Nutrition {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Nutrition::zero(), |acc, n| acc + n)
    }
}

/// Anything with a name and nutritional values.
///
/// Leaves (raw materials, products) store their values; aggregates (recipes,
/// menus) compute them from their constituents on every query, which is why
/// the value accessors are fallible.
pub trait NutritionalElement {
    fn name(&self) -> &str;

    /// All four values at once.
    fn nutrition(&self) -> Result<Nutrition>;

    /// `true` when values refer to 100g, `false` when they refer to the
    /// whole element (a product unit or a full menu).
    fn per_100g(&self) -> bool;

    fn calories(&self) -> Result<f64> {
        Ok(self.nutrition()?.calories)
    }

    fn proteins(&self) -> Result<f64> {
        Ok(self.nutrition()?.proteins)
    }

    fn carbs(&self) -> Result<f64> {
        Ok(self.nutrition()?.carbs)
    }

    fn fat(&self) -> Result<f64> {
        Ok(self.nutrition()?.fat)
    }
}

impl<T: NutritionalElement + ?Sized> NutritionalElement for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn nutrition(&self) -> Result<Nutrition> {
        (**self).nutrition()
    }

    fn per_100g(&self) -> bool {
        (**self).per_100g()
    }
}
