use crate::error::Result;
use crate::models::nutrition::{Nutrition, NutritionalElement};

/// A basic ingredient with values given per 100g.
#[derive(Debug, Clone, PartialEq)]
pub struct RawMaterial {
    name: String,
    values: Nutrition,
}

impl RawMaterial {
    pub fn new(name: impl Into<String>, values: Nutrition) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Stored per-100g values, without going through the fallible trait.
    #[inline]
    pub fn values(&self) -> Nutrition {
        self.values
    }
}

impl NutritionalElement for RawMaterial {
    fn name(&self) -> &str {
        &self.name
    }

    fn nutrition(&self) -> Result<Nutrition> {
        Ok(self.values)
    }

    fn per_100g(&self) -> bool {
        true
    }
}
