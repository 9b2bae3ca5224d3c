use crate::error::Result;
use crate::models::nutrition::{Nutrition, NutritionalElement};

/// A packaged product with values given for one whole unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    values: Nutrition,
}

impl Product {
    pub fn new(name: impl Into<String>, values: Nutrition) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    #[inline]
    pub fn values(&self) -> Nutrition {
        self.values
    }
}

impl NutritionalElement for Product {
    fn name(&self) -> &str {
        &self.name
    }

    fn nutrition(&self) -> Result<Nutrition> {
        Ok(self.values)
    }

    fn per_100g(&self) -> bool {
        false
    }
}
