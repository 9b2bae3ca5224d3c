use thiserror::Error;

/// Renders the optional "did you mean" tail of a not-found message.
fn hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(name) => format!(" (did you mean '{}'?)", name),
        None => String::new(),
    }
}

#[derive(Debug, Error)]
pub enum DietError {
    #[error("Raw material not found: {name}{}", hint(.suggestion))]
    RawMaterialNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Product not found: {name}{}", hint(.suggestion))]
    ProductNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Recipe not found: {name}{}", hint(.suggestion))]
    RecipeNotFound {
        name: String,
        suggestion: Option<String>,
    },

    #[error("Recipe '{0}' has no ingredient quantity")]
    EmptyRecipe(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DietError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_with_suggestion() {
        let err = DietError::RawMaterialNotFound {
            name: "Pastaa".to_string(),
            suggestion: Some("Pasta".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Raw material not found: Pastaa (did you mean 'Pasta'?)"
        );
    }

    #[test]
    fn test_not_found_message_without_suggestion() {
        let err = DietError::ProductNotFound {
            name: "Unknown".to_string(),
            suggestion: None,
        };
        assert_eq!(err.to_string(), "Product not found: Unknown");
    }

    #[test]
    fn test_empty_recipe_message() {
        let err = DietError::EmptyRecipe("Soup".to_string());
        assert_eq!(err.to_string(), "Recipe 'Soup' has no ingredient quantity");
    }
}
