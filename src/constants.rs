/// Reference mass, in grams, of per-100g nutritional values.
pub const GRAMS_BASIS: f64 = 100.0;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Demonstration catalog
// ─────────────────────────────────────────────────────────────────────────────

/// Name of the recipe built by the demonstration binary.
pub const DEMO_RECIPE: &str = "Pasta and Nutella";

/// Name of the menu built by the demonstration binary.
pub const DEMO_MENU: &str = "M1";

/// Default serving of the demo recipe in the demo menu, in grams.
pub const DEMO_SERVING_GRAMS: f64 = 50.0;

/// Convert an amount in grams into a multiplier of per-100g values.
#[inline]
pub fn basis_fraction(grams: f64) -> f64 {
    grams / GRAMS_BASIS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_fraction() {
        assert!((basis_fraction(100.0) - 1.0).abs() < 1e-12);
        assert!((basis_fraction(50.0) - 0.5).abs() < 1e-12);
        assert_eq!(basis_fraction(0.0), 0.0);
    }
}
