use crate::error::Result;
use crate::models::{Menu, NutritionalElement};

/// Label of the quantity an element's values refer to.
fn basis_label<E: NutritionalElement + ?Sized>(element: &E) -> &'static str {
    if element.per_100g() { "per 100g" } else { "total" }
}

/// One line with name and calories, e.g. `Pasta cal: 350`.
pub fn format_calories_line<E: NutritionalElement + ?Sized>(element: &E) -> Result<String> {
    Ok(format!("{} cal: {}", element.name(), element.calories()?))
}

/// Multi-line breakdown of all four values.
pub fn format_breakdown<E: NutritionalElement + ?Sized>(element: &E) -> Result<String> {
    let n = element.nutrition()?;
    Ok(format!(
        "Nutritional values for {} ({})\n\tCalories : {:.2}\n\tCarbs    : {:.2}\n\tFat      : {:.2}\n\tProteins : {:.2}",
        element.name(),
        basis_label(element),
        n.calories,
        n.carbs,
        n.fat,
        n.proteins
    ))
}

/// Display a titled list of elements with their calories.
pub fn display_calories<I, E>(title: &str, elements: I) -> Result<()>
where
    I: IntoIterator<Item = E>,
    E: NutritionalElement,
{
    let lines = elements
        .into_iter()
        .map(|e| format_calories_line(&e))
        .collect::<Result<Vec<_>>>()?;

    if lines.is_empty() {
        println!("{}: (none)", title);
        return Ok(());
    }

    println!();
    println!("=== {} ({} items) ===", title, lines.len());
    for line in &lines {
        println!("  {}", line);
    }
    println!();
    Ok(())
}

/// Display the value breakdown of a single element.
pub fn display_breakdown<E: NutritionalElement + ?Sized>(element: &E) -> Result<()> {
    println!("{}", format_breakdown(element)?);
    println!();
    Ok(())
}

/// Display what a menu is made of, followed by its totals.
pub fn display_menu(menu: &Menu<'_>) -> Result<()> {
    println!("=== Menu {} ===", menu.name());
    for serving in menu.recipe_servings() {
        println!("  {:>6.1} g  {}", serving.grams, serving.recipe.name());
    }
    for product in menu.products() {
        println!("  {:>6} u  {}", 1, product.name());
    }
    println!();
    display_breakdown(menu)
}
