use clap::Parser;
use tracing_subscriber::EnvFilter;

use diet_composer_rs::cli::{Cli, Collection, Command};
use diet_composer_rs::demo::{demo_catalog, demo_menu};
use diet_composer_rs::error::Result;
use diet_composer_rs::interface::{
    display_breakdown, display_calories, display_menu, CatalogReport, ElementReport,
};
use diet_composer_rs::Food;

fn main() {
    // Logs go to stderr so stdout stays clean for --json.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("diet_composer_rs=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Demo { serving } => cmd_demo(serving, cli.json),
        Command::List { collection } => cmd_list(collection, cli.json),
    }
}

/// Build the demonstration catalog and menu and print every value.
fn cmd_demo(serving: f64, json: bool) -> Result<()> {
    let food = demo_catalog();
    let menu = demo_menu(&food, serving)?;

    if json {
        println!("{}", CatalogReport::build(&food, &menu)?.to_json()?);
        return Ok(());
    }

    display_calories("Raw materials", food.raw_materials())?;
    display_breakdown(food.get_raw_material("Oil")?)?;

    display_calories("Products", food.products())?;
    display_breakdown(food.get_product("Crackers")?)?;

    for recipe in food.recipes() {
        display_breakdown(&recipe)?;
    }

    display_menu(&menu)
}

/// Print one collection of the demonstration catalog.
fn cmd_list(collection: Collection, json: bool) -> Result<()> {
    let food = demo_catalog();

    if json {
        let reports = collection_reports(&food, collection)?;
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    match collection {
        Collection::RawMaterials => display_calories("Raw materials", food.raw_materials()),
        Collection::Products => display_calories("Products", food.products()),
        Collection::Recipes => display_calories("Recipes", food.recipes()),
    }
}

fn collection_reports(food: &Food, collection: Collection) -> Result<Vec<ElementReport>> {
    match collection {
        Collection::RawMaterials => food
            .raw_materials()
            .map(ElementReport::from_element)
            .collect(),
        Collection::Products => food.products().map(ElementReport::from_element).collect(),
        Collection::Recipes => food
            .recipes()
            .map(|r| ElementReport::from_element(&r))
            .collect(),
    }
}
