use clap::{Parser, Subcommand, ValueEnum};

use crate::constants::DEMO_SERVING_GRAMS;

/// diet_composer — nutritional values of raw materials, recipes and menus.
#[derive(Parser, Debug)]
#[command(name = "diet_composer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Print results as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the demonstration catalog and menu and print their values.
    Demo {
        /// Grams of the pasta recipe served in the menu.
        #[arg(long, default_value_t = DEMO_SERVING_GRAMS)]
        serving: f64,
    },

    /// List one collection of the demonstration catalog.
    List {
        #[arg(value_enum)]
        collection: Collection,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Demo {
            serving: DEMO_SERVING_GRAMS,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Collection {
    RawMaterials,
    Products,
    Recipes,
}
