pub mod render;
pub mod report;

pub use render::{
    display_breakdown, display_calories, display_menu, format_breakdown, format_calories_line,
};
pub use report::{CatalogReport, ElementReport};
