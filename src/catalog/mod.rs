mod food;
pub mod lookup;

pub use food::Food;
pub use lookup::closest_name;
