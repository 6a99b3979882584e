pub mod category;
pub mod params;
pub mod suggestion;
pub mod term;
