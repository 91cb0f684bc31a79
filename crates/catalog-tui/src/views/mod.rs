pub mod catalog_grid;
pub mod search;
