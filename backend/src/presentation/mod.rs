pub mod page;
pub mod tiles;
