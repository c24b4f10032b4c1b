pub mod building;
pub mod comparison;
