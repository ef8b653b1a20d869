//! Domain services

pub mod aggregator;
pub mod classifier;
pub mod hierarchy;

pub use aggregator::aggregate;
pub use classifier::{group_is_equivalent_energy, is_equivalent_energy, EconomyUnit};
pub use hierarchy::{in_model, in_trim, in_year, models, trims, years};
