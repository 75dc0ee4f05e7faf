//! Census data structures and loading

mod data;
pub mod loader;

pub use data::{Cell, CensusTable};
pub use loader::{load_census, load_census_from_reader};
