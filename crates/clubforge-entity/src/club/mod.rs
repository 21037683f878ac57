//! Club domain entities.

pub mod filter;
pub mod model;

pub use filter::filter_clubs;
pub use model::Club;
