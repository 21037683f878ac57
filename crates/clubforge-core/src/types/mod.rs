//! Shared type definitions used across crates.

pub mod lookup;

pub use lookup::Lookup;
