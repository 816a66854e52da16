//! Guest domain entities.

pub mod model;

pub use model::Guest;
