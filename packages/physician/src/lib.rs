//! Facade crate: one dependency pulling the physician layers together.

pub use application;
pub use domain;
pub use infrastructure;
