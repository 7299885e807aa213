pub mod confirm;
pub mod doctor;
pub mod specialists;

pub use confirm::FixConfirmer;
pub use doctor::{Doctor, FixReport, FixStatus};
