pub mod env;
pub mod fs;
pub mod node;
pub mod process;
pub mod terminal;
