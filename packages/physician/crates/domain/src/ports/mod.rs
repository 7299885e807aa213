pub mod console;
pub mod env;
pub mod fs;
pub mod node;
pub mod process;

pub use console::{Answer, Console, Prompter};
pub use env::EnvProbe;
pub use fs::PathProbe;
pub use node::NodeLocator;
pub use process::{ExecOutput, ProcessRunner};
