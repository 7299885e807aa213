pub mod adapters;

pub use adapters::env::SystemEnvProbe;
pub use adapters::fs::SystemPathProbe;
pub use adapters::node::SystemNodeLocator;
pub use adapters::process::SystemProcessRunner;
pub use adapters::terminal::{AssumeYesPrompter, TerminalConsole, TerminalPrompter};
