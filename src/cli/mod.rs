pub mod commands;
pub mod replay;

pub use commands::{Cli, Commands};
pub use replay::{ReplayReport, print_report, replay};
