pub mod config;
pub mod disk;
pub mod error;
pub mod runner;
pub mod scaffold;
pub mod templates;

pub use config::Config;
pub use error::{Result, ScaffoldError};
pub use runner::{CommandRunner, CommandSpec, SystemRunner};
pub use scaffold::{ScaffoldPlan, Stage};
