// CLI front end (requires terminal, process spawning, config files)
#[cfg(feature = "cli")]
pub mod cli;

pub mod logger;
