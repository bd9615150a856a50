pub mod config;
pub mod entry;
pub mod project;

pub use config::*;
pub use entry::*;
pub use project::*;
