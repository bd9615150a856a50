pub mod check;
pub mod init;
pub mod log;
pub mod projects;

pub use check::*;
pub use init::*;
pub use log::*;
pub use projects::*;
