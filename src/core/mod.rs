pub mod clockify;
pub mod config;
pub mod gemini;
pub mod parser;
pub mod projects;
pub mod prompts;
pub mod review;
pub mod submit;
#[cfg(test)]
pub mod test_server;
pub mod translator;
pub mod validator;

pub use clockify::*;
pub use config::*;
pub use gemini::*;
pub use parser::*;
pub use projects::*;
pub use prompts::*;
pub use review::*;
pub use submit::*;
pub use translator::*;
pub use validator::*;
