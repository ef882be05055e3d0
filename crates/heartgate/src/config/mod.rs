//! Session configuration, loaded once from JSON at startup.

mod error;
mod session;

pub use error::ConfigError;
pub use session::{QuestionConfig, SessionConfig};
