pub mod config;
pub mod errors;
pub mod flows;
pub mod llm_client;
pub mod logging;
pub mod session;
pub mod survey;

pub use config::Config;
pub use errors::AppError;
pub use session::{ChatSession, SessionConfig};
