pub mod ai;
pub mod config;
pub mod error;
pub mod text;

pub use config::{load_dotenv, AppConfig, DEFAULT_CHUNK_CHARS};
pub use error::{Error, Result};
