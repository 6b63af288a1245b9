pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, ListDelimiter, VocabularyConfig};
pub use error::VocabmeterError;
pub use logging::init_tracing;
