pub mod config;
pub mod docid;
pub mod engine;
pub mod error;
pub mod progress;
pub mod scanner;
pub mod stats;
pub mod storage;

pub use config::AppConfig;
pub use engine::{IndexEngine, IndexReport};
pub use error::Error;
pub use progress::{ProgressReporter, SilentReporter};
