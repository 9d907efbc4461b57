//! Logger configuration
//!
//! - `LoggerConfig`: which sink to build and how, loadable from YAML or JSON
//! - `ConfigError`: failures while reading a config or building its sink

mod error;
mod file;

pub use error::{ConfigError, ConfigResult};
pub use file::LoggerConfig;
