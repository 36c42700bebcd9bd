pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::{LocalStorage, StdoutSink};

pub use core::{engine::PrintEngine, pipeline::SimplePipeline};
pub use utils::error::{PrintError, Result};
