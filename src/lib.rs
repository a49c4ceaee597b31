pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::toml_config::TomlConfig;
pub use crate::core::cpu::{classify_cpu, parse_cpu, recommend_gpus};
pub use crate::core::gpu::{classify_gpu, parse_gpu};
pub use crate::core::report::{OutputFormat, Report};
pub use crate::core::session::{Session, SessionOptions};
pub use crate::domain::model::{CpuRecord, CpuTier, GpuClassification, GpuRecord};
pub use crate::utils::error::{ParseError, Result, RigError};
