pub mod cpu;
pub mod gpu;
pub mod report;
pub mod session;

pub use crate::domain::model::{CpuRecord, GpuRecord};
pub use crate::domain::ports::Console;
pub use crate::utils::error::Result;
