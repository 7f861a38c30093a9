//! Infrastructure Adapters
//!
//! 六边形架构的适配器实现

pub mod console;
pub mod storage;

pub use console::*;
pub use storage::*;
