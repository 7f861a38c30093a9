//! Application Layer - 应用层
//!
//! - Ports: 文档来源与报告输出的抽象
//! - Queries: 报告查询及其处理器

pub mod ports;
pub mod queries;

pub use ports::{DocumentSource, ReportSink};
pub use queries::handlers::{NovelReportHandler, ReportSummary};
pub use queries::PrintNovelReport;
