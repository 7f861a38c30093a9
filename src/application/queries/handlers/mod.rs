//! Query Handlers

mod report_handlers;

pub use report_handlers::{NovelReportHandler, ReportSummary};
