//! Application Ports - 端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document_source;
mod report_sink;

pub use document_source::DocumentSource;
pub use report_sink::ReportSink;
