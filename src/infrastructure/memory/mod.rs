//! Memory Layer - 内存实现
//!
//! DocumentSource 与 ReportSink 的内存版本

mod document_source;
mod line_buffer;

pub use document_source::InMemoryDocumentSource;
pub use line_buffer::LineBuffer;
