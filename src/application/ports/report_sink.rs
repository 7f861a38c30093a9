//! Report Sink Port - 出站端口
//!
//! 报告按行输出，每次调用写入一整行

use crate::domain::novel::NovelError;

pub trait ReportSink {
    /// 写入一行（不含换行符）
    fn write_line(&mut self, line: &str) -> Result<(), NovelError>;

    fn flush(&mut self) -> Result<(), NovelError> {
        Ok(())
    }
}
