//! Console Sink - 按行写入任意 `io::Write`
//!
//! 二进制中包装 stdout；日志走 stderr，不会混入报告

use std::io::Write;

use crate::application::ports::ReportSink;
use crate::domain::novel::NovelError;

pub struct ConsoleSink<W: Write> {
    writer: W,
}

impl<W: Write> ConsoleSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> ReportSink for ConsoleSink<W> {
    fn write_line(&mut self, line: &str) -> Result<(), NovelError> {
        writeln!(self.writer, "{}", line).map_err(NovelError::Output)
    }

    fn flush(&mut self) -> Result<(), NovelError> {
        self.writer.flush().map_err(NovelError::Output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines_are_newline_terminated() {
        let mut sink = ConsoleSink::new(Vec::new());
        sink.write_line("2").unwrap();
        sink.write_line("第一章").unwrap();
        sink.flush().unwrap();

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "2\n第一章\n");
    }

    #[test]
    fn test_write_failure_is_output_error() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut sink = ConsoleSink::new(Broken);
        let err = sink.write_line("x").unwrap_err();
        assert!(matches!(err, NovelError::Output(_)));
        assert!(!err.is_recoverable());
    }
}
