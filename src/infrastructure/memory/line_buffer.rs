//! Line Buffer - 收集报告输出行

use crate::application::ports::ReportSink;
use crate::domain::novel::NovelError;

#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<String>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl ReportSink for LineBuffer {
    fn write_line(&mut self, line: &str) -> Result<(), NovelError> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collects_in_order() {
        let mut buffer = LineBuffer::new();
        buffer.write_line("a").unwrap();
        buffer.write_line("b").unwrap();
        buffer.flush().unwrap();
        assert_eq!(buffer.lines(), ["a", "b"]);
    }
}
