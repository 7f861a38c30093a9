//! Novel Report Handler

use std::sync::Arc;

use crate::application::ports::{DocumentSource, ReportSink};
use crate::application::queries::PrintNovelReport;
use crate::domain::novel::{render_value, ChapterView, NovelDocument, NovelError, SEPARATOR};

/// 报告统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    /// 章节总数
    pub total_chapters: usize,
    /// 完整输出的章节数
    pub printed_chapters: usize,
    /// 因缺少字段而中途跳过的章节数
    pub skipped_chapters: usize,
}

/// PrintNovelReport Handler
pub struct NovelReportHandler {
    source: Arc<dyn DocumentSource>,
}

impl NovelReportHandler {
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self { source }
    }

    /// 读取、解析文档并逐行输出报告
    ///
    /// 缺少字段只终止当前章节的剩余输出，已经输出的行保留；
    /// 其他错误（读取、解析、结构、空 messages、类型不匹配、输出）直接返回
    pub fn handle(
        &self,
        _query: PrintNovelReport,
        sink: &mut dyn ReportSink,
    ) -> Result<ReportSummary, NovelError> {
        let text = self.source.load()?;
        let document = NovelDocument::parse(&text)?;
        tracing::debug!("Loaded document from {}", self.source.describe());

        let chapters = document.chapters()?;
        let mut summary = ReportSummary {
            total_chapters: chapters.len(),
            ..Default::default()
        };
        sink.write_line(&summary.total_chapters.to_string())?;

        for chapter in chapters {
            match print_chapter(&chapter, sink) {
                Ok(()) => summary.printed_chapters += 1,
                Err(e) if e.is_recoverable() => {
                    tracing::debug!("Skipped chapter {}: {}", chapter.index(), e);
                    summary.skipped_chapters += 1;
                }
                Err(e) => return Err(e),
            }
        }

        sink.flush()?;

        tracing::info!(
            "Report done: total={}, printed={}, skipped={}",
            summary.total_chapters,
            summary.printed_chapters,
            summary.skipped_chapters
        );

        Ok(summary)
    }
}

/// 输出单章：章节名 → 最后一条消息的 routes → 分隔线
///
/// 每个字段读到即输出
fn print_chapter(chapter: &ChapterView<'_>, sink: &mut dyn ReportSink) -> Result<(), NovelError> {
    sink.write_line(&render_value(chapter.name()?))?;

    let routes = chapter.last_message()?.routes()?;
    sink.write_line(&render_value(routes))?;

    sink.write_line(SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::{InMemoryDocumentSource, LineBuffer};

    fn run(json: &str) -> (Result<ReportSummary, NovelError>, Vec<String>) {
        let handler = NovelReportHandler::new(Arc::new(InMemoryDocumentSource::new(json)));
        let mut sink = LineBuffer::new();
        let result = handler.handle(PrintNovelReport, &mut sink);
        (result, sink.into_lines())
    }

    #[test]
    fn test_two_complete_chapters() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"name": "A", "messages": [{"routes": "r1"}]},
                {"name": "B", "messages": [{"routes": "r2"}]}
            ]}"#,
        );

        assert_eq!(
            lines,
            vec!["2", "A", "r1", SEPARATOR, "B", "r2", SEPARATOR]
        );
        assert_eq!(
            result.unwrap(),
            ReportSummary {
                total_chapters: 2,
                printed_chapters: 2,
                skipped_chapters: 0,
            }
        );
    }

    #[test]
    fn test_missing_name_skips_chapter() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"messages": [{"routes": "r1"}]},
                {"name": "B", "messages": [{"routes": "r2"}]}
            ]}"#,
        );

        assert_eq!(lines, vec!["2", "B", "r2", SEPARATOR]);
        assert_eq!(result.unwrap().skipped_chapters, 1);
    }

    #[test]
    fn test_missing_routes_keeps_name_already_printed() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"name": "A", "messages": [{"routes": ["x"]}, {"value": "end"}]},
                {"name": "B"},
                {"name": "C", "messages": [{"routes": ["y", "z"]}]}
            ]}"#,
        );

        assert_eq!(lines, vec!["3", "A", "B", "C", "['y', 'z']", SEPARATOR]);
        let summary = result.unwrap();
        assert_eq!(summary.printed_chapters, 1);
        assert_eq!(summary.skipped_chapters, 2);
    }

    #[test]
    fn test_object_messages_skips_chapter() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"name": "A", "messages": {}},
                {"name": "B", "messages": [{"routes": ["c2", "c3"]}]}
            ]}"#,
        );

        assert_eq!(lines, vec!["2", "A", "B", "['c2', 'c3']", SEPARATOR]);
        let summary = result.unwrap();
        assert_eq!(summary.printed_chapters, 1);
        assert_eq!(summary.skipped_chapters, 1);
    }

    #[test]
    fn test_empty_object_chapters_prints_zero() {
        let (result, lines) = run(r#"{"chapters": {}}"#);
        assert_eq!(lines, vec!["0"]);
        assert_eq!(result.unwrap(), ReportSummary::default());
    }

    #[test]
    fn test_object_chapters_with_keys_is_fatal() {
        let (result, lines) = run(r#"{"chapters": {"first": {"name": "A"}}}"#);
        assert!(matches!(result, Err(NovelError::TypeMismatch { .. })));
        assert_eq!(lines, vec!["1"]);
    }

    #[test]
    fn test_non_string_name_and_routes() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"name": 7, "messages": [{"routes": null}]},
                {"name": ["x"], "messages": [{"routes": {"end": true}}]}
            ]}"#,
        );

        assert_eq!(
            lines,
            vec!["2", "7", "None", SEPARATOR, "['x']", "{'end': True}", SEPARATOR]
        );
        assert_eq!(result.unwrap().printed_chapters, 2);
    }

    #[test]
    fn test_empty_messages_is_fatal() {
        let (result, lines) = run(
            r#"{"chapters": [
                {"name": "A", "messages": [{"routes": "r1"}]},
                {"name": "B", "messages": []},
                {"name": "C", "messages": [{"routes": "r3"}]}
            ]}"#,
        );

        assert!(matches!(
            result,
            Err(NovelError::EmptySequence { chapter_index: 1 })
        ));
        // C 不应该被输出
        assert_eq!(lines, vec!["3", "A", "r1", SEPARATOR, "B"]);
    }

    #[test]
    fn test_missing_chapters_prints_nothing() {
        let (result, lines) = run(r#"{"title": "no chapters"}"#);
        assert!(matches!(result, Err(NovelError::Structure(_))));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_invalid_json_prints_nothing() {
        let (result, lines) = run("not json at all");
        assert!(matches!(result, Err(NovelError::Parse(_))));
        assert!(lines.is_empty());
    }

    #[test]
    fn test_non_object_chapter_is_fatal() {
        let (result, lines) = run(r#"{"chapters": [42, {"name": "B"}]}"#);
        assert!(matches!(result, Err(NovelError::TypeMismatch { .. })));
        assert_eq!(lines, vec!["2"]);
    }

    #[test]
    fn test_empty_chapters() {
        let (result, lines) = run(r#"{"chapters": []}"#);
        assert_eq!(lines, vec!["0"]);
        assert_eq!(result.unwrap(), ReportSummary::default());
    }

    #[test]
    fn test_rerun_is_identical() {
        let json = r#"{"chapters": [
            {"name": "A", "messages": [{"routes": ["B"]}]},
            {"messages": [{"routes": []}]}
        ]}"#;
        let handler = NovelReportHandler::new(Arc::new(InMemoryDocumentSource::new(json)));

        let mut first = LineBuffer::new();
        let mut second = LineBuffer::new();
        handler.handle(PrintNovelReport, &mut first).unwrap();
        handler.handle(PrintNovelReport, &mut second).unwrap();

        assert_eq!(first.lines(), second.lines());
    }
}
