//! Novel Queries

/// 打印小说报告查询
///
/// 输出章节数，然后逐章输出章节名、最后一条消息的 routes 和分隔线
#[derive(Debug, Clone, Copy, Default)]
pub struct PrintNovelReport;
