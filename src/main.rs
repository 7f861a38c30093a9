//! Novel Report - 小说文档报告工具
//!
//! 标准输出只包含报告内容，日志写入 stderr

use std::sync::Arc;

use anyhow::Context;
use novel_report::application::{NovelReportHandler, PrintNovelReport};
use novel_report::config::{load_config, print_config};
use novel_report::infrastructure::{ConsoleSink, FileDocumentSource};

fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},novel_report={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    print_config(&config);

    let source = Arc::new(FileDocumentSource::new(&config.input.path));
    let handler = NovelReportHandler::new(source);

    let mut sink = ConsoleSink::new(std::io::stdout().lock());
    let summary = handler
        .handle(PrintNovelReport, &mut sink)
        .with_context(|| format!("Failed to report {}", config.input.path.display()))?;

    tracing::debug!(
        "{} of {} chapters printed",
        summary.printed_chapters,
        summary.total_chapters
    );

    Ok(())
}
