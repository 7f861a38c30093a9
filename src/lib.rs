//! Novel Report - 小说文档报告工具
//!
//! 读取 novel.json，输出章节数，以及每章的章节名和最后一条消息的 routes
//!
//! 领域层 (domain/):
//! - Novel Context: 文档只读访问、错误分类、输出格式
//!
//! 应用层 (application/):
//! - Ports: DocumentSource, ReportSink
//! - Queries: PrintNovelReport 及其处理器
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: 文件来源、控制台输出
//! - Memory: 内存来源、行缓冲

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use self::config::{load_config, AppConfig};
