//! Novel Context - Errors

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NovelError {
    #[error("无法读取文件 {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("文档结构错误: {0}")]
    Structure(String),

    #[error("缺少字段: {field}")]
    MissingField { field: &'static str },

    #[error("第 {chapter_index} 章的 messages 为空，无法取最后一条消息")]
    EmptySequence { chapter_index: usize },

    #[error("类型不匹配: {what} 应为 {expected}")]
    TypeMismatch {
        what: String,
        expected: &'static str,
    },

    #[error("输出失败: {0}")]
    Output(#[source] std::io::Error),
}

impl NovelError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    pub fn type_mismatch(what: impl Into<String>, expected: &'static str) -> Self {
        Self::TypeMismatch {
            what: what.into(),
            expected,
        }
    }

    /// 只有缺少字段可以在单章范围内恢复，其余错误全部终止报告
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MissingField { .. })
    }
}
