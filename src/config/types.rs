//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;
use std::path::PathBuf;

/// 应用主配置
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// 输入文档配置
    #[serde(default)]
    pub input: InputConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

/// 输入文档配置
#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// 文档路径（相对路径基于当前工作目录）
    #[serde(default = "default_input_path")]
    pub path: PathBuf,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("novel.json")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
