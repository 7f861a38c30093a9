//! File Source - 文件系统文档来源
//!
//! 实现 DocumentSource trait

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::application::ports::DocumentSource;
use crate::domain::novel::NovelError;

/// 从本地文件读取文档（只读打开）
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    path: PathBuf,
}

impl FileDocumentSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_error(&self, source: std::io::Error) -> NovelError {
        NovelError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl DocumentSource for FileDocumentSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<String, NovelError> {
        // 文件句柄在作用域结束时释放，读取出错也一样
        let mut file = File::open(&self.path).map_err(|e| self.read_error(e))?;

        let mut text = String::new();
        file.read_to_string(&mut text)
            .map_err(|e| self.read_error(e))?;

        tracing::debug!("Read {} bytes from {}", text.len(), self.path.display());

        Ok(text)
    }
}
