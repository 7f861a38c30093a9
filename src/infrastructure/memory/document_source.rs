//! In-Memory Document Source

use crate::application::ports::DocumentSource;
use crate::domain::novel::NovelError;

/// 内存中的文档文本（测试与嵌入场景使用）
#[derive(Debug, Clone)]
pub struct InMemoryDocumentSource {
    text: String,
}

impl InMemoryDocumentSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl DocumentSource for InMemoryDocumentSource {
    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.text.len())
    }

    fn load(&self) -> Result<String, NovelError> {
        Ok(self.text.clone())
    }
}
