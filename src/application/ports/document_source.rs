//! Document Source Port - 入站数据端口
//!
//! 提供原始文档文本，屏蔽具体来源（文件、内存）

use crate::domain::novel::NovelError;

/// Document Source Port
pub trait DocumentSource: Send + Sync {
    /// 来源描述（用于日志）
    fn describe(&self) -> String;

    /// 读取完整文档文本
    ///
    /// 来源不存在或不可读时返回 `NovelError::Read`
    fn load(&self) -> Result<String, NovelError>;
}
