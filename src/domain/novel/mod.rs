//! Novel Context - 小说文档上下文
//!
//! 职责:
//! - 文档解析与只读访问
//! - 章节 / 消息字段访问
//! - 错误分类（可恢复 / 致命）

mod document;
mod errors;
mod render;

pub use document::{ChapterView, Chapters, MessageView, NovelDocument};
pub use errors::NovelError;
pub use render::{render_value, SEPARATOR};
