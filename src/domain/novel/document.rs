//! Novel Context - Document
//!
//! 对解析后的 JSON 文档做只读访问，不做 schema 校验：
//! 字段只在真正访问时才检查，缺失字段与类型错误区分为不同的错误

use serde_json::{Map, Value};

use super::NovelError;

/// 整个小说文档（解析后常驻内存，只读）
#[derive(Debug, Clone, PartialEq)]
pub struct NovelDocument(Value);

impl NovelDocument {
    /// 从 JSON 文本解析
    pub fn parse(text: &str) -> Result<Self, NovelError> {
        let value = serde_json::from_str(text)?;
        Ok(Self(value))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    /// 获取章节序列
    ///
    /// `chapters` 按容器遍历：数组遍历元素，对象遍历键，字符串遍历字符。
    /// 后两种的每一项都不是对象，访问字段时得到 `TypeMismatch`。
    /// 顶层不是对象、缺少 `chapters` 或 `chapters` 为标量时返回 `NovelError::Structure`
    pub fn chapters(&self) -> Result<Chapters<'_>, NovelError> {
        let root = self
            .0
            .as_object()
            .ok_or_else(|| NovelError::Structure("顶层不是 JSON 对象".to_string()))?;

        let chapters = root
            .get("chapters")
            .ok_or_else(|| NovelError::Structure("缺少 chapters 字段".to_string()))?;

        let (items, remaining) = match chapters {
            Value::Array(elements) => (ChapterItems::Elements(elements.iter()), elements.len()),
            Value::Object(map) => (ChapterItems::Keys(map.keys()), map.len()),
            Value::String(text) => (ChapterItems::Chars(text.chars()), text.chars().count()),
            _ => {
                return Err(NovelError::Structure(
                    "chapters 不是可遍历的容器".to_string(),
                ))
            }
        };

        Ok(Chapters {
            items,
            next_index: 0,
            remaining,
        })
    }
}

enum ChapterItems<'a> {
    Elements(std::slice::Iter<'a, Value>),
    Keys(serde_json::map::Keys<'a>),
    Chars(std::str::Chars<'a>),
}

/// 章节迭代器（单次遍历，按文档顺序）
pub struct Chapters<'a> {
    items: ChapterItems<'a>,
    next_index: usize,
    remaining: usize,
}

impl<'a> Iterator for Chapters<'a> {
    type Item = ChapterView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = match &mut self.items {
            ChapterItems::Elements(iter) => ChapterItem::Element(iter.next()?),
            ChapterItems::Keys(iter) => ChapterItem::Key(iter.next()?.as_str()),
            ChapterItems::Chars(iter) => ChapterItem::Char(iter.next()?),
        };

        let index = self.next_index;
        self.next_index += 1;
        self.remaining -= 1;

        Some(ChapterView { index, item })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Chapters<'_> {}

#[derive(Debug, Clone, Copy)]
enum ChapterItem<'a> {
    Element(&'a Value),
    Key(&'a str),
    Char(char),
}

/// 章节视图
#[derive(Debug, Clone, Copy)]
pub struct ChapterView<'a> {
    index: usize,
    item: ChapterItem<'a>,
}

impl<'a> ChapterView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    fn fields(&self) -> Result<&'a Map<String, Value>, NovelError> {
        let what = match self.item {
            ChapterItem::Element(value) => {
                return value.as_object().ok_or_else(|| {
                    NovelError::type_mismatch(format!("chapters[{}]", self.index), "object")
                })
            }
            ChapterItem::Key(key) => format!("chapters 的键 {:?}", key),
            ChapterItem::Char(c) => format!("chapters 的字符 {:?}", c),
        };
        Err(NovelError::type_mismatch(what, "object"))
    }

    /// 章节名（任意 JSON 值）
    pub fn name(&self) -> Result<&'a Value, NovelError> {
        self.fields()?
            .get("name")
            .ok_or_else(|| NovelError::missing("name"))
    }

    /// 最后一条消息
    ///
    /// - 缺少 `messages`，或 `messages` 是对象（按整数下标取不到键）→ `MissingField`
    /// - `messages` 为空数组或空字符串 → `EmptySequence`
    /// - 其余非数组类型 → `TypeMismatch`
    pub fn last_message(&self) -> Result<MessageView<'a>, NovelError> {
        let messages = self
            .fields()?
            .get("messages")
            .ok_or_else(|| NovelError::missing("messages"))?;

        let empty = NovelError::EmptySequence {
            chapter_index: self.index,
        };
        let messages = match messages {
            Value::Array(messages) => messages,
            Value::Object(_) => return Err(NovelError::missing("messages")),
            Value::String(text) if text.is_empty() => return Err(empty),
            Value::String(_) => {
                return Err(NovelError::type_mismatch(
                    format!("chapters[{}].messages 的最后一项", self.index),
                    "object",
                ))
            }
            _ => {
                return Err(NovelError::type_mismatch(
                    format!("chapters[{}].messages", self.index),
                    "array",
                ))
            }
        };

        let value = messages.last().ok_or(empty)?;

        Ok(MessageView {
            chapter_index: self.index,
            position: messages.len() - 1,
            value,
        })
    }
}

/// 消息视图
#[derive(Debug, Clone, Copy)]
pub struct MessageView<'a> {
    chapter_index: usize,
    position: usize,
    value: &'a Value,
}

impl<'a> MessageView<'a> {
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn routes(&self) -> Result<&'a Value, NovelError> {
        self.value
            .as_object()
            .ok_or_else(|| {
                NovelError::type_mismatch(
                    format!(
                        "chapters[{}].messages[{}]",
                        self.chapter_index, self.position
                    ),
                    "object",
                )
            })?
            .get("routes")
            .ok_or_else(|| NovelError::missing("routes"))
    }
}
