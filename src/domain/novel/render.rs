//! Novel Context - 输出格式
//!
//! 输出格式与原有报告保持一致：顶层字符串原样输出，
//! 其余值使用 `['a', 'b']` / `{'k': True}` / `None` 这种写法

use std::fmt::Write;

use serde_json::{Number, Value};

/// 每章输出末尾的分隔线（29 个 `-`）
pub const SEPARATOR: &str = "-----------------------------";

/// 将任意 JSON 值渲染为一行文本
pub fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => {
            let mut out = String::new();
            write_repr(other, &mut out);
            out
        }
    }
}

fn write_repr(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => write_number(n, out),
        Value::String(s) => write_quoted(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_repr(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(key, out);
                out.push_str(": ");
                write_repr(item, out);
            }
            out.push('}');
        }
    }
}

/// 浮点数的指数部分带符号且至少两位（`1e+20`、`1e-07`）
fn write_number(n: &Number, out: &mut String) {
    let text = n.to_string();
    let Some(pos) = text.find('e').filter(|_| n.is_f64()) else {
        out.push_str(&text);
        return;
    };

    let (mantissa, exponent) = (&text[..pos], &text[pos + 1..]);
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent.strip_prefix('+').unwrap_or(exponent)),
    };
    let _ = write!(out, "{}e{}{:0>2}", mantissa, sign, digits);
}

/// 默认单引号；字符串含单引号且不含双引号时改用双引号
fn write_quoted(s: &str, out: &mut String) {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c == '\x7f' => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
}
