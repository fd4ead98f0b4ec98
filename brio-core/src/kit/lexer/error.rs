//! Lexer 错误类型
//!
//! 提供结构化的词法错误信息，包含错误类型、位置和详细消息。
//! 词法错误对当次 `next_token` 调用是终结性的：不恢复、不重试。

use super::core::SourcePosition;
use thiserror::Error;

/// 错误类型
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// 非法字符（不是空白、字母、数字或已知符号）
    #[error("unexpected character '{0}'")]
    InvalidChar(char),

    /// 孤立的 ':'（合法形式只有 ':=' 与 '::'）
    #[error("':' must be followed by '=' or ':'")]
    LoneColon,

    /// 数字格式错误（最后一个小数点后没有数字）
    #[error("malformed number literal '{0}'")]
    MalformedNumber(String),
}

/// 词法错误，包含结构化信息
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    /// 错误类型
    pub kind: ErrorKind,
    /// 错误发生的位置
    pub position: SourcePosition,
    /// 详细错误消息
    pub message: String,
}

impl LexError {
    /// 在指定位置创建错误
    pub fn at(kind: ErrorKind, position: SourcePosition) -> Self {
        let message = format!("{} at {}:{}", kind, position.line, position.column);
        Self {
            kind,
            position,
            message,
        }
    }

    /// 获取行号（1-based）
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// 获取列号（1-based）
    pub fn column(&self) -> usize {
        self.position.column
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}:{}] {}",
            self.position.line, self.position.column, self.kind
        )
    }
}

impl std::error::Error for LexError {}
