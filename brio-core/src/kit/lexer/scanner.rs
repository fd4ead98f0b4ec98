//! 扫描器共享类型
//!
//! Token 结构与字符分类辅助函数。

use super::core::{SourcePosition, SourceSpan};
use super::token_kind::BrioTokenKind;

/// Token 结构
///
/// 不可变值；`lexeme` 与源文本逐字符一致（EndOfInput 为空串）。
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: BrioTokenKind,
    pub lexeme: String,
    pub span: SourceSpan,
}

impl Token {
    /// 创建新 token
    pub fn new(kind: BrioTokenKind, lexeme: impl Into<String>, span: SourceSpan) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 输入结束标记 token
    pub fn end_of_input(position: SourcePosition) -> Self {
        Self {
            kind: BrioTokenKind::EndOfInput,
            lexeme: String::new(),
            span: SourceSpan::at(position),
        }
    }

    /// 词素结束处的行号（1-based）
    ///
    /// 按历史驱动约定报告消费结束后的位置，而非词素起点。
    pub fn line(&self) -> usize {
        self.span.end.line
    }

    /// 词素结束处的列号（1-based）
    pub fn column(&self) -> usize {
        self.span.end.column
    }

    /// 是否为输入结束标记
    pub fn is_end_of_input(&self) -> bool {
        self.kind == BrioTokenKind::EndOfInput
    }
}

/// 辅助函数：检查字符是否为标识符起始字符
///
/// 起始只允许字母；下划线只能出现在后续位置。
pub fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic()
}

/// 辅助函数：检查字符是否为标识符延续字符
pub fn is_identifier_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
