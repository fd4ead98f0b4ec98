//! API 类型定义
//!
//! 词法分析的输入输出类型。

use brio_core::{SourcePosition, Token};

/// 词法分析输出
#[derive(Debug, Clone, PartialEq)]
pub struct TokenizeOutput {
    /// Token 序列（不含 EndOfInput 标记）
    pub tokens: Vec<Token>,
    /// 扫描结束时的位置
    pub end_position: SourcePosition,
}

impl TokenizeOutput {
    /// Token 数量
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// 是否没有任何 token（空输入或纯空白输入）
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
