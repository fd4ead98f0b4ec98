//! 源代码位置追踪
//!
//! line/column 均为 1-based，按字符（而非字节）计数，用于错误显示。

/// 源代码位置
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// 行号，1-based
    pub line: usize,
    /// 列号，1-based，Unicode码点计数
    pub column: usize,
}

impl SourcePosition {
    /// 创建新位置
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// 文件起始位置
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }

    /// 前进一个字符
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for SourcePosition {
    fn default() -> Self {
        Self::start()
    }
}

/// 源代码区间（Span）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpan {
    pub start: SourcePosition,
    pub end: SourcePosition,
}

impl SourceSpan {
    /// 从单个位置创建区间（起止相同）
    pub fn at(pos: SourcePosition) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// 合并两个位置为区间
    pub fn range(start: SourcePosition, end: SourcePosition) -> Self {
        Self { start, end }
    }
}

impl Default for SourceSpan {
    fn default() -> Self {
        Self::at(SourcePosition::start())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        let pos = SourcePosition::start();
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_position_advance() {
        let mut pos = SourcePosition::start();

        pos.advance('a');
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 2);

        pos.advance('b');
        assert_eq!(pos.column, 3);
    }

    #[test]
    fn test_position_advance_newline() {
        let mut pos = SourcePosition::start();

        pos.advance('a');
        pos.advance('\n');

        assert_eq!(pos.line, 2);
        assert_eq!(pos.column, 1);
    }

    #[test]
    fn test_span_range() {
        let start = SourcePosition::new(1, 1);
        let end = SourcePosition::new(1, 4);
        let span = SourceSpan::range(start, end);

        assert_eq!(span.start.column, 1);
        assert_eq!(span.end.column, 4);
    }

    #[test]
    fn test_span_at() {
        let pos = SourcePosition::new(2, 7);
        let span = SourceSpan::at(pos);
        assert_eq!(span.start, span.end);
    }
}
