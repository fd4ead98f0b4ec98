//! Brio 语言 Scanner 实现
//!
//! 完整的 Brio 词法状态机，支持：
//! - 关键字、标识符
//! - 运算符与关系运算符（单字符和双字符）
//! - 数字字面量（小数点规则）
//! - 分隔符
//!
//! 状态机按「一个状态一个方法」的写法实现：起始分发在
//! [`BrioScanner::next_token`]，`SawLess`/`SawGreater`/`SawColon`、
//! 标识符、数字各占一个扫描方法；接受与错误即方法返回。

use super::core::{CharStream, SourcePosition, SourceSpan, END_MARKER};
use super::error::{ErrorKind, LexError};
use super::scanner::{is_identifier_continue, is_identifier_start, Token};
use super::token_kind::{BrioTokenKind, Keyword};

use brio_log::{debug, trace, Logger};
use std::sync::Arc;

/// Brio 扫描器
pub struct BrioScanner {
    /// 当前 token 的起始位置（用于构建 span）
    token_start: SourcePosition,
    /// 关键字查找表
    keywords: &'static [(&'static str, Keyword)],
    logger: Arc<Logger>,
}

impl BrioScanner {
    /// 创建新扫描器（静默 logger）
    pub fn new() -> Self {
        Self::with_logger(Logger::noop())
    }

    /// 创建带 logger 的扫描器
    pub fn with_logger(logger: Arc<Logger>) -> Self {
        trace!(logger, "Creating new BrioScanner");
        Self {
            token_start: SourcePosition::start(),
            keywords: KEYWORD_TABLE,
            logger,
        }
    }

    /// 扫描下一个 token
    ///
    /// 从起始状态运行状态机直到产出一个 token、到达输入结束或发生
    /// 词法错误。错误终结本次调用；不做恢复。输入结束后再次调用会
    /// 继续返回 EndOfInput（流在结尾处保持粘滞）。
    pub fn next_token(&mut self, stream: &mut CharStream) -> Result<Token, LexError> {
        let c = self.skip_whitespace(stream);
        trace!(
            self.logger,
            "Dispatching on {:?} at {}:{}",
            c,
            self.token_start.line,
            self.token_start.column
        );

        match c {
            END_MARKER => Ok(Token::end_of_input(stream.position())),

            c if is_identifier_start(c) => Ok(self.scan_identifier_or_keyword(stream, c)),
            c if c.is_ascii_digit() => self.scan_number(stream, c),

            // 单字符 token，立即归约
            '+' | '-' | '*' | '/' => Ok(self.make_single_char(stream, BrioTokenKind::Operator, c)),
            '=' => Ok(self.make_single_char(stream, BrioTokenKind::RelOp, c)),
            '(' => Ok(self.make_single_char(stream, BrioTokenKind::LeftParenthesis, c)),
            ')' => Ok(self.make_single_char(stream, BrioTokenKind::RightParenthesis, c)),
            ';' => Ok(self.make_single_char(stream, BrioTokenKind::Semicolon, c)),
            ',' => Ok(self.make_single_char(stream, BrioTokenKind::Comma, c)),

            // 需要前瞻一个字符
            '<' => Ok(self.scan_less(stream)),
            '>' => Ok(self.scan_greater(stream)),
            ':' => self.scan_colon(stream),

            // 非法字符
            other => Err(LexError::at(
                ErrorKind::InvalidChar(other),
                stream.position(),
            )),
        }
    }

    /// 跳过空白符并返回第一个非空白字符（已消费）
    ///
    /// 同时记录 token 起始位置（该字符消费前的位置）。
    fn skip_whitespace(&mut self, stream: &mut CharStream) -> char {
        loop {
            let start = stream.position();
            let c = stream.next_char();
            if !c.is_whitespace() {
                self.token_start = start;
                return c;
            }
        }
    }

    /// 创建单字符 token
    fn make_single_char(
        &self,
        stream: &mut CharStream,
        kind: BrioTokenKind,
        c: char,
    ) -> Token {
        Token::new(
            kind,
            c.to_string(),
            SourceSpan::range(self.token_start, stream.position()),
        )
    }

    /// 创建多字符 token
    fn make_token(&self, stream: &mut CharStream, kind: BrioTokenKind, lexeme: &str) -> Token {
        Token::new(
            kind,
            lexeme,
            SourceSpan::range(self.token_start, stream.position()),
        )
    }

    /// 扫描 '<' 系列（<, <=, <>）
    fn scan_less(&self, stream: &mut CharStream) -> Token {
        match stream.next_char() {
            '=' => self.make_token(stream, BrioTokenKind::RelOp, "<="),
            '>' => self.make_token(stream, BrioTokenKind::RelOp, "<>"),
            _ => {
                stream.retract();
                self.make_token(stream, BrioTokenKind::RelOp, "<")
            }
        }
    }

    /// 扫描 '>' 系列（>, >=）
    fn scan_greater(&self, stream: &mut CharStream) -> Token {
        match stream.next_char() {
            '=' => self.make_token(stream, BrioTokenKind::RelOp, ">="),
            _ => {
                stream.retract();
                self.make_token(stream, BrioTokenKind::RelOp, ">")
            }
        }
    }

    /// 扫描 ':' 系列（:=, ::）
    ///
    /// 孤立的 ':' 不是合法 token。
    fn scan_colon(&self, stream: &mut CharStream) -> Result<Token, LexError> {
        match stream.next_char() {
            '=' => Ok(self.make_token(stream, BrioTokenKind::Assign, ":=")),
            ':' => Ok(self.make_token(stream, BrioTokenKind::TypeOf, "::")),
            _ => Err(LexError::at(ErrorKind::LoneColon, stream.position())),
        }
    }

    /// 扫描标识符或关键字
    fn scan_identifier_or_keyword(&self, stream: &mut CharStream, first: char) -> Token {
        let mut lexeme = String::new();
        lexeme.push(first);

        loop {
            let c = stream.next_char();
            if is_identifier_continue(c) {
                lexeme.push(c);
            } else {
                // 终结字符不属于本 token，回退
                stream.retract();
                break;
            }
        }

        let kind = match self.lookup_keyword(&lexeme) {
            Some(keyword) => BrioTokenKind::Keyword(keyword),
            None => BrioTokenKind::Identifier,
        };

        Token::new(
            kind,
            lexeme,
            SourceSpan::range(self.token_start, stream.position()),
        )
    }

    /// 查找关键字（精确、大小写敏感）
    fn lookup_keyword(&self, word: &str) -> Option<Keyword> {
        for (kw, keyword) in self.keywords {
            if *kw == word {
                debug!(self.logger, "Matched keyword {}", word);
                return Some(*keyword);
            }
        }
        None
    }

    /// 扫描数字字面量
    ///
    /// 规则：
    /// - 数字与小数点的极大串；第二个小数点在消费前终止本串（回退）
    /// - 最后一个小数点之后没有数字（`12.`）为词法错误
    /// - 词素原样保留，不做数值解析
    fn scan_number(&self, stream: &mut CharStream, first: char) -> Result<Token, LexError> {
        let mut lexeme = String::new();
        lexeme.push(first);

        let mut has_dot = false;
        let mut digit_after_dot = true;

        loop {
            let c = stream.next_char();
            if c.is_ascii_digit() {
                lexeme.push(c);
                digit_after_dot = true;
            } else if c == '.' && !has_dot {
                lexeme.push(c);
                has_dot = true;
                digit_after_dot = false;
            } else {
                // 终结字符（包括第二个小数点）回退
                stream.retract();
                break;
            }
        }

        if !digit_after_dot {
            return Err(LexError::at(
                ErrorKind::MalformedNumber(lexeme),
                stream.position(),
            ));
        }

        Ok(Token::new(
            BrioTokenKind::Number,
            lexeme,
            SourceSpan::range(self.token_start, stream.position()),
        ))
    }
}

impl Default for BrioScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// 关键字表
static KEYWORD_TABLE: &[(&str, Keyword)] = &[
    ("int", Keyword::Int),
    ("print", Keyword::Print),
    ("var", Keyword::Var),
    ("func", Keyword::Func),
    ("if", Keyword::If),
    ("then", Keyword::Then),
    ("else", Keyword::Else),
    ("while", Keyword::While),
    ("void", Keyword::Void),
    ("begin", Keyword::Begin),
    ("end", Keyword::End),
];
