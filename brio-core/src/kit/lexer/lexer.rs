//! Lexer 主入口
//!
//! 将扫描器与字符流装配为一个词法器实例：一个流对应一次完整的
//! 词法分析。logger 显式传入（遵循 brio-log 设计原则：结构化接口
//! 优于环境依赖）。
//!
//! # 示例
//!
//! ```
//! use brio_core::kit::lexer::Lexer;
//!
//! let mut lexer = Lexer::from_str("var x := 1;");
//! let token = lexer.next_token().unwrap();
//! assert_eq!(token.lexeme, "var");
//! ```

use super::brio::BrioScanner;
use super::core::{CharSource, CharStream, SourcePosition, StringSource};
use super::error::LexError;
use super::scanner::Token;

use brio_config::LexerConfig;
use brio_log::{debug, trace, warn, Logger};
use std::sync::Arc;

/// 词法器
///
/// 独占持有底层字符源；不支持并发访问同一实例。
pub struct Lexer {
    scanner: BrioScanner,
    stream: CharStream,
    logger: Arc<Logger>,
}

impl Lexer {
    /// 创建新的 Lexer（使用 noop logger）
    ///
    /// 如需自定义日志，请使用 [`Self::with_logger`]
    pub fn new(source: Box<dyn CharSource>) -> Self {
        Self::with_logger(source, Logger::noop())
    }

    /// 创建新的 Lexer（带显式 logger）
    pub fn with_logger(source: Box<dyn CharSource>, logger: Arc<Logger>) -> Self {
        Self::with_config(source, &LexerConfig::default(), logger)
    }

    /// 创建新的 Lexer（带配置和显式 logger）
    pub fn with_config(
        source: Box<dyn CharSource>,
        config: &LexerConfig,
        logger: Arc<Logger>,
    ) -> Self {
        trace!(
            logger,
            "Creating new Lexer with buffer capacity {}",
            config.buffer_capacity
        );
        Self {
            scanner: BrioScanner::with_logger(logger.clone()),
            stream: CharStream::new(source, config.buffer_capacity),
            logger,
        }
    }

    /// 从字符串创建（默认配置，noop logger）
    pub fn from_str(input: &str) -> Self {
        Self::new(Box::new(StringSource::new(input)))
    }

    /// 获取下一个 Token
    ///
    /// 错误是终结性的：本实现不做错误恢复，调用方应在首个错误处停止。
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        trace!(self.logger, "Requesting next token");

        match self.scanner.next_token(&mut self.stream) {
            Ok(token) => {
                debug!(
                    self.logger,
                    "Produced token: kind={}, lexeme={:?}, {}:{}",
                    token.kind,
                    token.lexeme,
                    token.line(),
                    token.column()
                );
                Ok(token)
            }
            Err(e) => {
                warn!(self.logger, "Lex error encountered: {}", e);
                Err(e)
            }
        }
    }

    /// 当前位置（最近一次返回的 token 末尾之后）
    pub fn position(&self) -> SourcePosition {
        self.stream.position()
    }
}
