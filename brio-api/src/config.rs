//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use brio_config::LexerConfig;
use brio_log::Logger;
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Execution configuration
#[derive(Clone)]
pub struct RunConfig {
    /// Whether to print the source listing before tokenizing
    pub show_source: bool,
    /// Lexer configuration
    pub lexer: LexerConfig,
    /// Logger (noop by default)
    pub logger: Arc<Logger>,
}

impl std::fmt::Debug for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunConfig")
            .field("show_source", &self.show_source)
            .field("lexer", &self.lexer)
            .finish()
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            show_source: false,
            lexer: LexerConfig::default(),
            logger: Logger::noop(),
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Initialize global configuration if it has not been set yet
///
/// 与 [`init`] 不同，重复调用不会 panic（用于便捷入口）。
pub fn init_if_absent(config: RunConfig) {
    let _ = GLOBAL_CONFIG.set(config);
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}
