//! Brio API - Tokenization orchestration layer
//!
//! Provides unified execution interface, including:
//! - Tokenization flow orchestration
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (BrioError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `tokenize_with_config(source, &config)` API.

use brio_log::{debug, info};

use brio_core::{Lexer, StringSource};

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, init_if_absent, is_initialized, RunConfig};

// Re-export config types from brio_config
pub use brio_config::{LexerConfig, Phase};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{BrioError, ErrorReport, LexError};
pub use types::TokenizeOutput;

// Re-export core types
pub use brio_core::{BrioTokenKind, Keyword, SourcePosition, Token};

/// Tokenize with explicit configuration
///
/// This is the recommended API for library users. Runs the lexer to
/// EndOfInput and collects the token stream; stops at the first lexical
/// error (no recovery).
pub fn tokenize_with_config(
    source: &str,
    config: &RunConfig,
) -> Result<TokenizeOutput, BrioError> {
    info!(config.logger, "Starting tokenization");

    let mut lexer = Lexer::with_config(
        Box::new(StringSource::new(source)),
        &config.lexer,
        config.logger.clone(),
    );

    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        if token.is_end_of_input() {
            break;
        }
        tokens.push(token);
    }

    let end_position = lexer.position();
    debug!(
        config.logger,
        "tokenization completed: tokens={}, end={}:{}",
        tokens.len(),
        end_position.line,
        end_position.column,
    );

    info!(config.logger, "Tokenization completed");

    Ok(TokenizeOutput {
        tokens,
        end_position,
    })
}

// ==================== Legacy API (using global config) ====================

/// Tokenize source code (uses global config)
///
/// # Panics
/// If global config is not initialized
pub fn tokenize(source: &str) -> Result<TokenizeOutput, BrioError> {
    let config = get_config();
    tokenize_with_config(source, config)
}

/// Quick tokenize with default config (auto-initializes if needed)
pub fn quick_tokenize(source: &str) -> Result<TokenizeOutput, BrioError> {
    init_if_absent(RunConfig::default());
    tokenize(source)
}
