//! Brio Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Brio crates.

use serde::Deserialize;

/// Configuration for the lexer kit
#[derive(Debug, Clone, Deserialize)]
pub struct LexerConfig {
    /// Capacity of each half of the input double buffer, in characters
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,
}

fn default_buffer_capacity() -> usize {
    10
}

/// Execution phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Lexer,
    Driver,
}

impl Phase {
    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Lexer => "lexer",
            Phase::Driver => "driver",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("brio::{}", self.as_str())
    }
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_buffer_capacity(),
        }
    }
}
