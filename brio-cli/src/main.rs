//! Brio CLI - Command line interface
//!
//! Project-based execution - all configuration from brio.json

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;

mod platform;

use crate::platform::print_error_with_source;
use brio_api::{init_config, tokenize_with_config, RunConfig};
use brio_config::LexerConfig;
use brio_core::Token;
use brio_log::{Level, LogConfig, Logger};

/// brio.json 结构
#[derive(Debug, serde::Deserialize)]
struct ProjectJson {
    /// 入口文件路径
    entry: String,
    /// 词法器配置
    lexer: Option<LexerSettings>,
}

/// 词法器配置
#[derive(Debug, serde::Deserialize)]
struct LexerSettings {
    /// 是否显示源码
    show_source: Option<bool>,
    /// 双缓冲半区容量（字符数）
    buffer_capacity: Option<usize>,
    /// 日志级别: "silent", "error", "warn", "info", "debug", "trace"
    log_level: Option<String>,
}

#[derive(Parser)]
#[command(
    name = "brio",
    about = "Brio programming language - Token stream driver",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (default: ./brio.json)
    #[arg(value_name = "CONFIG", default_value = "brio.json")]
    config: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Read brio.json
    let project = match read_project_json(&cli.config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    // Resolve entry file path (relative to brio.json directory)
    let entry_path = resolve_entry_path(&cli.config, &project.entry);

    // Read source file
    let source = match std::fs::read_to_string(&entry_path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!(
                "Error: Cannot read entry file '{}': {}",
                entry_path.display(),
                e
            );
            process::exit(1);
        }
    };

    // Build run configuration from brio.json
    let run_config = build_run_config(&project);

    // Initialize API config (global singleton for convenience)
    init_config(run_config.clone());

    // Show source
    if run_config.show_source {
        println!("[Source]");
        for (i, line) in source.lines().enumerate() {
            println!("{:3} | {}", i + 1, line);
        }
        println!("[Token Stream]");
    }

    handle_tokenize(&source, run_config);
}

/// Read and parse brio.json
fn read_project_json(path: &Path) -> Result<ProjectJson, String> {
    if !path.exists() {
        return Err(format!(
            "未找到 '{}'\n\n当前目录不是一个 Brio 项目。\n提示: 创建 '{}' 文件并指定 'entry' 字段",
            path.display(),
            path.display()
        ));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("无法读取 '{}': {}", path.display(), e))?;

    let project: ProjectJson = serde_json::from_str(&content)
        .map_err(|e| format!("解析 '{}' 失败: {}", path.display(), e))?;

    if project.entry.is_empty() {
        return Err(format!("'{}' 中的 'entry' 字段不能为空", path.display()));
    }

    Ok(project)
}

/// Resolve entry file path relative to brio.json directory
fn resolve_entry_path(project_path: &Path, entry: &str) -> PathBuf {
    let base_dir = project_path.parent().unwrap_or(Path::new("."));
    base_dir.join(entry)
}

/// Build run configuration from brio.json
fn build_run_config(project: &ProjectJson) -> RunConfig {
    let settings = project.lexer.as_ref();

    let show_source = settings.and_then(|s| s.show_source).unwrap_or(false);
    let buffer_capacity = settings
        .and_then(|s| s.buffer_capacity)
        .unwrap_or_else(|| LexerConfig::default().buffer_capacity);

    // Parse log level; silent / absent means a noop logger
    let logger = match settings
        .and_then(|s| s.log_level.as_deref())
        .and_then(parse_log_level)
    {
        Some(level) => LogConfig::new(level).with_stderr().init().0,
        None => Logger::noop(),
    };

    RunConfig {
        show_source,
        lexer: LexerConfig { buffer_capacity },
        logger,
    }
}

/// Parse log level string
fn parse_log_level(s: &str) -> Option<Level> {
    match s.to_lowercase().as_str() {
        "silent" => None,
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

/// 按历史驱动格式输出单个 token
fn print_token(token: &Token) {
    println!(
        "<{}, token-attr:\"{}\", {}:{}>",
        token.kind,
        token.lexeme,
        token.line(),
        token.column()
    );
}

fn handle_tokenize(source: &str, config: RunConfig) {
    match tokenize_with_config(source, &config) {
        Ok(output) => {
            for token in &output.tokens {
                print_token(token);
            }
            println!("Success!");
        }
        Err(e) => {
            if let (Some(line), Some(column)) = (e.line(), e.column()) {
                println!("Error! There is a lexical error at {}:{}.", line, column);
            }
            print_error_with_source(&e, source);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("debug"), Some(Level::Debug));
        assert_eq!(parse_log_level("TRACE"), Some(Level::Trace));
        assert_eq!(parse_log_level("silent"), None);
        assert_eq!(parse_log_level("bogus"), None);
    }

    #[test]
    fn test_resolve_entry_path() {
        let resolved = resolve_entry_path(Path::new("proj/brio.json"), "main.brio");
        assert_eq!(resolved, PathBuf::from("proj/main.brio"));
    }

    #[test]
    fn test_build_run_config_defaults() {
        let project = ProjectJson {
            entry: "main.brio".to_string(),
            lexer: None,
        };

        let config = build_run_config(&project);
        assert!(!config.show_source);
        assert_eq!(config.lexer.buffer_capacity, 10);
    }

    #[test]
    fn test_build_run_config_from_settings() {
        let project = ProjectJson {
            entry: "main.brio".to_string(),
            lexer: Some(LexerSettings {
                show_source: Some(true),
                buffer_capacity: Some(32),
                log_level: Some("silent".to_string()),
            }),
        };

        let config = build_run_config(&project);
        assert!(config.show_source);
        assert_eq!(config.lexer.buffer_capacity, 32);
    }

    #[test]
    fn test_project_json_parsing() {
        let json = r#"{ "entry": "main.brio", "lexer": { "show_source": true } }"#;
        let project: ProjectJson = serde_json::from_str(json).unwrap();

        assert_eq!(project.entry, "main.brio");
        assert_eq!(project.lexer.unwrap().show_source, Some(true));
    }
}
