//! 日志配置
//!
//! 提供便捷的日志初始化配置。

use crate::logger::{FileSink, StderrSink, StdoutSink};
use crate::{Level, LogRingBuffer, Logger};
use std::sync::Arc;

/// 日志输出目标配置
#[derive(Clone, Debug, PartialEq)]
pub enum OutputConfig {
    /// 输出到标准输出
    Stdout,
    /// 输出到标准错误
    Stderr,
    /// 输出到文件（路径）
    File(String),
    /// 输出到环形缓冲区（容量）
    RingBuffer(usize),
}

/// 日志配置
///
/// 用于一键初始化日志系统
///
/// # 示例
///
/// ```
/// use brio_log::{LogConfig, Level};
///
/// let config = LogConfig::new(Level::Debug)
///     .with_ring_buffer(10000);
///
/// let (logger, ring) = config.init();
/// ```
#[derive(Clone, Debug)]
pub struct LogConfig {
    /// 日志级别
    pub level: Level,
    /// 输出目标列表
    pub outputs: Vec<OutputConfig>,
}

impl LogConfig {
    /// 创建默认配置（指定级别，无输出）
    pub fn new(level: Level) -> Self {
        LogConfig {
            level,
            outputs: Vec::new(),
        }
    }

    /// 开发环境推荐配置
    ///
    /// - Debug 级别
    /// - 输出到 stdout
    /// - 环形缓冲区 10000 条（用于崩溃转储）
    pub fn dev() -> Self {
        LogConfig {
            level: Level::Debug,
            outputs: vec![OutputConfig::Stdout, OutputConfig::RingBuffer(10000)],
        }
    }

    /// 生产环境推荐配置
    ///
    /// - Warn 级别
    /// - 输出到 stderr
    /// - 环形缓冲区 1000 条
    pub fn production() -> Self {
        LogConfig {
            level: Level::Warn,
            outputs: vec![OutputConfig::Stderr, OutputConfig::RingBuffer(1000)],
        }
    }

    /// 测试环境配置（静默）
    ///
    /// - Error 级别
    /// - 无输出（noop）
    pub fn test() -> Self {
        LogConfig {
            level: Level::Error,
            outputs: Vec::new(),
        }
    }

    /// 添加 stdout 输出
    pub fn with_stdout(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stdout) {
            self.outputs.push(OutputConfig::Stdout);
        }
        self
    }

    /// 添加 stderr 输出
    pub fn with_stderr(mut self) -> Self {
        if !self.outputs.contains(&OutputConfig::Stderr) {
            self.outputs.push(OutputConfig::Stderr);
        }
        self
    }

    /// 添加文件输出
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.outputs.push(OutputConfig::File(path.into()));
        self
    }

    /// 添加环形缓冲区输出
    pub fn with_ring_buffer(mut self, capacity: usize) -> Self {
        self.outputs.push(OutputConfig::RingBuffer(capacity));
        self
    }

    /// 初始化日志系统
    ///
    /// 返回 (logger, Option<ring_buffer>)
    /// 如果配置了环形缓冲区，会返回它（用于崩溃转储）
    pub fn init(self) -> (Arc<Logger>, Option<Arc<LogRingBuffer>>) {
        let logger = Logger::new(self.level);
        let mut ring_buffer: Option<Arc<LogRingBuffer>> = None;

        for output in self.outputs {
            match output {
                OutputConfig::Stdout => {
                    logger.add_sink(StdoutSink);
                }
                OutputConfig::Stderr => {
                    logger.add_sink(StderrSink);
                }
                OutputConfig::File(path) => {
                    if let Ok(sink) = FileSink::new(&path) {
                        logger.add_sink(sink);
                    }
                }
                OutputConfig::RingBuffer(capacity) => {
                    let ring = LogRingBuffer::new(capacity);
                    ring_buffer = Some(Arc::clone(&ring));
                    logger.add_sink(ring);
                }
            }
        }

        (logger, ring_buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = LogConfig::new(Level::Debug);
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_config_dev() {
        let config = LogConfig::dev();
        assert_eq!(config.level, Level::Debug);
        assert!(config.outputs.contains(&OutputConfig::Stdout));
        assert!(config
            .outputs
            .iter()
            .any(|o| matches!(o, OutputConfig::RingBuffer(10000))));
    }

    #[test]
    fn test_config_production() {
        let config = LogConfig::production();
        assert_eq!(config.level, Level::Warn);
        assert!(config.outputs.contains(&OutputConfig::Stderr));
    }

    #[test]
    fn test_config_test() {
        let config = LogConfig::test();
        assert_eq!(config.level, Level::Error);
        assert!(config.outputs.is_empty());
    }

    #[test]
    fn test_config_builder() {
        let config = LogConfig::new(Level::Info)
            .with_stdout()
            .with_ring_buffer(5000);

        assert!(config.outputs.contains(&OutputConfig::Stdout));
        assert!(config
            .outputs
            .iter()
            .any(|o| matches!(o, OutputConfig::RingBuffer(5000))));
    }

    #[test]
    fn test_with_stdout_dedup() {
        // 重复添加应该只保留一个
        let config = LogConfig::new(Level::Info).with_stdout().with_stdout();
        let stdout_count = config
            .outputs
            .iter()
            .filter(|o| matches!(o, OutputConfig::Stdout))
            .count();
        assert_eq!(stdout_count, 1);
    }

    #[test]
    fn test_config_init() {
        let config = LogConfig::new(Level::Debug).with_ring_buffer(100);

        let (logger, ring) = config.init();

        assert_eq!(logger.level(), Level::Debug);
        assert!(ring.is_some());

        // 测试日志能写入
        crate::debug!(logger, "test message");
        let records = ring.unwrap().dump_records();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_config_init_no_ring() {
        let config = LogConfig::new(Level::Debug);
        let (logger, ring) = config.init();
        assert!(ring.is_none());
        // 无 sink 的 logger 也能正常工作
        crate::debug!(logger, "no sink");
    }

    #[test]
    fn test_config_init_file_error() {
        // 无效路径应该静默失败（不 panic）
        let config = LogConfig::new(Level::Debug).with_file("/dev/null/nonexistent/path/file.log");
        let (logger, ring) = config.init();
        assert!(ring.is_none());
        crate::debug!(logger, "test with invalid path");
    }
}
