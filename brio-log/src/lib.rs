//! brio-log - 结构化日志系统
//!
//! 为 Brio 词法前端设计的结构化日志系统，特点：
//! - **显式传递**：无全局logger，配置通过代码传入
//! - **非阻塞**：日志不卡主线程，满了覆盖旧数据
//! - **崩溃恢复**：环形缓冲区保留最后N条日志
//!
//! # 快速开始
//!
//! ```
//! use brio_log::{LogConfig, debug};
//!
//! let (logger, ring) = LogConfig::dev().init();
//! debug!(logger, "应用启动成功");
//! ```
//!
//! 库代码默认使用 [`Logger::noop`]，由调用方决定是否注入真实 logger。

mod config;
mod logger;
mod macros;
mod record;
mod ring_buffer;

pub use config::{LogConfig, OutputConfig};
pub use logger::{FileSink, LogSink, Logger, StderrSink, StdoutSink};
pub use record::{Level, Record};
pub use ring_buffer::{LogRingBuffer, RingBufferStats};

// 宏通过 #[macro_export] 自动导出到 crate 根：
// trace!, debug!, info!, warn!, error!, log!

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Error > Level::Warn);
    }

    #[test]
    fn test_end_to_end_logging() {
        let (logger, ring) = LogConfig::new(Level::Trace).with_ring_buffer(16).init();

        crate::trace!(logger, "scanning {}", "input");
        crate::error!(logger, "boom");

        let ring = ring.unwrap();
        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].level, Level::Trace);
        assert_eq!(records[1].level, Level::Error);
    }
}
