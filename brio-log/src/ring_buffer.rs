//! 日志专用环形缓冲区
//!
//! 崩溃转储场景：缓冲区保留最后N条日志，满时覆盖最旧记录。

use crate::logger::LogSink;
use crate::record::Record;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 环形缓冲区统计信息
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RingBufferStats {
    /// 当前记录数
    pub record_count: usize,
    /// 因缓冲区满而丢弃的记录数
    pub dropped_count: usize,
    /// 缓冲区容量
    pub capacity: usize,
}

/// 日志环形缓冲区
///
/// 当缓冲区满时，新记录会覆盖最旧的记录（FIFO）
pub struct LogRingBuffer {
    inner: Mutex<VecDeque<Record>>,
    capacity: usize,
    dropped: AtomicUsize,
}

impl LogRingBuffer {
    /// 创建新的环形缓冲区
    pub fn new(capacity: usize) -> Arc<Self> {
        Arc::new(LogRingBuffer {
            inner: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
            dropped: AtomicUsize::new(0),
        })
    }

    /// 写入记录（满了则覆盖旧数据）
    fn push(&self, record: Record) {
        if let Ok(mut inner) = self.inner.lock() {
            if inner.len() >= self.capacity {
                inner.pop_front();
                self.dropped.fetch_add(1, Ordering::Relaxed);
            }
            inner.push_back(record);
        }
    }

    /// 获取当前所有记录（按时间顺序）
    pub fn dump_records(&self) -> Vec<Record> {
        match self.inner.lock() {
            Ok(inner) => inner.iter().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }

    /// 将日志转储到字符串
    pub fn dump(&self) -> String {
        let records = self.dump_records();
        records
            .iter()
            .map(|r| r.format())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// 清空缓冲区
    pub fn clear(&self) {
        if let Ok(mut inner) = self.inner.lock() {
            inner.clear();
        }
        self.dropped.store(0, Ordering::Relaxed);
    }

    /// 获取统计信息
    pub fn stats(&self) -> RingBufferStats {
        RingBufferStats {
            record_count: self.len(),
            dropped_count: self.dropped.load(Ordering::Relaxed),
            capacity: self.capacity,
        }
    }

    /// 获取当前记录数
    pub fn len(&self) -> usize {
        self.inner.lock().map(|inner| inner.len()).unwrap_or(0)
    }

    /// 检查是否为空
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 获取容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 获取已丢弃的记录数
    pub fn dropped_count(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }
}

impl LogSink for Arc<LogRingBuffer> {
    fn write(&self, record: &Record) {
        self.push(record.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Level;

    fn record(message: &str) -> Record {
        Record::new(Level::Info, "test", message)
    }

    #[test]
    fn test_push_and_dump() {
        let ring = LogRingBuffer::new(10);
        ring.push(record("first"));
        ring.push(record("second"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "first");
        assert_eq!(records[1].message, "second");
    }

    #[test]
    fn test_overwrite_oldest_when_full() {
        let ring = LogRingBuffer::new(2);
        ring.push(record("a"));
        ring.push(record("b"));
        ring.push(record("c"));

        let records = ring.dump_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].message, "b");
        assert_eq!(records[1].message, "c");
        assert_eq!(ring.dropped_count(), 1);
    }

    #[test]
    fn test_clear() {
        let ring = LogRingBuffer::new(2);
        ring.push(record("a"));
        ring.push(record("b"));
        ring.push(record("c"));
        ring.clear();

        assert!(ring.is_empty());
        assert_eq!(ring.dropped_count(), 0);
    }

    #[test]
    fn test_stats() {
        let ring = LogRingBuffer::new(3);
        ring.push(record("a"));
        ring.push(record("b"));

        let stats = ring.stats();
        assert_eq!(stats.record_count, 2);
        assert_eq!(stats.dropped_count, 0);
        assert_eq!(stats.capacity, 3);
    }

    #[test]
    fn test_dump_string() {
        let ring = LogRingBuffer::new(10);
        ring.push(record("hello"));
        ring.push(record("world"));

        let dump = ring.dump();
        assert!(dump.contains("hello"));
        assert!(dump.contains("world"));
        assert_eq!(dump.lines().count(), 2);
    }
}
