//! 双缓冲输入批处理
//!
//! 两个定容半区交替充当活跃缓冲：一个被消费时另一个等待下一轮填充，
//! 摊薄对底层字符源的读取成本。支持单步回退（retract）。
//!
//! 历史批处理方案的保留实现：契约只要求 next/retract 的可观察行为，
//! 单个可增长队列同样满足。

use crate::kit::lexer::core::source::CharSource;
use thiserror::Error;

/// 输入终止标记
///
/// 底层源耗尽后，缓冲槽位以此标记填充。源数据中出现的 NUL
/// 与流结束不可区分（与历史实现保持一致）。
pub const END_MARKER: char = '\0';

/// 回退契约违规
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DoubleBufferError {
    /// 尚未消费任何字符就回退
    #[error("cannot retract before any character was consumed")]
    RetractAtStart,

    /// 两次回退之间没有读取
    #[error("cannot retract twice without an intervening read")]
    DoubleRetract,
}

/// 当前活跃的缓冲半区
///
/// 显式枚举取代历史实现中的全局布尔开关。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveHalf {
    First,
    Second,
}

impl ActiveHalf {
    fn other(self) -> Self {
        match self {
            ActiveHalf::First => ActiveHalf::Second,
            ActiveHalf::Second => ActiveHalf::First,
        }
    }

    fn index(self) -> usize {
        match self {
            ActiveHalf::First => 0,
            ActiveHalf::Second => 1,
        }
    }
}

/// 双缓冲区
///
/// 游标落在活跃半区内，区间 [0, capacity]；到达 capacity 时换入
/// 另一半区并从源重新填充。半区严格交替。
pub struct DoubleBuffer {
    halves: [Vec<char>; 2],
    active: ActiveHalf,
    cursor: usize,
    capacity: usize,
    /// 底层源已耗尽（之后的填充全为 END_MARKER，不再轮询源）
    exhausted: bool,
    /// 上一次操作是回退（用于拒绝连续回退）
    retracted: bool,
    /// 是否已消费过字符
    started: bool,
}

impl DoubleBuffer {
    /// 创建双缓冲区，每个半区容纳 `capacity` 个字符
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            halves: [vec![END_MARKER; capacity], vec![END_MARKER; capacity]],
            active: ActiveHalf::Second,
            // 游标起始于容量处，首次读取即触发换区填充
            cursor: capacity,
            capacity,
            exhausted: false,
            retracted: false,
            started: false,
        }
    }

    /// 每个半区的容量
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// 消费下一个字符；源耗尽后持续返回 [`END_MARKER`]
    pub fn next(&mut self, source: &mut dyn CharSource) -> char {
        if self.cursor == self.capacity {
            self.active = self.active.other();
            self.refill(source);
            self.cursor = 0;
        }

        let c = self.halves[self.active.index()][self.cursor];
        self.cursor += 1;
        self.retracted = false;
        self.started = true;
        c
    }

    /// 回退一个字符
    ///
    /// 只保证单步回退：回退后必须先读取才能再次回退。
    pub fn retract(&mut self) -> Result<(), DoubleBufferError> {
        if !self.started {
            return Err(DoubleBufferError::RetractAtStart);
        }
        if self.retracted {
            return Err(DoubleBufferError::DoubleRetract);
        }
        if self.cursor == 0 {
            // 回退会跨越半区边界；单步契约下不可达，防御处理
            return Err(DoubleBufferError::RetractAtStart);
        }

        self.cursor -= 1;
        self.retracted = true;
        Ok(())
    }

    /// 填充活跃半区
    ///
    /// 源中途耗尽时，剩余槽位标记为 END_MARKER；NUL 视同耗尽。
    fn refill(&mut self, source: &mut dyn CharSource) {
        let half = &mut self.halves[self.active.index()];
        for slot in half.iter_mut() {
            if self.exhausted {
                *slot = END_MARKER;
                continue;
            }
            match source.next_char() {
                Some(END_MARKER) | None => {
                    self.exhausted = true;
                    *slot = END_MARKER;
                }
                Some(c) => *slot = c,
            }
        }
    }
}
