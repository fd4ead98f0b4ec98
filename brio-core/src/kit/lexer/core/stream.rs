//! 字符流抽象
//!
//! 将字符源包装为带位置追踪和单步回退的流：
//! - 前向读取经由双缓冲批处理
//! - 位置按字符更新（换行递增行号并重置列号）
//! - retract 同步恢复位置计数

use super::position::SourcePosition;
use super::source::CharSource;
use crate::kit::double_buffer::double_buffer::{DoubleBuffer, END_MARKER};
use brio_config::LexerConfig;

/// 缓冲字符流
///
/// 独占持有底层字符源；流的生命周期即一次完整的词法分析。
pub struct CharStream {
    source: Box<dyn CharSource>,
    buffer: DoubleBuffer,
    /// 当前位置（下一个未消费字符的位置）
    position: SourcePosition,
    /// 上一次读取前的位置快照（单步回退恢复用）
    prev_position: SourcePosition,
}

impl CharStream {
    /// 创建字符流，`capacity` 为双缓冲半区容量
    pub fn new(source: Box<dyn CharSource>, capacity: usize) -> Self {
        Self {
            source,
            buffer: DoubleBuffer::new(capacity),
            position: SourcePosition::start(),
            prev_position: SourcePosition::start(),
        }
    }

    /// 从字符串创建（默认缓冲容量）
    pub fn from_str(input: &str) -> Self {
        use super::source::StringSource;
        Self::new(
            Box::new(StringSource::new(input)),
            LexerConfig::default().buffer_capacity,
        )
    }

    /// 获取当前位置
    pub fn position(&self) -> SourcePosition {
        self.position
    }

    /// 读取并消费下一个字符
    ///
    /// 源耗尽后持续返回 [`END_MARKER`]；终止标记不推进位置。
    pub fn next_char(&mut self) -> char {
        let c = self.buffer.next(self.source.as_mut());
        self.prev_position = self.position;
        if c != END_MARKER {
            self.position.advance(c);
        }
        c
    }

    /// 回退一个字符并恢复位置计数
    ///
    /// 只保证单步回退。契约违规（未读先回退、连续回退）在 debug
    /// 构建触发断言，release 构建为 no-op。
    pub fn retract(&mut self) {
        match self.buffer.retract() {
            Ok(()) => self.position = self.prev_position,
            Err(violation) => {
                debug_assert!(false, "retract contract violated: {violation}");
            }
        }
    }
}
