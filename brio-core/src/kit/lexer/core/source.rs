//! 字符源抽象
//!
//! 词法前端唯一的环境依赖：一个能逐字符产出、以 `None` 表示耗尽的源。
//! I/O 失败同样以 `None` 上报（对调用方等价于流结束）。

use std::io::Read;

/// Unicode替换字符（用于错误恢复）
fn replacement_char() -> char {
    '\u{FFFD}'
}

/// 字符源 trait
///
/// 缓冲字符流独占持有一个实现，按需拉取。
pub trait CharSource {
    /// 产出下一个字符；`None` 表示源已耗尽
    fn next_char(&mut self) -> Option<char>;
}

/// 内存字符串源
pub struct StringSource {
    chars: std::vec::IntoIter<char>,
}

impl StringSource {
    /// 从字符串创建源
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            chars: input.into().chars().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl CharSource for StringSource {
    fn next_char(&mut self) -> Option<char> {
        self.chars.next()
    }
}

/// 字节流源（增量 UTF-8 解码）
pub struct ReaderSource<R: Read> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    /// 包装一个字节读取器
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let mut buf = [0u8; 1];
        match self.reader.read(&mut buf) {
            Ok(0) => None,
            Ok(_) => Some(buf[0]),
            // I/O 错误视同流结束
            Err(_) => None,
        }
    }
}

impl<R: Read> CharSource for ReaderSource<R> {
    fn next_char(&mut self) -> Option<char> {
        let lead = self.read_byte()?;

        let width = match utf8_sequence_length(lead) {
            Some(len) => len,
            // 非法首字节（续字节或超出范围）
            None => return Some(replacement_char()),
        };

        if width == 1 {
            return Some(lead as char);
        }

        let mut bytes = [0u8; 4];
        bytes[0] = lead;
        for slot in bytes.iter_mut().take(width).skip(1) {
            match self.read_byte() {
                Some(b) => *slot = b,
                // 序列中途截断
                None => return Some(replacement_char()),
            }
        }

        match std::str::from_utf8(&bytes[..width]) {
            Ok(s) => s.chars().next().or_else(|| Some(replacement_char())),
            Err(_) => Some(replacement_char()),
        }
    }
}

/// 获取UTF-8序列长度
fn utf8_sequence_length(lead_byte: u8) -> Option<usize> {
    match lead_byte {
        0x00..=0x7F => Some(1), // ASCII
        0xC0..=0xDF => Some(2), // 2字节序列
        0xE0..=0xEF => Some(3), // 3字节序列
        0xF0..=0xF7 => Some(4), // 4字节序列
        _ => None,              // 非法首字节
    }
}
