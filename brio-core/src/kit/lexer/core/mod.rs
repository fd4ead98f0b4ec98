//! 字符流核心
//!
//! 位置追踪、字符源抽象与带回退能力的缓冲字符流。

pub mod position;
pub mod source;
pub mod stream;

pub use crate::kit::double_buffer::double_buffer::END_MARKER;
pub use position::{SourcePosition, SourceSpan};
pub use source::{CharSource, ReaderSource, StringSource};
pub use stream::CharStream;
