// Hola Core - 核心数据模型
//!
//! 包含：
//! - Profile: 用户回答的三个值（名字、年龄、喜欢的语言）
//! - prompts: 固定提示语
//! - parse_age: 年龄解析
//! - GreeterError: 错误类型

mod error;
mod profile;
mod age;
pub mod prompts;

pub use error::*;
pub use profile::*;
pub use age::*;
