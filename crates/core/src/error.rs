//! Greeter errors

use std::num::ParseIntError;
use thiserror::Error;

/// 问候流程错误
#[derive(Debug, Error)]
pub enum GreeterError {
    /// Age line could not be parsed as an integer.
    #[error("invalid age '{input}': {source}")]
    InputFormat {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("input ended before {field} was read")]
    UnexpectedEof { field: &'static str },

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GreeterError {
    /// 是否为年龄格式错误
    pub fn is_input_format(&self) -> bool {
        matches!(self, GreeterError::InputFormat { .. })
    }
}

pub type Result<T> = std::result::Result<T, GreeterError>;
