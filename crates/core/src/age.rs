//! Age parsing
//!
//! 与原始的整数读取保持一致：只取第一个空白分隔的 token，
//! 行内剩余内容被丢弃。

use tracing::warn;

use crate::{GreeterError, Result};

/// Parse the age from one input line.
///
/// Leading and trailing whitespace is ignored and only the first token is
/// considered, so `"30 years"` yields `30`. A sign (`+` or `-`) is accepted.
pub fn parse_age(line: &str) -> Result<i32> {
    let token = line.split_whitespace().next().unwrap_or("");

    token.parse::<i32>().map_err(|source| {
        warn!(input = %line.trim(), "age is not an integer");
        GreeterError::InputFormat {
            input: line.trim().to_string(),
            source,
        }
    })
}
