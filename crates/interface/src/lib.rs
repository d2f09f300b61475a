//! Hola Interface - 交互层
//!
//! 职责：
//! - 控制台问答会话
//! - CLI 命令行参数与日志初始化
//!
//! 架构：
//! - session: 读取回答、输出问候
//! - cli: 参数解析、stdin/stdout 绑定

pub mod cli;
pub mod session;



pub use cli::{run_cli, run_with_config, CliConfig, CliError};
pub use session::{run_greeter, Session};
