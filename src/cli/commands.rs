//! # Commands Module / 命令模块
//!
//! - `replay` - Replays a host event stream through a reporter session
//! - `init` - Writes a default reporter config file
//!
//! - `replay` - 通过报告器会话回放宿主事件流
//! - `init` - 写入默认的报告器配置文件

pub mod init;
pub mod replay;
