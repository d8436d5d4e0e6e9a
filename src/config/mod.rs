//! 配置管理
//!
//! 分层加载：代码默认值 → `config` 文件 → `config.<APP_ENV>` 文件 → 环境变量。

#[path = "impl.rs"]
mod loader;
mod structs;

pub use structs::*;
