//! Tally 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! 任务列表本身的操作没有错误路径（非法输入静默忽略），
//! 这里只覆盖配置文件读写这类真正会失败的边界。

use std::io;
use thiserror::Error;

/// Tally 错误类型
#[derive(Debug, Error)]
pub enum TallyError {
    /// I/O 错误（配置文件读写、目录创建等）
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML 解析错误
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML 序列化错误
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// Tally Result 类型别名
pub type Result<T> = std::result::Result<T, TallyError>;
