//! Tally 统一错误类型定义
//!
//! 使用 `thiserror` 库提供统一的错误处理，支持错误链式传播。
//! 任务集合本身的操作不会失败（id 不存在是 no-op），这里覆盖的是
//! 配置读写等外围路径。

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

    /// 配置错误
    #[error("Config error: {0}")]
    Config(String),
}

/// Tally Result 类型别名
pub type Result<T> = std::result::Result<T, TallyError>;

impl TallyError {
    /// 创建 Config 错误
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TallyError::config("no config directory");
        assert_eq!(err.to_string(), "Config error: no config directory");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: TallyError = io_err.into();
        assert!(matches!(err, TallyError::Io(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: TallyError = parse_err.into();
        assert!(matches!(err, TallyError::TomlParse(_)));
    }
}
