//! 应用配置持久化
//!
//! 只持久化外观选择（主题），任务数据本身不落盘。
//! 配置文件：`~/.config/tally/config.toml`。

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// 主题名 ("Dark"/"Light"/"Dracula"/"Nord"/"Gruvbox"/"Tokyo Night")
    #[serde(default)]
    pub name: Option<String>,
}

/// 配置文件路径
pub fn config_path() -> Result<PathBuf> {
    let dir = dirs::config_dir()
        .ok_or_else(|| TallyError::config("no config directory on this platform"))?;
    Ok(dir.join("tally").join("config.toml"))
}

/// 加载配置
///
/// 文件缺失或损坏时回退到默认值，启动不因配置失败而中断。
pub fn load_config() -> Config {
    let Ok(path) = config_path() else {
        return Config::default();
    };
    match read_config_file(&path) {
        Ok(config) => config,
        Err(e) => {
            // 此时终端尚未进入 raw mode，stderr 可见
            eprintln!("Warning: ignoring config at {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// 保存配置
pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    write_config_file(&path, config)
}

fn read_config_file(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

fn write_config_file(path: &Path, config: &Config) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tally").join("config.toml");

        let config = Config {
            theme: ThemeConfig {
                name: Some("Nord".to_string()),
            },
        };
        write_config_file(&path, &config).unwrap();

        let loaded = read_config_file(&path).unwrap();
        assert_eq!(loaded.theme.name.as_deref(), Some("Nord"));
    }

    #[test]
    fn test_missing_file_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = read_config_file(&dir.path().join("nope.toml")).unwrap();
        assert!(loaded.theme.name.is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [broken").unwrap();

        let err = read_config_file(&path).unwrap_err();
        assert!(matches!(err, TallyError::TomlParse(_)));
    }

    #[test]
    fn test_unknown_fields_tolerated() {
        // 老版本写入的多余字段不应让加载失败
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nname = \"Dark\"\n\n[update]\ncheck = true\n").unwrap();

        let loaded = read_config_file(&path).unwrap();
        assert_eq!(loaded.theme.name.as_deref(), Some("Dark"));
    }
}
