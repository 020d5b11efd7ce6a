//! 应用配置持久化
//!
//! 配置只有主题一项，存放在 ~/.tally/config.toml：
//!
//! ```toml
//! [theme]
//! name = "Dracula"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::tally_dir;

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub theme: ThemeConfig,
}

/// 主题配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub name: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: "Auto".to_string(),
        }
    }
}

/// 获取配置文件路径
fn config_path() -> PathBuf {
    tally_dir().join("config.toml")
}

/// 加载配置
///
/// 文件不存在、读不到、解析失败都返回默认配置，
/// 启动路径上绝不因为一个坏配置文件挡住用户。
pub fn load_config() -> Config {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|s| toml::from_str(&s).ok())
        .unwrap_or_default()
}

/// 保存配置
///
/// 和加载不同，保存失败要让调用方知道（UI 层会弹 toast）。
pub fn save_config(config: &Config) -> Result<()> {
    fs::create_dir_all(tally_dir())?;
    save_config_to(&config_path(), config)
}

fn save_config_to(path: &Path, config: &Config) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config {
            theme: ThemeConfig {
                name: "Dracula".to_string(),
            },
        };
        save_config_to(&path, &config).unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.theme.name, "Dracula");
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_from(&dir.path().join("nope.toml"));
        assert_eq!(loaded.theme.name, "Auto");
    }

    #[test]
    fn test_load_corrupt_file_returns_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme\nname = oops").unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.theme.name, "Auto");
    }

    #[test]
    fn test_load_tolerates_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[theme]\nname = \"Light\"\nfuture_field = 1\n").unwrap();

        let loaded = load_config_from(&path);
        assert_eq!(loaded.theme.name, "Light");
    }
}
