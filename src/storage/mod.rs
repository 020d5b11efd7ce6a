pub mod config;

use std::path::PathBuf;

/// 获取 ~/.tally/ 目录路径
pub fn tally_dir() -> PathBuf {
    dirs::home_dir()
        .expect("Cannot find home directory")
        .join(".tally")
}
