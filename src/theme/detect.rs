//! 系统外观检测

use std::process::Command;

/// 检测系统是否处于深色模式
///
/// 只在 macOS 上有真实检测：`defaults read -g AppleInterfaceStyle`
/// 在深色模式下输出 "Dark"，浅色模式下直接报错退出。
/// 其他平台一律当浅色处理。
pub fn system_prefers_dark() -> bool {
    if !cfg!(target_os = "macos") {
        return false;
    }

    match Command::new("defaults")
        .args(["read", "-g", "AppleInterfaceStyle"])
        .output()
    {
        Ok(output) if output.status.success() => String::from_utf8_lossy(&output.stdout)
            .trim()
            .eq_ignore_ascii_case("dark"),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prefers_dark_does_not_panic() {
        // 结果依赖运行环境，这里只保证调用安全
        let _ = system_prefers_dark();
    }
}
