mod colors;
mod detect;

use ratatui::style::Color;

pub use colors::*;
pub use detect::system_prefers_dark;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Auto,
    Dark,
    Light,
    Dracula,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Auto => "Auto",
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[Theme::Auto, Theme::Dark, Theme::Light, Theme::Dracula]
    }

    /// 从名称创建主题（用于配置加载）
    pub fn from_name(name: &str) -> Self {
        match name {
            "Auto" => Theme::Auto,
            "Dark" => Theme::Dark,
            "Light" => Theme::Light,
            "Dracula" => Theme::Dracula,
            _ => Theme::Auto, // 未知名称回退 Auto
        }
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 主背景色
    pub bg: Color,
    /// 次级背景色（选中行等）
    pub bg_secondary: Color,
    /// Logo 颜色
    pub logo: Color,
    /// 高亮色（选中项、快捷键等）
    pub highlight: Color,
    /// 普通文字
    pub text: Color,
    /// 次要文字（灰色）
    pub muted: Color,
    /// 边框颜色
    pub border: Color,
    /// 已完成任务的勾选标记
    pub done: Color,
    /// 危险操作（删除按钮）
    pub danger: Color,
}

/// 获取指定主题的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Auto => {
            if system_prefers_dark() {
                dark_colors()
            } else {
                light_colors()
            }
        }
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for theme in Theme::all() {
            assert_eq!(Theme::from_name(theme.label()), *theme);
        }
    }

    #[test]
    fn test_from_name_unknown_falls_back_to_auto() {
        assert_eq!(Theme::from_name("Solarized"), Theme::Auto);
        assert_eq!(Theme::from_name(""), Theme::Auto);
    }

    #[test]
    fn test_default_is_auto() {
        assert_eq!(Theme::default(), Theme::Auto);
    }
}
