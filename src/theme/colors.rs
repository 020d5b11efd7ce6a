//! 主题颜色定义

use ratatui::style::Color;

use super::ThemeColors;

/// 深色主题
pub fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        logo: Color::Rgb(0, 255, 136),        // 亮绿色
        highlight: Color::Rgb(0, 255, 136),   // 亮绿色
        text: Color::White,
        muted: Color::Rgb(128, 128, 128), // 灰色
        border: Color::Rgb(68, 68, 68),   // 深灰边框
        done: Color::Rgb(0, 255, 136),    // 绿色对勾
        danger: Color::Rgb(255, 85, 85),  // 红色
    }
}

/// 浅色主题
pub fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        logo: Color::Rgb(0, 128, 68),            // 深绿色
        highlight: Color::Rgb(0, 128, 68),
        text: Color::Rgb(30, 30, 30), // 深灰文字
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        done: Color::Rgb(0, 150, 80),
        danger: Color::Rgb(200, 50, 50),
    }
}

/// Dracula 主题
pub fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),           // 背景色
        bg_secondary: Color::Rgb(68, 71, 90), // 选中行
        logo: Color::Rgb(189, 147, 249),      // 紫色
        highlight: Color::Rgb(255, 121, 198), // 粉色
        text: Color::Rgb(248, 248, 242),      // 前景色
        muted: Color::Rgb(98, 114, 164),      // 注释色
        border: Color::Rgb(68, 71, 90),       // 边框
        done: Color::Rgb(80, 250, 123),       // 绿色
        danger: Color::Rgb(255, 85, 85),      // 红色
    }
}
