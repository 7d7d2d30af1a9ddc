//! 主题颜色定义

use ratatui::style::Color;

use super::{Theme, ThemeColors};

/// 获取主题对应的颜色方案
pub fn get_theme_colors(theme: Theme) -> ThemeColors {
    match theme {
        Theme::Dark => dark_colors(),
        Theme::Light => light_colors(),
        Theme::Dracula => dracula_colors(),
        Theme::Nord => nord_colors(),
        Theme::Gruvbox => gruvbox_colors(),
        Theme::TokyoNight => tokyo_night_colors(),
    }
}

/// 深色主题（默认）
fn dark_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(24, 24, 24),           // 深灰背景
        bg_secondary: Color::Rgb(48, 48, 48), // 选中行背景
        text: Color::White,
        muted: Color::Rgb(128, 128, 128),   // 灰色
        border: Color::Rgb(68, 68, 68),     // 深灰边框
        highlight: Color::Rgb(0, 255, 136), // 亮绿色
        done: Color::Rgb(100, 100, 100),    // 已完成置灰
        tab_active_fg: Color::Black,
        tab_active_bg: Color::Rgb(0, 255, 136),
    }
}

/// 浅色主题
fn light_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(250, 250, 250),           // 浅灰背景
        bg_secondary: Color::Rgb(230, 230, 230), // 选中行背景
        text: Color::Rgb(30, 30, 30),
        muted: Color::Rgb(120, 120, 120),
        border: Color::Rgb(200, 200, 200),
        highlight: Color::Rgb(0, 128, 68), // 深绿色
        done: Color::Rgb(160, 160, 160),
        tab_active_fg: Color::White,
        tab_active_bg: Color::Rgb(0, 128, 68),
    }
}

/// Dracula 主题
fn dracula_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 42, 54),
        bg_secondary: Color::Rgb(68, 71, 90),
        text: Color::Rgb(248, 248, 242),
        muted: Color::Rgb(98, 114, 164), // 注释色
        border: Color::Rgb(68, 71, 90),
        highlight: Color::Rgb(255, 121, 198), // 粉色
        done: Color::Rgb(98, 114, 164),
        tab_active_fg: Color::Rgb(40, 42, 54),
        tab_active_bg: Color::Rgb(255, 121, 198),
    }
}

/// Nord 主题
fn nord_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(46, 52, 64),
        bg_secondary: Color::Rgb(67, 76, 94),
        text: Color::Rgb(216, 222, 233),
        muted: Color::Rgb(106, 118, 138),
        border: Color::Rgb(67, 76, 94),
        highlight: Color::Rgb(136, 192, 208), // frost cyan
        done: Color::Rgb(106, 118, 138),
        tab_active_fg: Color::Rgb(46, 52, 64),
        tab_active_bg: Color::Rgb(136, 192, 208),
    }
}

/// Gruvbox 主题
fn gruvbox_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(40, 40, 40),
        bg_secondary: Color::Rgb(60, 56, 54),
        text: Color::Rgb(235, 219, 178),
        muted: Color::Rgb(146, 131, 116),
        border: Color::Rgb(80, 73, 69),
        highlight: Color::Rgb(250, 189, 47), // 黄色
        done: Color::Rgb(146, 131, 116),
        tab_active_fg: Color::Rgb(40, 40, 40),
        tab_active_bg: Color::Rgb(250, 189, 47),
    }
}

/// Tokyo Night 主题
fn tokyo_night_colors() -> ThemeColors {
    ThemeColors {
        bg: Color::Rgb(26, 27, 38),
        bg_secondary: Color::Rgb(41, 46, 66),
        text: Color::Rgb(192, 202, 245),
        muted: Color::Rgb(86, 95, 137),
        border: Color::Rgb(41, 46, 66),
        highlight: Color::Rgb(125, 207, 255), // 蓝色
        done: Color::Rgb(86, 95, 137),
        tab_active_fg: Color::Rgb(26, 27, 38),
        tab_active_bg: Color::Rgb(125, 207, 255),
    }
}
