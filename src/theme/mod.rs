mod colors;

use ratatui::style::Color;

pub use colors::get_theme_colors;

/// 主题类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Dracula,
    Nord,
    Gruvbox,
    TokyoNight,
}

impl Theme {
    /// 主题显示名称
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
            Theme::Dracula => "Dracula",
            Theme::Nord => "Nord",
            Theme::Gruvbox => "Gruvbox",
            Theme::TokyoNight => "Tokyo Night",
        }
    }

    /// 所有主题列表
    pub fn all() -> &'static [Theme] {
        &[
            Theme::Dark,
            Theme::Light,
            Theme::Dracula,
            Theme::Nord,
            Theme::Gruvbox,
            Theme::TokyoNight,
        ]
    }

    /// 从名称创建主题（用于配置和 --theme 参数，大小写不敏感）
    pub fn from_name(name: &str) -> Option<Theme> {
        Theme::all()
            .iter()
            .find(|t| t.label().eq_ignore_ascii_case(name))
            .copied()
    }
}

/// 主题颜色方案
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// 背景色
    pub bg: Color,
    /// 选中行背景
    pub bg_secondary: Color,
    /// 正文
    pub text: Color,
    /// 次要文字（计数、提示）
    pub muted: Color,
    /// 边框
    pub border: Color,
    /// 高亮（快捷键、选中标记）
    pub highlight: Color,
    /// 已完成任务文字
    pub done: Color,
    /// 激活 Tab 前景
    pub tab_active_fg: Color,
    /// 激活 Tab 背景
    pub tab_active_bg: Color,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("Nord"), Some(Theme::Nord));
        assert_eq!(Theme::from_name("nord"), Some(Theme::Nord));
        assert_eq!(Theme::from_name("tokyo night"), Some(Theme::TokyoNight));
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn test_every_theme_has_colors() {
        for theme in Theme::all() {
            // 只要不 panic 即可
            let _ = get_theme_colors(*theme);
        }
    }
}
