use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::Focus;
use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(frame: &mut Frame, area: Rect, focus: Focus, colors: &ThemeColors) {
    let shortcuts = get_shortcuts(focus);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(focus: Focus) -> Vec<(&'static str, &'static str)> {
    match focus {
        Focus::Draft => vec![
            ("Enter", "add"),
            ("Esc", "back to list"),
        ],
        Focus::Edit => vec![
            ("Enter", "save"),
            ("Esc", "discard"),
        ],
        Focus::List => vec![
            ("n", "new"),
            ("Space", "done"),
            ("e", "edit"),
            ("d", "delete"),
            ("a", "toggle all"),
            ("C", "clear done"),
            ("Tab", "filter"),
            ("?", "help"),
            ("q", "quit"),
        ],
    }
}
