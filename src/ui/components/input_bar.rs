use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Focus};

/// 渲染新任务输入框
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let focused = app.focus == Focus::Draft;

    let border_color = if focused {
        colors.highlight
    } else {
        colors.border
    };

    let block = Block::default()
        .title(" New Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let line = if app.draft.is_empty() && !focused {
        // 占位提示
        Line::from(Span::styled(
            "What needs doing?  (press n)",
            Style::default().fg(colors.muted),
        ))
    } else {
        let mut spans = vec![Span::styled(
            app.draft.clone(),
            Style::default().fg(colors.text),
        )];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(colors.highlight)));
        }
        Line::from(spans)
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}
