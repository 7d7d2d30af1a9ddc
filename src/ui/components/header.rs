use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;

/// Header 总高度：1 (上边框) + 1 (内容) + 1 (分隔) = 3
pub const HEADER_HEIGHT: u16 = 3;

/// 渲染顶部区域（标题 + toggle-all 指示 + 计数）
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;

    let block = Block::default()
        .borders(Borders::TOP | Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    // toggle-all 指示只看当前可见视图
    let toggle_glyph = if app.visible_all_completed() {
        "[✔]"
    } else {
        "[ ]"
    };

    let left = vec![
        Span::raw(" "),
        Span::styled(
            "tally",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(toggle_glyph, Style::default().fg(colors.muted)),
        Span::styled(" a", Style::default().fg(colors.highlight)),
        Span::styled(" toggle all", Style::default().fg(colors.muted)),
    ];

    let right = if app.tasks.all_completed() {
        "all done ".to_string()
    } else {
        let active = app.tasks.active_count();
        format!("{} item{} left ", active, if active == 1 { "" } else { "s" })
    };

    let line = Line::from(left);
    frame.render_widget(Paragraph::new(line), inner_area);

    let counts = Paragraph::new(Line::from(Span::styled(
        right,
        Style::default().fg(colors.muted),
    )))
    .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(counts, inner_area);
}
