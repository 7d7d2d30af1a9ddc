use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{Filter, TaskList};
use crate::theme::ThemeColors;

/// 渲染过滤器 Tab 栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    current_filter: Filter,
    tasks: &TaskList,
    colors: &ThemeColors,
) {
    let mut spans = Vec::new();
    spans.push(Span::raw("   "));

    let filters = Filter::all();
    for (i, filter) in filters.iter().enumerate() {
        let count = match filter {
            Filter::All => tasks.len(),
            Filter::Active => tasks.active_count(),
            Filter::Completed => tasks.completed_count(),
        };
        let label = format!("  {} {}  ", filter.label(), count);

        if *filter == current_filter {
            // 选中的 Tab: 背景高亮块
            spans.push(Span::styled(
                label,
                Style::default()
                    .fg(colors.tab_active_fg)
                    .bg(colors.tab_active_bg)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            // 未选中的 Tab: 普通显示
            spans.push(Span::styled(label, Style::default().fg(colors.muted)));
        }

        if i < filters.len() - 1 {
            spans.push(Span::raw("  "));
        }
    }

    let line = Line::from(spans);

    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT | Borders::BOTTOM)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
