use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::Filter;
use crate::theme::ThemeColors;

/// 渲染空状态（当前视图没有任务时）
///
/// 整个集合为空和 "过滤后为空" 提示不同的下一步。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    filter: Filter,
    list_is_empty: bool,
    colors: &ThemeColors,
) {
    let (message, key, hint) = get_hint_text(filter, list_is_empty);

    let lines = vec![
        Line::from(Span::styled(message, Style::default().fg(colors.muted))),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", Style::default().fg(colors.text)),
            Span::styled(
                format!(" {} ", key),
                Style::default()
                    .fg(colors.highlight)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(hint, Style::default().fg(colors.text)),
        ]),
    ];

    let hint_widget = Paragraph::new(lines).alignment(Alignment::Center);

    // 垂直居中
    let y_offset = (area.height.saturating_sub(3)) / 2;
    let centered_area = Rect {
        x: area.x,
        y: area.y + y_offset,
        width: area.width,
        height: 3.min(area.height),
    };

    frame.render_widget(hint_widget, centered_area);
}

fn get_hint_text(filter: Filter, list_is_empty: bool) -> (&'static str, &'static str, &'static str) {
    if list_is_empty {
        return ("No tasks yet", "n", "to add one");
    }
    match filter {
        Filter::All => ("No tasks yet", "n", "to add one"),
        Filter::Active => ("Nothing left to do", "1", "to see all tasks"),
        Filter::Completed => ("Nothing completed yet", "1", "to see all tasks"),
    }
}
