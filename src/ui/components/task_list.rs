use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState},
    Frame,
};

use crate::app::{App, Focus};
use crate::model::Task;
use crate::theme::ThemeColors;

/// 渲染任务列表（当前过滤视图）
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let colors = &app.colors;
    let editing_id = app.edit.editing_id();

    let items: Vec<ListItem> = app
        .visible()
        .iter()
        .map(|task| {
            if editing_id == Some(task.id) {
                editing_row(app.edit.scratch().unwrap_or_default(), colors)
            } else {
                task_row(task, colors)
            }
        })
        .collect();

    let highlight = if app.focus == Focus::List {
        Style::default().bg(colors.bg_secondary)
    } else {
        Style::default()
    };

    let list = List::new(items).highlight_style(highlight);

    let mut state = ListState::default();
    state.select(app.selected);

    frame.render_stateful_widget(list, area, &mut state);
}

fn task_row<'a>(task: &Task, colors: &ThemeColors) -> ListItem<'a> {
    let (glyph, text_style) = if task.completed {
        (
            "✔",
            Style::default()
                .fg(colors.done)
                .add_modifier(Modifier::CROSSED_OUT),
        )
    } else {
        (" ", Style::default().fg(colors.text))
    };

    ListItem::new(Line::from(vec![
        Span::styled(format!(" [{}] ", glyph), Style::default().fg(colors.muted)),
        Span::styled(task.text.clone(), text_style),
    ]))
}

/// 编辑中的行：显示 scratch 缓冲和光标
fn editing_row<'a>(scratch: &str, colors: &ThemeColors) -> ListItem<'a> {
    ListItem::new(Line::from(vec![
        Span::styled(" ✎  ", Style::default().fg(colors.highlight)),
        Span::styled(scratch.to_string(), Style::default().fg(colors.text)),
        Span::styled("▏", Style::default().fg(colors.highlight)),
    ]))
}
