//! 主界面渲染

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, filter_tabs, footer, header, help_panel, input_bar, task_list, theme_selector,
    toast,
};

/// 渲染主界面
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let colors = &app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, tabs_area, list_area, footer_area] = Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    // 顶部：标题 + toggle-all 指示 + 计数
    header::render(frame, header_area, app);

    // 新任务输入框
    input_bar::render(frame, input_area, app);

    // 过滤器 Tab 栏
    filter_tabs::render(frame, tabs_area, app.filter, &app.tasks, colors);

    // 任务列表 / 空状态
    if app.visible().is_empty() {
        empty_state::render(frame, list_area, app.filter, app.tasks.is_empty(), colors);
    } else {
        task_list::render(frame, list_area, app);
    }

    // 底部快捷键提示
    footer::render(frame, footer_area, app.focus, colors);

    // 弹窗层
    if app.show_theme_selector {
        theme_selector::render(frame, app.theme_selector_index, colors);
    }

    if app.show_help {
        help_panel::render(frame, colors);
    }

    if let Some(ref t) = app.toast {
        toast::render(frame, &t.message, colors);
    }
}
