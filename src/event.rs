use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};

use crate::app::{App, Focus};
use crate::model::Filter;

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            // 只处理按下事件
            if key.kind != KeyEventKind::Press {
                return Ok(true);
            }
            handle_key(app, key);
        }
    }

    Ok(!app.should_quit)
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // 优先处理弹窗事件

    // 帮助面板
    if app.show_help {
        handle_help_key(app, key);
        return;
    }

    // 主题选择器
    if app.show_theme_selector {
        handle_theme_selector_key(app, key);
        return;
    }

    // 根据焦点分发事件
    match app.focus {
        Focus::Draft => handle_draft_key(app, key),
        Focus::Edit => handle_edit_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

/// 处理列表焦点下的键盘事件
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 退出
        KeyCode::Char('q') => app.quit(),

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.select_next();
        }

        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.select_previous();
        }

        // 切换完成标记
        KeyCode::Char(' ') | KeyCode::Char('x') => {
            app.toggle_selected();
        }

        // 删除任务
        KeyCode::Char('d') => {
            app.delete_selected();
        }

        // 行内编辑（双击的键盘等价物）
        KeyCode::Char('e') | KeyCode::Enter => {
            app.begin_edit();
        }

        // 新任务输入框
        KeyCode::Char('n') | KeyCode::Char('i') => {
            app.focus_draft();
        }

        // Toggle all（只作用于当前过滤视图）
        KeyCode::Char('a') => {
            app.toggle_all();
        }

        // 清除已完成
        KeyCode::Char('C') => {
            app.clear_completed();
        }

        // 过滤器切换
        KeyCode::Tab | KeyCode::Char('f') => {
            app.cycle_filter();
        }

        // 数字快捷键直达过滤器
        KeyCode::Char('1') => {
            app.set_filter(Filter::All);
        }
        KeyCode::Char('2') => {
            app.set_filter(Filter::Active);
        }
        KeyCode::Char('3') => {
            app.set_filter(Filter::Completed);
        }

        // 功能按键 - Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 功能按键 - 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// 处理新任务输入框的键盘事件
fn handle_draft_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 确认创建（不校验空文本）
        KeyCode::Enter => {
            app.create_task();
        }

        // 失焦回列表（草稿保留）
        KeyCode::Esc | KeyCode::Tab => {
            app.blur_draft();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.draft_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.draft_input_char(c);
        }

        _ => {}
    }
}

/// 处理行内编辑框的键盘事件
fn handle_edit_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交编辑
        KeyCode::Enter => {
            app.commit_edit();
        }

        // 放弃编辑
        KeyCode::Esc => {
            app.cancel_edit();
        }

        // 失焦 = 取消（不提交）
        KeyCode::Tab => {
            app.blur_edit();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.edit_delete_char();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.edit_input_char(c);
        }

        // 其余按键忽略
        _ => {}
    }
}

/// 处理主题选择器的键盘事件
fn handle_theme_selector_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 导航 - 上移
        KeyCode::Char('k') | KeyCode::Up => {
            app.theme_selector_prev();
        }

        // 导航 - 下移
        KeyCode::Char('j') | KeyCode::Down => {
            app.theme_selector_next();
        }

        // 确认选择
        KeyCode::Enter => {
            app.theme_selector_confirm();
        }

        // 取消
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_theme_selector();
        }

        _ => {}
    }
}

/// 处理帮助面板的键盘事件
fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 关闭帮助面板
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => {
            app.show_help = false;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    fn app() -> App {
        App::new(Filter::All, Theme::Dark)
    }

    #[test]
    fn test_add_task_via_draft_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('n')));
        assert_eq!(app.focus, Focus::Draft);

        handle_key(&mut app, press(KeyCode::Char('h')));
        handle_key(&mut app, press(KeyCode::Char('i')));
        handle_key(&mut app, press(KeyCode::Enter));

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.all()[0].text, "hi");
        // 焦点留在输入框，可以连续添加
        assert_eq!(app.focus, Focus::Draft);
    }

    #[test]
    fn test_tab_blurs_edit_and_discards() {
        let mut app = app();
        app.focus_draft();
        for c in "task".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        handle_key(&mut app, press(KeyCode::Enter));
        handle_key(&mut app, press(KeyCode::Esc));

        // 进入编辑并输入，Tab 失焦后文本不变
        handle_key(&mut app, press(KeyCode::Char('e')));
        assert_eq!(app.focus, Focus::Edit);
        handle_key(&mut app, press(KeyCode::Char('!')));
        handle_key(&mut app, press(KeyCode::Tab));

        assert_eq!(app.tasks.all()[0].text, "task");
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_q_quits_from_list_but_inserts_in_draft() {
        let mut app = app();
        app.focus_draft();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.draft, "q");

        app.blur_draft();
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);

        // 帮助面板打开时 q 只关面板，不退出
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_filter_shortcut_keys() {
        let mut app = app();
        handle_key(&mut app, press(KeyCode::Char('2')));
        assert_eq!(app.filter, Filter::Active);
        handle_key(&mut app, press(KeyCode::Tab));
        assert_eq!(app.filter, Filter::Completed);
    }
}
