use std::time::{Duration, Instant};

use crate::config::{self, Config, ThemeConfig};
use crate::edit_state::EditState;
use crate::model::{Filter, Task, TaskId, TaskList};
use crate::theme::{get_theme_colors, Theme, ThemeColors};

/// Toast 消息
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            message: message.into(),
            expires_at: Instant::now() + duration,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// 当前接收按键的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// 任务列表
    #[default]
    List,
    /// 新任务输入框
    Draft,
    /// 行内编辑框
    Edit,
}

/// 全局应用状态
///
/// 事件循环是唯一写者：每个按键事件同步产生至多一次状态变更，
/// 渲染层只读。
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务集合（copy-on-write，见 model::tasks）
    pub tasks: TaskList,
    /// 当前过滤器
    pub filter: Filter,
    /// 新任务草稿文本
    pub draft: String,
    /// 行内编辑状态
    pub edit: EditState,
    /// 键盘焦点
    pub focus: Focus,
    /// 可见列表中的光标位置
    pub selected: Option<usize>,
    /// id 分配计数器（进程内单调递增，不复用）
    next_id: u64,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// Toast 提示
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(filter: Filter, theme: Theme) -> Self {
        Self {
            should_quit: false,
            tasks: TaskList::empty(),
            filter,
            draft: String::new(),
            edit: EditState::Idle,
            focus: Focus::List,
            selected: None,
            next_id: 1,
            theme,
            colors: get_theme_colors(theme),
            show_help: false,
            show_theme_selector: false,
            theme_selector_index: 0,
            toast: None,
        }
    }

    // ========== 视图 ==========

    /// 当前过滤器下可见的任务
    pub fn visible(&self) -> Vec<&Task> {
        self.tasks.filtered(self.filter)
    }

    /// 可见任务的 id 快照
    pub fn visible_ids(&self) -> Vec<TaskId> {
        self.visible().iter().map(|t| t.id).collect()
    }

    /// 可见视图是否全部完成（驱动 toggle-all 指示）
    pub fn visible_all_completed(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|t| t.completed)
    }

    /// 当前选中的任务
    pub fn selected_task(&self) -> Option<&Task> {
        let index = self.selected?;
        self.visible().get(index).copied()
    }

    // ========== 光标 ==========

    /// 确保非空视图有选中项
    pub fn ensure_selection(&mut self) {
        if self.selected.is_none() && !self.visible().is_empty() {
            self.selected = Some(0);
        }
    }

    /// 可见视图收缩后收拢光标
    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            self.selected = None;
        } else {
            match self.selected {
                Some(i) if i >= len => self.selected = Some(len - 1),
                None => self.selected = Some(0),
                Some(_) => {}
            }
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.visible().len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.selected = Some(prev);
    }

    // ========== 新任务草稿 ==========

    /// 聚焦输入框
    pub fn focus_draft(&mut self) {
        self.focus = Focus::Draft;
    }

    /// 失焦回列表（草稿保留）
    pub fn blur_draft(&mut self) {
        self.focus = Focus::List;
    }

    /// 草稿输入字符
    pub fn draft_input_char(&mut self, c: char) {
        self.draft.push(c);
    }

    /// 草稿删除字符
    pub fn draft_delete_char(&mut self) {
        self.draft.pop();
    }

    /// 确认草稿，创建任务
    ///
    /// 不做非空校验：空文本也照常入列。id 取自单调计数器。
    pub fn create_task(&mut self) {
        let text = std::mem::take(&mut self.draft);
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        self.tasks = self.tasks.add(Task::new(id, text));
        self.ensure_selection();
    }

    // ========== 单任务操作 ==========

    /// 切换选中任务的完成标记
    pub fn toggle_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let (id, done) = (task.id, task.completed);
        let (_, next) = self.tasks.set_completed(!done, id);
        self.tasks = next;
        self.clamp_selection();
    }

    /// 删除选中任务
    pub fn delete_selected(&mut self) {
        let Some(task) = self.selected_task() else {
            return;
        };
        let id = task.id;
        self.tasks = self.tasks.delete(id);
        self.clamp_selection();
    }

    // ========== 行内编辑 ==========

    /// 进入编辑模式并把焦点移到编辑框
    ///
    /// 选中任务已经不存在时整个请求被吞掉（不报错、不变更状态）。
    pub fn begin_edit(&mut self) {
        let Some(id) = self.selected_task().map(|t| t.id) else {
            return;
        };
        let Some(task) = self.tasks.get(id) else {
            return;
        };
        let task = task.clone();
        self.edit.begin(&task);
        self.focus = Focus::Edit;
    }

    /// 编辑框输入字符（只动 scratch）
    pub fn edit_input_char(&mut self, c: char) {
        self.edit.input_char(c);
    }

    /// 编辑框删除字符
    pub fn edit_delete_char(&mut self) {
        self.edit.backspace();
    }

    /// 提交编辑：scratch 写回任务文本
    pub fn commit_edit(&mut self) {
        if let Some((id, text)) = self.edit.take_commit() {
            let (_, next) = self.tasks.set_text(text, id);
            self.tasks = next;
        }
        self.focus = Focus::List;
    }

    /// 取消编辑：丢弃 scratch
    pub fn cancel_edit(&mut self) {
        self.edit.cancel();
        self.focus = Focus::List;
    }

    /// 编辑框失焦
    ///
    /// 失焦等同取消：进行中的编辑被丢弃，不提交。
    pub fn blur_edit(&mut self) {
        self.cancel_edit();
    }

    // ========== 批量操作 ==========

    /// Toggle all：作用于当前过滤视图里的任务，不是整个集合
    ///
    /// 目标状态：可见任务没有全部完成则全部置为完成，否则全部取消。
    pub fn toggle_all(&mut self) {
        let ids = self.visible_ids();
        if ids.is_empty() {
            return;
        }
        let target = !self.visible_all_completed();
        self.tasks = self.tasks.set_completed_all(target, ids);
        self.clamp_selection();
    }

    /// 清除所有已完成任务
    pub fn clear_completed(&mut self) {
        let count = self.tasks.completed_count();
        if count == 0 {
            return;
        }
        self.tasks = self.tasks.clear_completed();
        self.clamp_selection();
        self.show_toast(format!("Cleared {} completed", count));
    }

    // ========== 过滤器 ==========

    /// 设置过滤器
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter;
        // 视图变了，光标回到开头
        self.selected = None;
        self.ensure_selection();
    }

    /// 切换到下一个过滤器
    pub fn cycle_filter(&mut self) {
        self.set_filter(self.filter.next());
    }

    // ========== Theme Selector ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        let themes = Theme::all();
        self.theme_selector_index = themes
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器
    pub fn close_theme_selector(&mut self) {
        self.show_theme_selector = false;
    }

    /// 主题选择器 - 选择上一个
    pub fn theme_selector_prev(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = if self.theme_selector_index == 0 {
            len - 1
        } else {
            self.theme_selector_index - 1
        };
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 选择下一个
    pub fn theme_selector_next(&mut self) {
        let len = Theme::all().len();
        self.theme_selector_index = (self.theme_selector_index + 1) % len;
        // 实时预览
        self.apply_theme_at_index(self.theme_selector_index);
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: Some(self.theme.label().to_string()),
            },
        };
        match config::save_config(&config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.theme.label())),
            Err(e) => self.show_toast(format!("Failed to save config: {}", e)),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== Toast ==========

    /// 显示 Toast 消息
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message, Duration::from_secs(2)));
    }

    /// 更新 Toast 状态（清理过期的 Toast）
    pub fn update_toast(&mut self) {
        if let Some(ref toast) = self.toast {
            if toast.is_expired() {
                self.toast = None;
            }
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Filter::All, Theme::Dark)
    }

    fn app_with_tasks(texts: &[(&str, bool)]) -> App {
        let mut app = app();
        for (text, completed) in texts {
            app.draft = text.to_string();
            app.create_task();
            if *completed {
                // 刚建的任务在列表末尾
                app.selected = Some(app.visible().len() - 1);
                app.toggle_selected();
            }
        }
        app.selected = if app.visible().is_empty() {
            None
        } else {
            Some(0)
        };
        app
    }

    #[test]
    fn test_create_task_allocates_fresh_ids() {
        let mut app = app();
        app.draft = "a".to_string();
        app.create_task();
        app.draft = "b".to_string();
        app.create_task();

        let ids: Vec<TaskId> = app.tasks.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![TaskId::new(1), TaskId::new(2)]);
        // 草稿已清空，焦点策略由 event 层决定
        assert!(app.draft.is_empty());
    }

    #[test]
    fn test_create_task_accepts_empty_draft() {
        let mut app = app();
        app.create_task();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.all()[0].text, "");
    }

    #[test]
    fn test_blur_draft_keeps_text() {
        let mut app = app();
        app.focus_draft();
        app.draft_input_char('h');
        app.draft_input_char('i');
        app.blur_draft();
        assert_eq!(app.draft, "hi");
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_toggle_selected_under_active_filter_clamps_cursor() {
        let mut app = app_with_tasks(&[("a", false), ("b", false)]);
        app.set_filter(Filter::Active);
        app.selected = Some(1);

        app.toggle_selected(); // "b" 完成，离开 Active 视图
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_delete_last_task_clears_selection() {
        let mut app = app_with_tasks(&[("a", false)]);
        app.delete_selected();
        assert!(app.tasks.is_empty());
        assert_eq!(app.selected, None);
    }

    #[test]
    fn test_toggle_all_acts_on_filtered_view_only() {
        // {1,"a",false}, {2,"b",true}，Active 过滤下 toggle-all
        let mut app = app_with_tasks(&[("a", false), ("b", true)]);
        app.set_filter(Filter::Active);

        app.toggle_all();
        // 只有 "a" 在视图里被置为完成；"b" 保持原有的 true
        assert!(app.tasks.all().iter().all(|t| t.completed));
    }

    #[test]
    fn test_toggle_all_unchecks_when_view_all_completed() {
        let mut app = app_with_tasks(&[("a", true), ("b", true)]);
        assert!(app.visible_all_completed());

        app.toggle_all();
        assert_eq!(app.tasks.active_count(), 2);
    }

    #[test]
    fn test_toggle_all_on_empty_view_is_noop() {
        let mut app = app();
        app.toggle_all();
        assert!(app.tasks.is_empty());
    }

    #[test]
    fn test_clear_completed_keeps_active() {
        let mut app = app_with_tasks(&[("a", false), ("b", true)]);
        app.clear_completed();
        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks.all()[0].text, "a");
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_edit_commit_writes_scratch_back() {
        let mut app = app_with_tasks(&[("a", false)]);
        app.begin_edit();
        assert_eq!(app.focus, Focus::Edit);

        app.edit_input_char('b');
        app.commit_edit();
        assert_eq!(app.tasks.all()[0].text, "ab");
        assert_eq!(app.focus, Focus::List);
        assert!(!app.edit.is_editing());
    }

    #[test]
    fn test_edit_blur_discards_scratch() {
        let mut app = app_with_tasks(&[("a", false)]);
        app.begin_edit();
        app.edit_input_char('b');

        app.blur_edit();
        // 提交前失焦 = 取消，文本保持 "a"
        assert_eq!(app.tasks.all()[0].text, "a");
        assert_eq!(app.edit, EditState::Idle);
        assert_eq!(app.focus, Focus::List);
    }

    #[test]
    fn test_begin_edit_without_selection_is_swallowed() {
        let mut app = app();
        app.begin_edit();
        assert_eq!(app.focus, Focus::List);
        assert!(!app.edit.is_editing());
    }

    #[test]
    fn test_edit_commit_empty_text_is_kept() {
        let mut app = app_with_tasks(&[("a", false)]);
        app.begin_edit();
        app.edit_delete_char();
        app.commit_edit();
        assert_eq!(app.tasks.all()[0].text, "");
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_set_filter_resets_cursor() {
        let mut app = app_with_tasks(&[("a", false), ("b", true), ("c", false)]);
        app.selected = Some(2);

        app.set_filter(Filter::Completed);
        assert_eq!(app.visible().len(), 1);
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_selection_wraps() {
        let mut app = app_with_tasks(&[("a", false), ("b", false)]);
        app.selected = Some(1);
        app.select_next();
        assert_eq!(app.selected, Some(0));
        app.select_previous();
        assert_eq!(app.selected, Some(1));
    }
}
