//! 行内编辑状态机
//!
//! 同一时刻最多一个任务处于编辑中。scratch 缓冲区保存未提交的输入，
//! 集合里的任务在 commit 之前保持原文本；cancel / 失焦直接丢弃缓冲。

use crate::model::{Task, TaskId};

/// 编辑状态
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    /// 无编辑
    #[default]
    Idle,
    /// 正在编辑某个任务
    Editing {
        /// 被编辑任务的 id
        id: TaskId,
        /// 未提交的输入缓冲
        scratch: String,
    },
}

impl EditState {
    /// 进入编辑，scratch 以任务当前文本初始化
    pub fn begin(&mut self, task: &Task) {
        *self = EditState::Editing {
            id: task.id,
            scratch: task.text.clone(),
        };
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    /// 正在编辑的任务 id
    pub fn editing_id(&self) -> Option<TaskId> {
        match self {
            EditState::Editing { id, .. } => Some(*id),
            EditState::Idle => None,
        }
    }

    /// 当前缓冲内容
    pub fn scratch(&self) -> Option<&str> {
        match self {
            EditState::Editing { scratch, .. } => Some(scratch),
            EditState::Idle => None,
        }
    }

    /// 输入字符（仅改缓冲，不碰任务）
    pub fn input_char(&mut self, c: char) {
        if let EditState::Editing { scratch, .. } = self {
            scratch.push(c);
        }
    }

    /// 删除字符
    pub fn backspace(&mut self) {
        if let EditState::Editing { scratch, .. } = self {
            scratch.pop();
        }
    }

    /// 取消编辑，丢弃缓冲
    pub fn cancel(&mut self) {
        *self = EditState::Idle;
    }

    /// 提交编辑，返回 (id, 缓冲文本) 并回到 Idle
    ///
    /// Idle 状态下调用返回 None。
    pub fn take_commit(&mut self) -> Option<(TaskId, String)> {
        match std::mem::take(self) {
            EditState::Editing { id, scratch } => Some((id, scratch)),
            EditState::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_task() -> Task {
        Task::new(TaskId::new(1), "a")
    }

    #[test]
    fn test_begin_copies_committed_text() {
        let mut edit = EditState::default();
        assert!(!edit.is_editing());

        edit.begin(&sample_task());
        assert!(edit.is_editing());
        assert_eq!(edit.editing_id(), Some(TaskId::new(1)));
        assert_eq!(edit.scratch(), Some("a"));
    }

    #[test]
    fn test_input_updates_only_scratch() {
        let task = sample_task();
        let mut edit = EditState::default();
        edit.begin(&task);
        edit.input_char('b');
        assert_eq!(edit.scratch(), Some("ab"));
        // 任务本身未动
        assert_eq!(task.text, "a");
    }

    #[test]
    fn test_backspace() {
        let mut edit = EditState::default();
        edit.begin(&sample_task());
        edit.backspace();
        assert_eq!(edit.scratch(), Some(""));
        // 空缓冲上继续删除无效果
        edit.backspace();
        assert_eq!(edit.scratch(), Some(""));
    }

    #[test]
    fn test_cancel_discards_scratch() {
        let mut edit = EditState::default();
        edit.begin(&sample_task());
        edit.input_char('b');
        edit.cancel();
        assert_eq!(edit, EditState::Idle);
        assert!(edit.scratch().is_none());
    }

    #[test]
    fn test_commit_returns_scratch_and_resets() {
        let mut edit = EditState::default();
        edit.begin(&sample_task());
        edit.input_char('b');

        let committed = edit.take_commit();
        assert_eq!(committed, Some((TaskId::new(1), "ab".to_string())));
        assert_eq!(edit, EditState::Idle);
    }

    #[test]
    fn test_commit_while_idle_is_none() {
        let mut edit = EditState::default();
        assert_eq!(edit.take_commit(), None);
    }

    #[test]
    fn test_keystrokes_while_idle_are_ignored() {
        let mut edit = EditState::default();
        edit.input_char('x');
        edit.backspace();
        assert_eq!(edit, EditState::Idle);
    }
}
