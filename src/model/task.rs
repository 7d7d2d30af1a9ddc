use std::fmt;

/// Task 标识符
///
/// Newtype over the raw counter value so a task id can never be mixed up
/// with a list index or any other integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 单个任务
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// 任务 ID (host 分配，进程内唯一)
    pub id: TaskId,
    /// 任务文本 (用户输入，允许为空)
    pub text: String,
    /// 完成标记
    pub completed: bool,
}

impl Task {
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_task_starts_active() {
        let task = Task::new(TaskId::new(1), "buy milk");
        assert_eq!(task.text, "buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn test_task_id_display() {
        assert_eq!(TaskId::new(42).to_string(), "#42");
    }

    #[test]
    fn test_empty_text_accepted() {
        // 不做文本校验，空文本是合法任务
        let task = Task::new(TaskId::new(1), "");
        assert_eq!(task.text, "");
    }
}
