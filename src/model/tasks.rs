//! 任务集合及其纯函数操作
//!
//! 所有 "修改" 操作都返回新的 `TaskList`，原值不变 (copy-on-write)。
//! 按 id 查找失败一律静默跳过，不算错误：调用方拿到的就是原集合。

use super::{Filter, Task, TaskId};

/// 有序任务集合，插入顺序即显示顺序
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    /// 空集合
    pub fn empty() -> Self {
        Self { tasks: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 全部任务，插入顺序
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// 按过滤器取视图，顺序保持
    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.all().iter().filter(|t| filter.matches(t)).collect()
    }

    /// 未完成任务，顺序保持
    pub fn active(&self) -> Vec<&Task> {
        self.filtered(Filter::Active)
    }

    /// 已完成任务，顺序保持
    pub fn completed(&self) -> Vec<&Task> {
        self.filtered(Filter::Completed)
    }

    pub fn active_count(&self) -> usize {
        self.active().len()
    }

    pub fn completed_count(&self) -> usize {
        self.completed().len()
    }

    /// 是否全部完成
    ///
    /// 空集合返回 false：空列表不显示 toggle-all 控件，不让它落入
    /// "全部完成" 的真空真值状态。
    pub fn all_completed(&self) -> bool {
        !self.is_empty() && self.active().is_empty()
    }

    /// 按 id 查找任务
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 追加任务（id 由调用方分配）
    pub fn add(&self, task: Task) -> TaskList {
        let mut tasks = self.tasks.clone();
        tasks.push(task);
        TaskList { tasks }
    }

    /// 设置完成标记
    ///
    /// 返回 (修改前的任务, 新集合)。id 不存在时返回 (None, 原集合)。
    pub fn set_completed(&self, value: bool, id: TaskId) -> (Option<Task>, TaskList) {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return (None, self.clone());
        };

        let mut tasks = self.tasks.clone();
        let old = tasks[pos].clone();
        tasks[pos].completed = value;
        (Some(old), TaskList { tasks })
    }

    /// 设置任务文本，契约同 `set_completed`
    ///
    /// 不做 trim、不做非空校验，空文本照常写入。
    pub fn set_text(&self, value: impl Into<String>, id: TaskId) -> (Option<Task>, TaskList) {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return (None, self.clone());
        };

        let mut tasks = self.tasks.clone();
        let old = tasks[pos].clone();
        tasks[pos].text = value.into();
        (Some(old), TaskList { tasks })
    }

    /// 删除任务
    ///
    /// id 不存在时返回原集合，不向调用方报告是否删除了任何东西。
    pub fn delete(&self, id: TaskId) -> TaskList {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return self.clone();
        };

        let mut tasks = self.tasks.clone();
        tasks.remove(pos);
        TaskList { tasks }
    }

    /// 批量删除已完成任务
    ///
    /// 待删 id 列表先在本快照上算好，再逐个 fold `delete`，
    /// 避免边删边查产生的位移问题。
    pub fn clear_completed(&self) -> TaskList {
        let doomed: Vec<TaskId> = self.completed().iter().map(|t| t.id).collect();
        doomed.iter().fold(self.clone(), |acc, id| acc.delete(*id))
    }

    /// 批量设置完成标记
    ///
    /// 只作用于给定的 id 集合。toggle-all 传入的是当前过滤视图里的
    /// id，所以该操作只影响屏幕上可见的子集。
    pub fn set_completed_all(
        &self,
        value: bool,
        ids: impl IntoIterator<Item = TaskId>,
    ) -> TaskList {
        ids.into_iter()
            .fold(self.clone(), |acc, id| acc.set_completed(value, id).1)
    }
}
