//! 任务列表状态容器
//!
//! TaskStore 是任务数据的唯一持有者和唯一写入方，UI 层只通过
//! `tasks()` 拿只读快照、通过 `revision()` 观察变化。
//! 所有操作对非法输入一律静默忽略（不报错、不改数据、不推进 revision）。

use super::task::{Task, TaskId};

/// 任务列表状态容器
///
/// - `tasks` 的顺序就是显示顺序，`move_task` 直接改这个顺序
/// - `next_id` 单调递增，保证同一进程内 ID 永不重复
/// - `revision` 每次成功变更 +1，no-op 不变（等价于变更通知）
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: TaskId,
    revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// 创建空的任务列表
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    // ========== 变更操作 ==========

    /// 添加任务（追加到列表末尾）
    ///
    /// 标题先去除首尾空白；结果为空则整个调用是 no-op。
    pub fn add(&mut self, title: &str) {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return;
        }

        self.tasks.push(Task {
            id: self.next_id,
            title: trimmed.to_string(),
            done: false,
        });
        self.next_id += 1;
        self.revision += 1;
    }

    /// 切换指定任务的完成状态（位置、标题不变）
    ///
    /// ID 不存在时 no-op。
    pub fn toggle_done(&mut self, id: TaskId) {
        if let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) {
            task.done = !task.done;
            self.revision += 1;
        }
    }

    /// 删除指定任务，其余任务保持相对顺序
    ///
    /// ID 不存在时 no-op。
    pub fn remove(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() != before {
            self.revision += 1;
        }
    }

    /// 把 `from` 位置的任务挪到 `to` 位置，中间的任务依次平移
    ///
    /// 任一下标越界时 no-op：拖拽手势在快速移动时会产生瞬时越界下标，
    /// 这里必须兜底，不能 panic 也不能弄坏列表。
    /// `from == to` 没有实际变更，同样按 no-op 处理。
    pub fn move_task(&mut self, from: usize, to: usize) {
        if from >= self.tasks.len() || to >= self.tasks.len() || from == to {
            return;
        }

        let task = self.tasks.remove(from);
        self.tasks.insert(to, task);
        self.revision += 1;
    }

    // ========== 只读快照 ==========

    /// 当前任务列表（显示顺序）
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// 任务总数
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// 列表是否为空
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// 已完成任务数
    pub fn done_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.done).count()
    }

    /// 按 ID 查找任务
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// 按 ID 查找任务所在下标
    pub fn index_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == id)
    }

    /// 变更计数器
    ///
    /// 每次成功变更（add/toggle/remove/move）恰好 +1；no-op 不变。
    /// 渲染方只要看到新值就该重画。
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
