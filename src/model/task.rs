use serde::{Deserialize, Serialize};

/// 任务 ID
///
/// 由 TaskStore 的单调计数器分配（从 1 开始），进程内不复用。
/// 早期版本用毫秒时间戳做 ID，快速连续添加会撞车，已换成计数器。
pub type TaskId = u64;

/// 单条待办任务
///
/// 序列化形状: `{"id": 3, "title": "Buy milk", "done": false}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// 任务 ID（创建后不变）
    pub id: TaskId,
    /// 任务标题（创建时已去除首尾空白，保证非空）
    pub title: String,
    /// 是否已完成
    pub done: bool,
}
