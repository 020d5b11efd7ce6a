use ratatui::layout::Rect;

use crate::model::TaskId;

/// 主题选择器里一次点击对应的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    Confirm,
    Cancel,
}

/// 每帧渲染时缓存的可点击区域
///
/// 渲染各组件时登记自己的热区，事件层用坐标反查点到了什么。
/// 每帧开头 `reset()`，保证热区永远对应刚画出来的那一帧。
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    /// 输入栏（点击进入输入模式）
    pub input_bar: Option<Rect>,
    /// 任务表格行 (区域, 列表索引)
    pub task_rows: Vec<(Rect, usize)>,
    /// 每行的勾选格 (区域, 任务 ID)
    pub checkbox_cells: Vec<(Rect, TaskId)>,
    /// 每行的删除格 (区域, 任务 ID)
    pub delete_cells: Vec<(Rect, TaskId)>,
    /// 任务列表区域（滚轮和拖拽检测）
    pub list_area: Option<Rect>,
    /// 主题选择器弹窗区域（点外关闭检测）
    pub dialog_area: Option<Rect>,
    /// 主题选择器选项行 (区域, 选项索引)
    pub dialog_items: Vec<(Rect, usize)>,
    /// 主题选择器按钮 (区域, 动作)
    pub dialog_buttons: Vec<(Rect, DialogAction)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.input_bar = None;
        self.task_rows.clear();
        self.checkbox_cells.clear();
        self.delete_cells.clear();
        self.list_area = None;
        self.dialog_area = None;
        self.dialog_items.clear();
        self.dialog_buttons.clear();
    }
}

/// 检查坐标 (col, row) 是否在 Rect 内
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_boundaries() {
        let rect = Rect::new(2, 3, 10, 4);

        assert!(contains(&rect, 2, 3)); // 左上角含
        assert!(contains(&rect, 11, 6)); // 右下角内侧
        assert!(!contains(&rect, 12, 3)); // 右边界外
        assert!(!contains(&rect, 2, 7)); // 下边界外
        assert!(!contains(&rect, 1, 3));
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut areas = ClickAreas {
            input_bar: Some(Rect::new(0, 0, 5, 1)),
            ..Default::default()
        };
        areas.task_rows.push((Rect::new(0, 1, 5, 1), 0));
        areas.checkbox_cells.push((Rect::new(0, 1, 3, 1), 1));
        areas.dialog_buttons
            .push((Rect::new(0, 2, 4, 1), DialogAction::Confirm));

        areas.reset();
        assert!(areas.input_bar.is_none());
        assert!(areas.task_rows.is_empty());
        assert!(areas.checkbox_cells.is_empty());
        assert!(areas.dialog_buttons.is_empty());
    }
}
