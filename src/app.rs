use std::time::{Duration, Instant};

use crate::model::{TaskId, TaskStore};
use crate::storage::config::{save_config, Config, ThemeConfig};
use crate::theme::{get_theme_colors, system_prefers_dark, Theme, ThemeColors};
use crate::ui::click_areas::ClickAreas;

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

/// 全局应用状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,
    /// 任务数据
    pub store: TaskStore,
    /// 当前选中的列表索引
    pub selected: Option<usize>,
    /// 输入栏内容
    pub input: String,
    /// 是否处于输入模式
    pub input_mode: bool,
    /// 正在拖拽的任务 ID（None 表示没有拖拽）
    pub dragging: Option<TaskId>,
    /// Toast 提示
    pub toast: Option<Toast>,
    /// 当前主题
    pub theme: Theme,
    /// 当前颜色方案
    pub colors: ThemeColors,
    /// 是否显示主题选择器
    pub show_theme_selector: bool,
    /// 主题选择器当前选中索引
    pub theme_selector_index: usize,
    /// 是否显示帮助面板
    pub show_help: bool,
    /// 本帧的可点击区域
    pub click_areas: ClickAreas,
    /// 上次检测到的系统主题（用于 Auto 模式检测变化）
    last_system_dark: bool,
}

impl App {
    pub fn new(theme: Theme) -> Self {
        let last_system_dark = system_prefers_dark();
        let colors = get_theme_colors(theme);

        Self {
            should_quit: false,
            store: TaskStore::new(),
            selected: None,
            input: String::new(),
            input_mode: false,
            dragging: None,
            toast: None,
            theme,
            colors,
            show_theme_selector: false,
            theme_selector_index: 0,
            show_help: false,
            click_areas: ClickAreas::default(),
            last_system_dark,
        }
    }

    // ========== 输入栏 ==========

    /// 进入输入模式
    pub fn start_input(&mut self) {
        self.input_mode = true;
    }

    /// 退出输入模式并丢弃未提交的内容
    pub fn stop_input(&mut self) {
        self.input_mode = false;
        self.input.clear();
    }

    /// 输入字符
    pub fn input_char(&mut self, c: char) {
        self.input.push(c);
    }

    /// 删除末尾字符
    pub fn input_backspace(&mut self) {
        self.input.pop();
    }

    /// 提交输入栏内容为新任务
    ///
    /// 成功后清空输入、留在输入模式，方便连续录入。
    /// 空白标题由 store 静默拒绝，这里通过 revision 判断是否真的加上了。
    pub fn submit_input(&mut self) {
        let before = self.store.revision();
        self.store.add(&self.input);
        if self.store.revision() != before {
            self.input.clear();
            self.ensure_selection();
        }
    }

    // ========== 列表选择 ==========

    /// 确保选中项落在有效范围内
    pub fn ensure_selection(&mut self) {
        let len = self.store.len();
        if len == 0 {
            self.selected = None;
            return;
        }
        match self.selected {
            None => self.selected = Some(0),
            Some(i) if i >= len => self.selected = Some(len - 1),
            _ => {}
        }
    }

    /// 选中下一项
    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        self.selected = Some((current + 1) % len);
    }

    /// 选中上一项
    pub fn select_previous(&mut self) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        let current = self.selected.unwrap_or(0);
        let prev = if current == 0 { len - 1 } else { current - 1 };
        self.selected = Some(prev);
    }

    /// 鼠标点击选中指定索引
    pub fn select_at(&mut self, index: usize) {
        if index < self.store.len() {
            self.selected = Some(index);
        }
    }

    // ========== 任务操作 ==========

    /// 切换选中任务的完成状态
    pub fn toggle_selected(&mut self) {
        let id = match self.selected.and_then(|i| self.store.tasks().get(i)) {
            Some(task) => task.id,
            None => return,
        };
        self.store.toggle_done(id);
    }

    /// 切换指定任务的完成状态（鼠标点勾选框）
    pub fn toggle_at(&mut self, id: TaskId) {
        self.store.toggle_done(id);
    }

    /// 删除选中任务
    pub fn remove_selected(&mut self) {
        let id = match self.selected.and_then(|i| self.store.tasks().get(i)) {
            Some(task) => task.id,
            None => return,
        };
        self.remove_at(id);
    }

    /// 删除指定任务（鼠标点删除按钮）
    pub fn remove_at(&mut self, id: TaskId) {
        let title = match self.store.get(id) {
            Some(task) => task.title.clone(),
            None => return,
        };
        // 被删的行在选中行上方时选中跟着上移，保持停在同一个任务上
        if let (Some(sel), Some(removed)) = (self.selected, self.store.index_of(id)) {
            if removed < sel {
                self.selected = Some(sel - 1);
            }
        }
        self.store.remove(id);
        self.show_toast(format!("Deleted: {}", title));
        self.ensure_selection();
    }

    /// 选中任务上移一位，选中跟着走
    pub fn move_selected_up(&mut self) {
        if let Some(i) = self.selected {
            if i > 0 {
                self.store.move_task(i, i - 1);
                self.selected = Some(i - 1);
            }
        }
    }

    /// 选中任务下移一位，选中跟着走
    pub fn move_selected_down(&mut self) {
        if let Some(i) = self.selected {
            if i + 1 < self.store.len() {
                self.store.move_task(i, i + 1);
                self.selected = Some(i + 1);
            }
        }
    }

    // ========== 拖拽排序 ==========

    /// 按下行开始拖拽
    pub fn begin_drag(&mut self, index: usize) {
        self.select_at(index);
        self.dragging = self.store.tasks().get(index).map(|t| t.id);
    }

    /// 拖拽经过指定行，把被拖任务挪过去
    ///
    /// 被拖的始终是 begin_drag 时按住的那条任务（按 ID 记住它，
    /// 中途选中被别的手势挪走也不会拖错）；挪完选中落回它身上。
    pub fn drag_to(&mut self, index: usize) {
        let Some(id) = self.dragging else { return };
        let Some(from) = self.store.index_of(id) else { return };
        let to = index.min(self.store.len().saturating_sub(1));
        if from != to {
            self.store.move_task(from, to);
        }
        self.selected = Some(to);
    }

    /// 松开结束拖拽
    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    // ========== 主题选择器 ==========

    /// 打开主题选择器
    pub fn open_theme_selector(&mut self) {
        // 找到当前主题在列表中的索引
        self.theme_selector_index = Theme::all()
            .iter()
            .position(|t| *t == self.theme)
            .unwrap_or(0);
        self.show_theme_selector = true;
    }

    /// 关闭主题选择器（会话内保留预览效果）
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

    /// 主题选择器 - 鼠标点中某一项
    pub fn theme_selector_set(&mut self, index: usize) {
        if index < Theme::all().len() {
            self.theme_selector_index = index;
            self.apply_theme_at_index(index);
        }
    }

    /// 主题选择器 - 确认选择并写入配置
    pub fn theme_selector_confirm(&mut self) {
        self.apply_theme_at_index(self.theme_selector_index);
        self.show_theme_selector = false;

        let config = Config {
            theme: ThemeConfig {
                name: self.theme.label().to_string(),
            },
        };
        match save_config(&config) {
            Ok(()) => self.show_toast(format!("Theme: {}", self.theme.label())),
            Err(e) => self.show_toast(format!("Theme not saved: {}", e)),
        }
    }

    /// 应用指定索引的主题
    fn apply_theme_at_index(&mut self, index: usize) {
        if let Some(theme) = Theme::all().get(index) {
            self.theme = *theme;
            self.colors = get_theme_colors(*theme);
        }
    }

    // ========== 杂项 ==========

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

    /// 检查系统主题变化（用于 Auto 模式）
    pub fn check_system_theme(&mut self) {
        // 只在 Auto 模式下检查
        if self.theme != Theme::Auto {
            return;
        }

        let current_dark = system_prefers_dark();
        if current_dark != self.last_system_dark {
            self.last_system_dark = current_dark;
            self.colors = get_theme_colors(Theme::Auto);
        }
    }

    /// 退出应用
    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Theme::Auto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new(Theme::Dark);
        for title in titles {
            app.store.add(title);
        }
        app.ensure_selection();
        app
    }

    #[test]
    fn test_submit_input_adds_and_clears() {
        let mut app = App::new(Theme::Dark);
        app.start_input();
        for c in "Buy milk".chars() {
            app.input_char(c);
        }
        app.submit_input();

        assert_eq!(app.store.tasks()[0].title, "Buy milk");
        assert!(app.input.is_empty());
        assert!(app.input_mode); // 连续录入，不退出输入模式
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_submit_blank_input_is_silent_noop() {
        let mut app = App::new(Theme::Dark);
        app.start_input();
        app.input_char(' ');
        app.input_char(' ');
        app.submit_input();

        assert!(app.store.is_empty());
        assert!(app.input_mode);
        assert!(app.toast.is_none()); // 不打扰，连 toast 都不弹
        assert_eq!(app.input, "  "); // 内容保留，随用户继续编辑
    }

    #[test]
    fn test_stop_input_discards_buffer() {
        let mut app = App::new(Theme::Dark);
        app.start_input();
        app.input_char('x');
        app.stop_input();

        assert!(!app.input_mode);
        assert!(app.input.is_empty());
    }

    #[test]
    fn test_selection_wraps_both_directions() {
        let mut app = app_with(&["a", "b", "c"]);

        app.select_previous();
        assert_eq!(app.selected, Some(2)); // 从头往前绕到尾

        app.select_next();
        assert_eq!(app.selected, Some(0)); // 从尾往后绕回头
    }

    #[test]
    fn test_ensure_selection_clamps_after_remove() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = Some(2);

        let last = app.store.tasks()[2].id;
        app.store.remove(last);
        app.ensure_selection();

        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn test_remove_selected_toasts_title() {
        let mut app = app_with(&["Walk dog"]);
        app.remove_selected();

        assert!(app.store.is_empty());
        assert_eq!(app.selected, None);
        let toast = app.toast.as_ref().unwrap();
        assert!(toast.message.contains("Walk dog"));
    }

    #[test]
    fn test_remove_above_selection_keeps_same_task() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = Some(2);

        let first = app.store.tasks()[0].id;
        app.remove_at(first);

        assert_eq!(app.selected, Some(1));
        assert_eq!(app.store.tasks()[1].title, "c");
    }

    #[test]
    fn test_toggle_selected() {
        let mut app = app_with(&["a", "b"]);
        app.selected = Some(1);

        app.toggle_selected();
        assert!(app.store.tasks()[1].done);

        app.toggle_selected();
        assert!(!app.store.tasks()[1].done);
    }

    #[test]
    fn test_move_selected_follows_task() {
        let mut app = app_with(&["a", "b", "c"]);
        app.selected = Some(0);

        app.move_selected_down();
        assert_eq!(app.store.tasks()[1].title, "a");
        assert_eq!(app.selected, Some(1));

        app.move_selected_up();
        assert_eq!(app.store.tasks()[0].title, "a");
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_move_selected_at_edges_noop() {
        let mut app = app_with(&["a", "b"]);

        app.selected = Some(0);
        app.move_selected_up();
        assert_eq!(app.selected, Some(0));

        app.selected = Some(1);
        app.move_selected_down();
        assert_eq!(app.selected, Some(1));
        assert_eq!(app.store.tasks()[0].title, "a");
    }

    #[test]
    fn test_drag_reorders_and_follows() {
        let mut app = app_with(&["a", "b", "c"]);

        app.begin_drag(0);
        assert!(app.dragging.is_some());

        app.drag_to(2);
        assert_eq!(app.store.tasks()[2].title, "a");
        assert_eq!(app.selected, Some(2));

        app.end_drag();
        assert!(app.dragging.is_none());
    }

    #[test]
    fn test_drag_tracks_task_not_selection() {
        let mut app = app_with(&["a", "b", "c"]);

        app.begin_drag(2);
        app.select_previous(); // 拖拽中途选中被别的手势挪走

        app.drag_to(0);
        assert_eq!(app.store.tasks()[0].title, "c"); // 拖的还是按住的那条
        assert_eq!(app.store.tasks()[1].title, "a");
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_drag_target_clamped_to_list() {
        let mut app = app_with(&["a", "b"]);

        app.begin_drag(0);
        app.drag_to(99); // 指针甩出列表底部
        assert_eq!(app.store.tasks()[1].title, "a");
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn test_drag_ignored_without_begin() {
        let mut app = app_with(&["a", "b"]);
        app.selected = Some(0);

        app.drag_to(1);
        assert_eq!(app.store.tasks()[0].title, "a");
    }

    #[test]
    fn test_theme_selector_preview_on_navigation() {
        let mut app = App::new(Theme::Dark);
        app.open_theme_selector();
        assert_eq!(app.theme_selector_index, 1); // Dark 在列表里的位置

        app.theme_selector_next();
        assert_eq!(app.theme, Theme::Light); // 移动即预览

        app.close_theme_selector();
        assert_eq!(app.theme, Theme::Light); // 关闭不回退
    }

    #[test]
    fn test_empty_list_ops_are_safe() {
        let mut app = App::new(Theme::Dark);

        app.select_next();
        app.select_previous();
        app.toggle_selected();
        app.remove_selected();
        app.move_selected_up();
        app.move_selected_down();
        app.begin_drag(0);
        app.drag_to(3);

        assert!(app.store.is_empty());
        assert_eq!(app.selected, None);
    }
}
