use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::App;
use crate::ui::click_areas::{contains, DialogAction};

/// 处理事件，返回 true 表示应该继续运行
pub fn handle_events(app: &mut App) -> io::Result<bool> {
    // 更新 Toast 状态
    app.update_toast();

    // 检查系统主题变化（用于 Auto 模式）
    app.check_system_theme();

    // 轮询事件（100ms 超时）
    if event::poll(Duration::from_millis(100))? {
        match event::read()? {
            Event::Key(key) => {
                // 只处理按下事件
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => {}
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

    // 输入模式
    if app.input_mode {
        handle_input_key(app, key);
        return;
    }

    handle_list_key(app, key);
}

/// 处理列表模式的键盘事件
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

        // 切换完成状态
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle_selected();
        }

        // 删除选中任务
        KeyCode::Char('x') => {
            app.remove_selected();
        }

        // 调整顺序（大写 = Shift）
        KeyCode::Char('J') => {
            app.move_selected_down();
        }
        KeyCode::Char('K') => {
            app.move_selected_up();
        }

        // 进入输入模式
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.start_input();
        }

        // Theme 选择器
        KeyCode::Char('T') | KeyCode::Char('t') => {
            app.open_theme_selector();
        }

        // 帮助
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        _ => {}
    }
}

/// 处理输入模式的键盘事件
fn handle_input_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // 提交为新任务（成功后留在输入模式继续录）
        KeyCode::Enter => {
            app.submit_input();
        }

        // 退出输入模式
        KeyCode::Esc => {
            app.stop_input();
        }

        // 删除字符
        KeyCode::Backspace => {
            app.input_backspace();
        }

        // 输入字符
        KeyCode::Char(c) => {
            app.input_char(c);
        }

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

fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            handle_mouse_down(app, mouse.column, mouse.row);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            handle_mouse_drag(app, mouse.row);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.end_drag();
        }
        MouseEventKind::ScrollDown => {
            handle_mouse_scroll(app, mouse.column, mouse.row, true);
        }
        MouseEventKind::ScrollUp => {
            handle_mouse_scroll(app, mouse.column, mouse.row, false);
        }
        _ => {}
    }
}

fn handle_mouse_down(app: &mut App, col: u16, row: u16) {
    // 帮助面板打开时，点击任意处关闭
    if app.show_help {
        app.show_help = false;
        return;
    }

    // 热区在渲染时登记，这里拷一份再逐个比对
    let areas = app.click_areas.clone();

    // 主题选择器打开时只响应弹窗相关的点击
    if app.show_theme_selector {
        for (rect, index) in &areas.dialog_items {
            if contains(rect, col, row) {
                app.theme_selector_set(*index);
                return;
            }
        }
        for (rect, action) in &areas.dialog_buttons {
            if contains(rect, col, row) {
                match action {
                    DialogAction::Confirm => app.theme_selector_confirm(),
                    DialogAction::Cancel => app.close_theme_selector(),
                }
                return;
            }
        }
        // 点在弹窗外关闭
        if let Some(rect) = areas.dialog_area {
            if !contains(&rect, col, row) {
                app.close_theme_selector();
            }
        }
        return;
    }

    // 输入栏
    if let Some(rect) = areas.input_bar {
        if contains(&rect, col, row) {
            app.start_input();
            return;
        }
    }

    // 勾选框
    for (rect, id) in &areas.checkbox_cells {
        if contains(rect, col, row) {
            app.toggle_at(*id);
            return;
        }
    }

    // 删除按钮
    for (rect, id) in &areas.delete_cells {
        if contains(rect, col, row) {
            app.remove_at(*id);
            return;
        }
    }

    // 行的其余部分：选中并准备拖拽
    for (rect, index) in &areas.task_rows {
        if contains(rect, col, row) {
            app.begin_drag(*index);
            return;
        }
    }
}

fn handle_mouse_drag(app: &mut App, row: u16) {
    if app.dragging.is_none() {
        return;
    }
    if let Some(index) = drag_target_at(app, row) {
        app.drag_to(index);
    }
}

/// 把拖拽指针的行号换算成列表索引
///
/// 拖出列表上下边界时夹到最近的一端，左右偏移不影响。
fn drag_target_at(app: &App, row: u16) -> Option<usize> {
    let rows = &app.click_areas.task_rows;
    let (first_rect, first_index) = rows.first()?;
    let (last_rect, last_index) = rows.last()?;

    if row < first_rect.y {
        return Some(*first_index);
    }
    if row > last_rect.y {
        return Some(*last_index);
    }
    rows.iter()
        .find(|(rect, _)| rect.y == row)
        .map(|(_, index)| *index)
}

fn handle_mouse_scroll(app: &mut App, col: u16, row: u16, down: bool) {
    // 拖拽过程中滚轮不动选中，按住的行就是要挪的行
    if app.dragging.is_some() {
        return;
    }

    // 主题选择器打开时滚轮切换主题
    if app.show_theme_selector {
        if down {
            app.theme_selector_next();
        } else {
            app.theme_selector_prev();
        }
        return;
    }
    if app.show_help {
        return;
    }

    // 列表区域内滚轮移动选中
    let Some(list) = app.click_areas.list_area else {
        return;
    };
    if contains(&list, col, row) {
        if down {
            app.select_next();
        } else {
            app.select_previous();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::layout::Rect;

    use crate::theme::Theme;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app_with(titles: &[&str]) -> App {
        let mut app = App::new(Theme::Dark);
        for title in titles {
            app.store.add(title);
        }
        app.ensure_selection();
        app
    }

    #[test]
    fn test_q_quits_in_list_mode() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_input_mode_captures_q() {
        let mut app = app_with(&[]);
        handle_key(&mut app, key(KeyCode::Char('a')));
        assert!(app.input_mode);

        // 输入模式里 q 是普通字符
        handle_key(&mut app, key(KeyCode::Char('q')));
        assert!(!app.should_quit);
        assert_eq!(app.input, "q");
    }

    #[test]
    fn test_enter_submits_then_esc_leaves() {
        let mut app = app_with(&[]);
        handle_key(&mut app, key(KeyCode::Char('i')));
        for c in "Buy milk".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.store.len(), 1);
        assert!(app.input_mode);

        handle_key(&mut app, key(KeyCode::Esc));
        assert!(!app.input_mode);
    }

    #[test]
    fn test_space_toggles_and_x_removes() {
        let mut app = app_with(&["a"]);

        handle_key(&mut app, key(KeyCode::Char(' ')));
        assert!(app.store.tasks()[0].done);

        handle_key(&mut app, key(KeyCode::Char('x')));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_shifted_j_moves_instead_of_selecting() {
        let mut app = app_with(&["a", "b"]);
        app.selected = Some(0);

        handle_key(&mut app, KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT));
        assert_eq!(app.store.tasks()[1].title, "a");
        assert_eq!(app.selected, Some(1));
    }

    #[test]
    fn test_theme_selector_opens_on_either_case() {
        let mut app = app_with(&["a"]);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT),
        );
        assert!(app.show_theme_selector);

        let mut app = app_with(&["a"]);
        handle_key(&mut app, key(KeyCode::Char('t')));
        assert!(app.show_theme_selector);
    }

    #[test]
    fn test_theme_selector_takes_key_priority() {
        let mut app = app_with(&["a", "b"]);
        app.selected = Some(0);
        app.open_theme_selector();

        handle_key(&mut app, key(KeyCode::Char('j')));
        assert_eq!(app.selected, Some(0)); // 列表选中没动
        assert_ne!(app.theme, Theme::Dark); // 选择器在动
    }

    #[test]
    fn test_click_checkbox_toggles_by_id() {
        let mut app = app_with(&["a", "b"]);
        let second = app.store.tasks()[1].id;
        app.click_areas
            .checkbox_cells
            .push((Rect::new(3, 5, 4, 1), second));

        handle_mouse_down(&mut app, 4, 5);
        assert!(app.store.tasks()[1].done);
        assert!(!app.store.tasks()[0].done);
    }

    #[test]
    fn test_drag_target_clamps_to_edges() {
        let mut app = app_with(&["a", "b", "c"]);
        for i in 0..3 {
            app.click_areas
                .task_rows
                .push((Rect::new(0, 4 + i as u16, 20, 1), i));
        }

        assert_eq!(drag_target_at(&app, 0), Some(0)); // 界外上方
        assert_eq!(drag_target_at(&app, 5), Some(1)); // 命中第二行
        assert_eq!(drag_target_at(&app, 50), Some(2)); // 界外下方
    }

    #[test]
    fn test_scroll_during_drag_does_not_retarget() {
        let mut app = app_with(&["a", "b", "c"]);
        for i in 0..3 {
            app.click_areas
                .task_rows
                .push((Rect::new(0, 4 + i as u16, 20, 1), i));
        }
        app.click_areas.list_area = Some(Rect::new(0, 4, 20, 3));

        // 按住第三行，中途来一格滚轮，再拖到顶上
        handle_mouse_down(&mut app, 5, 6);
        assert_eq!(app.selected, Some(2));

        handle_mouse_scroll(&mut app, 5, 5, false);
        assert_eq!(app.selected, Some(2)); // 滚轮被忽略

        handle_mouse_drag(&mut app, 0);
        let titles: Vec<&str> = app.store.tasks().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "a", "b"]); // 挪的是按住的 "c"
        assert_eq!(app.selected, Some(0));
    }
}
