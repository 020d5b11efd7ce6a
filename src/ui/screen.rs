use ratatui::{
    layout::Constraint,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use crate::app::App;

use super::components::{
    empty_state, footer, header, help_panel, input_bar, task_list, theme_selector, toast,
};

/// 渲染主屏幕
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let colors = app.colors;

    // 填充整个背景
    Block::default()
        .style(Style::default().bg(colors.bg))
        .render(area, frame.buffer_mut());

    let [header_area, input_area, list_area, footer_area] = ratatui::layout::Layout::vertical([
        Constraint::Length(header::HEADER_HEIGHT),
        Constraint::Length(1), // 输入栏
        Constraint::Fill(1),
        Constraint::Length(3),
    ])
    .areas(area);

    header::render(
        frame,
        header_area,
        app.store.done_count(),
        app.store.len(),
        &colors,
    );

    input_bar::render(
        frame,
        input_area,
        &app.input,
        app.input_mode,
        &colors,
        &mut app.click_areas,
    );

    // 渲染列表或空状态
    if app.store.is_empty() {
        empty_state::render(frame, list_area, &colors);
    } else {
        task_list::render(
            frame,
            list_area,
            app.store.tasks(),
            app.selected,
            &colors,
            &mut app.click_areas,
        );
    }

    footer::render(
        frame,
        footer_area,
        app.input_mode,
        !app.store.is_empty(),
        &colors,
    );

    // 渲染 Toast（如果有）
    if let Some(ref t) = app.toast {
        if !t.is_expired() {
            toast::render(frame, &t.message, &colors);
        }
    }

    // 渲染主题选择器（如果打开）
    if app.show_theme_selector {
        theme_selector::render(
            frame,
            app.theme_selector_index,
            &colors,
            &mut app.click_areas,
        );
    }

    // 渲染帮助面板（如果打开）
    if app.show_help {
        help_panel::render(frame, &colors);
    }
}
