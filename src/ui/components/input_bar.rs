//! 任务输入栏组件

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

/// 渲染任务输入栏
///
/// is_editing: 是否正在输入（显示光标）；
/// 空闲且无内容时显示占位文案。
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    is_editing: bool,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let mut spans = vec![Span::styled(" +", Style::default().fg(colors.highlight))];

    if input.is_empty() && !is_editing {
        spans.push(Span::styled(
            " Add a task",
            Style::default().fg(colors.muted),
        ));
    } else {
        spans.push(Span::styled(
            format!(" {}", input),
            Style::default().fg(colors.text),
        ));
    }

    // 只在输入模式显示闪烁光标
    if is_editing {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }

    let paragraph =
        Paragraph::new(Line::from(spans)).style(Style::default().bg(colors.bg_secondary));
    frame.render_widget(paragraph, area);

    // 点击整条输入栏进入输入模式
    click_areas.input_bar = Some(area);
}
