use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::model::Task;
use crate::theme::ThemeColors;
use crate::ui::click_areas::ClickAreas;

use super::truncate;

// 列宽（和下面的 widths 保持一致，点击区域按它换算坐标）
const SELECTOR_WIDTH: u16 = 2;
const CHECKBOX_WIDTH: u16 = 4;
const DELETE_WIDTH: u16 = 3;
const COLUMN_SPACING: u16 = 1;

/// 表头 1 行 + 下边距 1 行，数据行从这之后开始
const ROWS_TOP_OFFSET: u16 = 2;

/// 渲染任务列表
pub fn render(
    frame: &mut Frame,
    area: Rect,
    tasks: &[Task],
    selected_index: Option<usize>,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(colors.border));
    let inner = block.inner(area);

    // 表头
    let header = Row::new(vec![
        Cell::from(""), // 选择指示器
        Cell::from(""), // 勾选框
        Cell::from("TASK"),
        Cell::from(""), // 删除按钮
    ])
    .style(Style::default().fg(colors.muted))
    .height(1)
    .bottom_margin(1);

    // 标题列的可用宽度，超长标题截断加省略号
    let title_width = inner
        .width
        .saturating_sub(SELECTOR_WIDTH + CHECKBOX_WIDTH + DELETE_WIDTH + 3 * COLUMN_SPACING)
        as usize;

    // 数据行
    let rows: Vec<Row> = tasks
        .iter()
        .enumerate()
        .map(|(i, task)| {
            let is_selected = selected_index == Some(i);
            let selector = if is_selected { "❯" } else { " " };

            let (checkbox, checkbox_style) = if task.done {
                ("[x]", Style::default().fg(colors.done))
            } else {
                ("[ ]", Style::default().fg(colors.muted))
            };

            let title_style = if task.done {
                Style::default()
                    .fg(colors.muted)
                    .add_modifier(Modifier::CROSSED_OUT)
            } else {
                Style::default().fg(colors.text)
            };

            Row::new(vec![
                Cell::from(selector).style(Style::default().fg(colors.highlight)),
                Cell::from(checkbox).style(checkbox_style),
                Cell::from(truncate(&task.title, title_width)).style(title_style),
                Cell::from("✕").style(Style::default().fg(colors.danger)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(SELECTOR_WIDTH),
        Constraint::Length(CHECKBOX_WIDTH),
        Constraint::Fill(1),
        Constraint::Length(DELETE_WIDTH),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(block)
        .row_highlight_style(
            Style::default()
                .bg(colors.bg_secondary)
                .add_modifier(Modifier::BOLD),
        );

    let mut table_state = TableState::default();
    table_state.select(selected_index);
    frame.render_stateful_widget(table, area, &mut table_state);

    // 渲染后 offset 才是实际滚动位置，按它登记可见行的点击区域
    register_click_areas(inner, tasks, table_state.offset(), click_areas);
    click_areas.list_area = Some(area);
}

fn register_click_areas(
    inner: Rect,
    tasks: &[Task],
    offset: usize,
    click_areas: &mut ClickAreas,
) {
    if inner.height <= ROWS_TOP_OFFSET {
        return;
    }
    let rows_top = inner.y + ROWS_TOP_OFFSET;
    let visible = (inner.height - ROWS_TOP_OFFSET) as usize;

    let checkbox_x = inner.x + SELECTOR_WIDTH + COLUMN_SPACING;
    let delete_x = inner.x + inner.width.saturating_sub(DELETE_WIDTH);

    for (screen_row, index) in (offset..tasks.len()).take(visible).enumerate() {
        let y = rows_top + screen_row as u16;
        let id = tasks[index].id;

        click_areas
            .task_rows
            .push((Rect::new(inner.x, y, inner.width, 1), index));
        click_areas
            .checkbox_cells
            .push((Rect::new(checkbox_x, y, CHECKBOX_WIDTH, 1), id));
        click_areas
            .delete_cells
            .push((Rect::new(delete_x, y, DELETE_WIDTH, 1), id));
    }
}
