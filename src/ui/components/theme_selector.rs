//! 主题选择器组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::{Theme, ThemeColors};
use crate::ui::click_areas::{ClickAreas, DialogAction};

/// 渲染主题选择器弹窗
///
/// 上下移动时外层已经把预览主题应用到整个界面，
/// 这里只负责画列表本身。
pub fn render(
    frame: &mut Frame,
    selected_index: usize,
    colors: &ThemeColors,
    click_areas: &mut ClickAreas,
) {
    let area = frame.area();
    let themes = Theme::all();

    let popup_width = 30u16;
    let popup_height = (themes.len() as u16) + 4; // 标题 + 边框 + 内容 + 提示

    // 居中显示，终端比弹窗小时收进画面内（Clear 不会自己裁剪）
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(
        popup_x,
        popup_y,
        popup_width.min(area.width),
        popup_height.min(area.height),
    );

    // 清除背景
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Theme ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.highlight))
        .style(Style::default().bg(colors.bg));

    let inner_area = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let [list_area, _, hint_area] = Layout::vertical([
        Constraint::Length(themes.len() as u16),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner_area);

    // 主题列表，同时登记每行的点击区域
    let mut lines = Vec::with_capacity(themes.len());
    for (i, theme) in themes.iter().enumerate() {
        let is_selected = i == selected_index;
        let prefix = if is_selected { "❯ " } else { "  " };
        let style = if is_selected {
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", prefix, theme.label()),
            style,
        )));

        // 被裁掉的行不登记热区
        if (i as u16) < list_area.height {
            let row_rect = Rect::new(list_area.x, list_area.y + i as u16, list_area.width, 1);
            click_areas.dialog_items.push((row_rect, i));
        }
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Left), list_area);

    // 底部提示
    let hint = Paragraph::new(Line::from(vec![
        Span::styled("Enter", Style::default().fg(colors.highlight)),
        Span::styled(" apply  ", Style::default().fg(colors.muted)),
        Span::styled("Esc", Style::default().fg(colors.highlight)),
        Span::styled(" close", Style::default().fg(colors.muted)),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area);

    // 提示行左半当确认、右半当取消，方便鼠标点
    click_areas.dialog_area = Some(popup_area);
    if hint_area.height > 0 {
        let half = hint_area.width / 2;
        click_areas.dialog_buttons.push((
            Rect::new(hint_area.x, hint_area.y, half, 1),
            DialogAction::Confirm,
        ));
        click_areas.dialog_buttons.push((
            Rect::new(hint_area.x + half, hint_area.y, hint_area.width - half, 1),
            DialogAction::Cancel,
        ));
    }
}
