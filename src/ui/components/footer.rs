use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::ThemeColors;

/// 渲染底部快捷键提示栏
pub fn render(
    frame: &mut Frame,
    area: Rect,
    is_editing: bool,
    has_items: bool,
    colors: &ThemeColors,
) {
    let shortcuts = get_shortcuts(is_editing, has_items);

    let mut spans = Vec::new();
    spans.push(Span::raw("  "));

    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        spans.push(Span::styled(
            *key,
            Style::default()
                .fg(colors.highlight)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(colors.muted),
        ));

        if i < shortcuts.len() - 1 {
            spans.push(Span::raw("   "));
        }
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border));

    let paragraph = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(paragraph, area);
}

fn get_shortcuts(is_editing: bool, has_items: bool) -> Vec<(&'static str, &'static str)> {
    if is_editing {
        return vec![("Enter", "add"), ("Esc", "done")];
    }
    if has_items {
        vec![
            ("a", "add"),
            ("Space", "toggle"),
            ("x", "delete"),
            ("J/K", "move"),
            ("t", "theme"),
            ("?", "help"),
            ("q", "quit"),
        ]
    } else {
        vec![("a", "add"), ("t", "theme"), ("?", "help"), ("q", "quit")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_editing_shortcuts_minimal() {
        let shortcuts = get_shortcuts(true, true);
        assert_eq!(shortcuts, vec![("Enter", "add"), ("Esc", "done")]);
    }

    #[test]
    fn test_empty_list_hides_item_actions() {
        let shortcuts = get_shortcuts(false, false);
        assert!(!shortcuts.iter().any(|(k, _)| *k == "x"));
        assert!(shortcuts.iter().any(|(k, _)| *k == "a"));
    }
}
