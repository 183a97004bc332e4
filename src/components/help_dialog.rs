//! Help dialog component
//!
//! Lists the keys for moving between pages and using each page.

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

const ACCENT: Color = Color::Rgb(236, 72, 153);

/// Help dialog showing all keyboard shortcuts
#[derive(Default)]
pub struct HelpDialog {
    pub scroll_offset: usize,
}

impl Component for HelpDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => Some(Action::CloseModal),
            KeyCode::Char('j') | KeyCode::Down => {
                self.scroll_offset = self.scroll_offset.saturating_add(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
                None
            }
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let margin = 4;
        let dialog_area = Rect::new(
            area.x + margin.min(area.width / 2),
            area.y + (margin / 2).min(area.height / 2),
            area.width.saturating_sub(margin * 2).min(60),
            area.height.saturating_sub(margin),
        );
        let dialog_area = Rect {
            x: area.x + area.width.saturating_sub(dialog_area.width) / 2,
            ..dialog_area
        };
        frame.render_widget(Clear, dialog_area);

        let content = build_help_content();
        let total = content.len();
        let visible_height = dialog_area.height.saturating_sub(2) as usize;

        let max_scroll = total.saturating_sub(visible_height);
        if self.scroll_offset > max_scroll {
            self.scroll_offset = max_scroll;
        }

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Keyboard Shortcuts ")
                    .title_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(ACCENT)),
            )
            .scroll((self.scroll_offset as u16, 0));

        frame.render_widget(paragraph, dialog_area);

        if total > visible_height {
            let mut scrollbar_state =
                ScrollbarState::new(max_scroll).position(self.scroll_offset);

            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(Some("↑"))
                    .end_symbol(Some("↓")),
                dialog_area.inner(ratatui::layout::Margin {
                    vertical: 1,
                    horizontal: 0,
                }),
                &mut scrollbar_state,
            );
        }

        Ok(())
    }
}

fn build_help_content() -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let add_section = |lines: &mut Vec<Line<'static>>, title: &str| {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {} ", title),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", "─".repeat(title.len() + 2)),
            Style::default().fg(Color::DarkGray),
        )));
    };

    let add_shortcut = |lines: &mut Vec<Line<'static>>, key: &str, description: &str| {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:14}", key),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(description.to_string(), Style::default().fg(Color::White)),
        ]));
    };

    add_section(&mut lines, "Pages");
    add_shortcut(&mut lines, "→ / l", "Next page");
    add_shortcut(&mut lines, "← / h", "Previous page");
    add_shortcut(&mut lines, "Home / g", "Back to the welcome page");
    add_shortcut(&mut lines, "1 - 4", "Jump to a page");
    add_shortcut(&mut lines, "click", "Buttons and page dots");

    add_section(&mut lines, "Welcome");
    add_shortcut(&mut lines, "Enter / Space", "Start the celebration");

    add_section(&mut lines, "Photo");
    add_shortcut(&mut lines, "o / Enter", "Open the photo");

    add_section(&mut lines, "Videos");
    add_shortcut(&mut lines, "j / ↓", "Select next clip");
    add_shortcut(&mut lines, "k / ↑", "Select previous clip");
    add_shortcut(&mut lines, "o / Enter", "Play the selected clip");

    add_section(&mut lines, "Reasons");
    add_shortcut(&mut lines, "Enter / Space", "Next reason");
    add_shortcut(&mut lines, "o", "Open the reason's photo");

    add_section(&mut lines, "Celebration");
    add_shortcut(&mut lines, "c / Enter", "Celebrate!");

    add_section(&mut lines, "General");
    add_shortcut(&mut lines, "?", "Show this help");
    add_shortcut(&mut lines, "q / Esc", "Quit");
    add_shortcut(&mut lines, "Ctrl+c", "Quit immediately");

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press q, Esc, or ? to close",
        Style::default().fg(Color::DarkGray),
    )));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_close_keys() {
        let mut help = HelpDialog::default();
        for code in [KeyCode::Esc, KeyCode::Char('q'), KeyCode::Char('?')] {
            assert_eq!(
                help.handle_key_event(KeyEvent::from(code)).unwrap(),
                Some(Action::CloseModal)
            );
        }
    }

    #[test]
    fn test_scroll_is_clamped_on_draw() {
        let mut help = HelpDialog::default();
        for _ in 0..200 {
            help.handle_key_event(KeyEvent::from(KeyCode::Down)).unwrap();
        }
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal
            .draw(|frame| help.draw(frame, frame.area()).unwrap())
            .unwrap();
        let visible = 20 - 4 - 2;
        assert_eq!(help.scroll_offset, build_help_content().len() - visible);
    }
}
