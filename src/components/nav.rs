//! Navigation chrome: Back / Next bar and page indicator dots
//!
//! Hidden on the welcome page. Also owns the page keys that work on every
//! other page.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{contains, text_width};
use crate::model::slides::SlideController;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const ACCENT: Color = Color::Rgb(236, 72, 153);
const BACK_LABEL: &str = "← Back";
const NEXT_LABEL: &str = "Next →";

#[derive(Default)]
pub struct NavBarComponent {
    current: usize,
    page_count: usize,
    on_last_page: bool,
    back_button: Rect,
    next_button: Rect,
    /// One rect per dot, for pages 1..page_count
    dots: Vec<Rect>,
}

impl NavBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mirror the slide position before handling input or drawing
    pub fn sync(&mut self, slides: &SlideController) {
        self.current = slides.current();
        self.page_count = slides.page_count();
        self.on_last_page = slides.is_last();
    }

    /// Counter text; the welcome page is not counted
    pub fn counter_label(&self) -> String {
        format!("{} of {}", self.current, self.page_count.saturating_sub(1))
    }

    fn button_style(enabled: bool) -> Style {
        if enabled {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        }
    }

    /// Draw the indicator dots right-aligned in a one-row area
    pub fn draw_indicators(&mut self, frame: &mut Frame, area: Rect) {
        self.dots.clear();
        let count = self.page_count.saturating_sub(1);
        let needed = (count as u16).saturating_mul(2);
        if count == 0 || area.height == 0 || needed > area.width {
            return;
        }

        let mut x = area.x + area.width - needed;
        let mut spans = Vec::with_capacity(count);
        for page in 1..=count {
            let active = page == self.current;
            let (symbol, style) = if active {
                ("●", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD))
            } else {
                ("○", Style::default().fg(Color::Gray))
            };
            spans.push(Span::styled(format!("{} ", symbol), style));
            self.dots.push(Rect::new(x, area.y, 1, 1));
            x += 2;
        }
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x + area.width - needed, area.y, needed, 1),
        );
    }
}

impl Component for NavBarComponent {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
            KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
            KeyCode::Char(c) => c
                .to_digit(10)
                .map(|d| d as usize)
                .filter(|&d| d >= 1 && d < self.page_count)
                .map(Action::JumpToPage),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if contains(self.back_button, mouse.column, mouse.row) {
            return Ok(Some(Action::PrevPage));
        }
        if contains(self.next_button, mouse.column, mouse.row) {
            return Ok(Some(Action::NextPage));
        }
        let dot = self
            .dots
            .iter()
            .position(|dot| contains(*dot, mouse.column, mouse.row));
        Ok(dot.map(|i| Action::JumpToPage(i + 1)))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::Rgb(251, 207, 232))),
            area,
        );
        if area.height < 2 {
            // No button row, so nothing is clickable
            self.back_button = Rect::default();
            self.next_button = Rect::default();
            return Ok(());
        }
        let row = area.y + 1;
        let pad = 2;

        let counter = Paragraph::new(Span::styled(
            self.counter_label(),
            Style::default().fg(Color::Gray),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(counter, Rect::new(area.x, row, area.width, 1));

        let back_width = text_width(BACK_LABEL).min(area.width);
        self.back_button = Rect::new(area.x + pad.min(area.width - back_width), row, back_width, 1);
        frame.render_widget(
            // Back always works; from the first content page it returns to welcome
            Paragraph::new(Span::styled(BACK_LABEL, Self::button_style(true))),
            self.back_button,
        );

        let next_width = text_width(NEXT_LABEL).min(area.width);
        let next_x = (area.x + area.width).saturating_sub(next_width + pad).max(area.x);
        self.next_button = Rect::new(next_x, row, next_width, 1);
        frame.render_widget(
            Paragraph::new(Span::styled(
                NEXT_LABEL,
                Self::button_style(!self.on_last_page),
            )),
            self.next_button,
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn nav_at(current: usize) -> NavBarComponent {
        let mut slides = SlideController::new(5);
        slides.jump_to(current);
        let mut nav = NavBarComponent::new();
        nav.sync(&slides);
        nav
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_counter_skips_welcome() {
        assert_eq!(nav_at(1).counter_label(), "1 of 4");
        assert_eq!(nav_at(4).counter_label(), "4 of 4");
    }

    #[test]
    fn test_page_keys() {
        let mut nav = nav_at(2);
        let key = |c: KeyCode| KeyEvent::from(c);
        assert_eq!(nav.handle_key_event(key(KeyCode::Left)).unwrap(), Some(Action::PrevPage));
        assert_eq!(nav.handle_key_event(key(KeyCode::Char('l'))).unwrap(), Some(Action::NextPage));
        assert_eq!(nav.handle_key_event(key(KeyCode::Home)).unwrap(), Some(Action::FirstPage));
        assert_eq!(
            nav.handle_key_event(key(KeyCode::Char('4'))).unwrap(),
            Some(Action::JumpToPage(4))
        );
        // Digits past the last page and zero are not page keys
        assert_eq!(nav.handle_key_event(key(KeyCode::Char('5'))).unwrap(), None);
        assert_eq!(nav.handle_key_event(key(KeyCode::Char('0'))).unwrap(), None);
    }

    #[test]
    fn test_clicks_hit_buttons_and_dots() {
        let mut nav = nav_at(1);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| {
                nav.draw_indicators(frame, Rect::new(0, 0, 40, 1));
                nav.draw(frame, Rect::new(0, 1, 40, 3)).unwrap();
            })
            .unwrap();

        assert_eq!(nav.handle_mouse_event(click(3, 2)).unwrap(), Some(Action::PrevPage));
        assert_eq!(nav.handle_mouse_event(click(34, 2)).unwrap(), Some(Action::NextPage));
        // Dots start at column 32 and are two columns apart
        assert_eq!(nav.handle_mouse_event(click(32, 0)).unwrap(), Some(Action::JumpToPage(1)));
        assert_eq!(nav.handle_mouse_event(click(38, 0)).unwrap(), Some(Action::JumpToPage(4)));
        assert_eq!(nav.handle_mouse_event(click(20, 0)).unwrap(), None);
    }

    #[test]
    fn test_back_enabled_on_first_content_page() {
        let mut nav = nav_at(1);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| nav.draw(frame, Rect::new(0, 1, 40, 3)).unwrap())
            .unwrap();

        let buffer = terminal.backend().buffer();
        let back = &buffer.content[buffer.index_of(2, 2)];
        assert_eq!(back.fg, ACCENT);
        assert!(!back.modifier.contains(Modifier::DIM));
        assert_eq!(nav.handle_mouse_event(click(3, 2)).unwrap(), Some(Action::PrevPage));
    }

    #[test]
    fn test_short_bar_drops_button_targets() {
        let mut nav = nav_at(2);
        let mut terminal =
            ratatui::Terminal::new(ratatui::backend::TestBackend::new(40, 4)).unwrap();
        terminal
            .draw(|frame| nav.draw(frame, Rect::new(0, 1, 40, 3)).unwrap())
            .unwrap();
        assert_eq!(nav.handle_mouse_event(click(3, 2)).unwrap(), Some(Action::PrevPage));

        // Shrunk to the border row only: the old button cells no longer respond
        terminal
            .draw(|frame| nav.draw(frame, Rect::new(0, 1, 40, 1)).unwrap())
            .unwrap();
        assert_eq!(nav.handle_mouse_event(click(3, 2)).unwrap(), None);
        assert_eq!(nav.handle_mouse_event(click(34, 2)).unwrap(), None);
    }
}
