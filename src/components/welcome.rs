//! Welcome page
//!
//! Animated title card with a start button. No navigation chrome is shown
//! here; the only way on is the start button.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{contains, offset_within};
use crate::components::paint;
use crate::model::animation::{tables, Motion};
use crate::model::content::WelcomeContent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use std::time::Instant;

const BG: Color = Color::Rgb(232, 121, 170);
const FG: Color = Color::White;

/// Corner decorations: glyph, motion, and which corner
const DECORATIONS: [(&str, Motion, Corner); 4] = [
    ("✨", tables::DECORATION_TOP_LEFT, Corner::TopLeft),
    ("💖", tables::DECORATION_TOP_RIGHT, Corner::TopRight),
    ("🎂", tables::DECORATION_BOTTOM_LEFT, Corner::BottomLeft),
    ("🎈", tables::DECORATION_BOTTOM_RIGHT, Corner::BottomRight),
];

#[derive(Debug, Clone, Copy)]
enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

pub struct WelcomeComponent {
    content: WelcomeContent,
    mounted_at: Instant,
    /// Start button area from the last draw
    start_button: Rect,
}

impl WelcomeComponent {
    pub fn new(content: WelcomeContent) -> Self {
        Self {
            content,
            mounted_at: Instant::now(),
            start_button: Rect::default(),
        }
    }

    fn elapsed(&self) -> f32 {
        self.mounted_at.elapsed().as_secs_f32()
    }

    fn draw_decorations(&self, frame: &mut Frame, area: Rect, elapsed: f32) {
        if area.width < 12 || area.height < 8 {
            return;
        }
        let right = area.x + area.width - 6;
        let bottom = area.y + area.height - 3;
        for (glyph, motion, corner) in DECORATIONS {
            let (x, y) = match corner {
                Corner::TopLeft => (area.x + 4, area.y + 2),
                Corner::TopRight => (right, area.y + 3),
                Corner::BottomLeft => (area.x + 4, bottom - 1),
                Corner::BottomRight => (right, bottom),
            };
            let pose = motion.sample(elapsed);
            let x = offset_within(x, pose.col_offset(), area.x, area.x + area.width - 2);
            let y = offset_within(y, pose.row_offset(), area.y, area.y + area.height - 1);
            let mut style = Style::default().bg(BG);
            if pose.is_emphasized() {
                style = style.add_modifier(Modifier::BOLD);
            }
            paint::glyph(frame, area, x, y, glyph, style);
        }
    }
}

impl Component for WelcomeComponent {
    fn init(&mut self) -> Result<()> {
        self.mounted_at = Instant::now();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Right | KeyCode::Char('l') => {
                Some(Action::StartCelebration)
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && contains(self.start_button, mouse.column, mouse.row)
        {
            return Ok(Some(Action::StartCelebration));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let elapsed = self.elapsed();
        paint::fill(frame, area, BG);
        self.draw_decorations(frame, area, elapsed);

        let base = Style::default().fg(FG).bg(BG);
        let top = area.y + area.height.saturating_sub(9) / 2;

        let main = tables::TITLE_MAIN.sample(elapsed);
        let headline_y = offset_within(top, main.row_offset(), area.y, top + 1);
        paint::centered_text(
            frame,
            area,
            headline_y,
            &self.content.headline,
            base.add_modifier(Modifier::BOLD),
        );

        let mut sub_style = base.add_modifier(Modifier::BOLD);
        if tables::TITLE_SUB.sample(elapsed).scale > 1.01 {
            sub_style = sub_style.add_modifier(Modifier::ITALIC);
        }
        paint::centered_text(frame, area, top + 2, &self.content.subheadline, sub_style);

        // Tagline fades in after a second
        if elapsed >= 1.0 {
            paint::centered_text(frame, area, top + 4, &self.content.tagline, base);
        }

        // Start button pops in after 1.5 s
        self.start_button = if elapsed >= 1.5 {
            paint::button(
                frame,
                area,
                top + 7,
                &self.content.start_label,
                Style::default()
                    .fg(Color::Rgb(147, 51, 234))
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Rect::default()
        };

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_enter_starts_celebration() {
        let mut welcome = WelcomeComponent::new(WelcomeContent::default());
        let action = welcome
            .handle_key_event(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE))
            .unwrap();
        assert_eq!(action, Some(Action::StartCelebration));
    }

    #[test]
    fn test_click_outside_button_does_nothing() {
        let mut welcome = WelcomeComponent::new(WelcomeContent::default());
        welcome.start_button = Rect::new(30, 10, 20, 1);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 5,
            row: 5,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(welcome.handle_mouse_event(click).unwrap(), None);

        let click = MouseEvent { column: 35, row: 10, ..click };
        assert_eq!(
            welcome.handle_mouse_event(click).unwrap(),
            Some(Action::StartCelebration)
        );
    }
}
