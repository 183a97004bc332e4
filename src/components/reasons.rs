//! Reasons page - "Why We Love You" carousel
//!
//! Owns the reason carousel. Advancing it asks the app to celebrate.

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, contains};
use crate::components::paint;
use crate::model::animation::tables;
use crate::model::carousel::ReasonCarousel;
use crate::model::content::{Reason, ReasonsContent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use std::time::Instant;

const BG: Color = Color::Rgb(255, 241, 242);
const TITLE: Color = Color::Rgb(225, 29, 72);
const TEXT: Color = Color::Rgb(55, 65, 81);

pub struct ReasonsComponent {
    content: ReasonsContent,
    pub carousel: ReasonCarousel,
    mounted_at: Instant,
    /// When the current reason was shown, for its entrance
    shown_at: Instant,
    next_button: Rect,
}

impl ReasonsComponent {
    pub fn new(content: ReasonsContent) -> Self {
        let carousel = ReasonCarousel::new(content.items.len());
        Self {
            content,
            carousel,
            mounted_at: Instant::now(),
            shown_at: Instant::now(),
            next_button: Rect::default(),
        }
    }

    pub fn current_reason(&self) -> Option<&Reason> {
        self.content.items.get(self.carousel.current())
    }
}

impl Component for ReasonsComponent {
    fn init(&mut self) -> Result<()> {
        self.mounted_at = Instant::now();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::NextReason),
            KeyCode::Char('o') => self
                .current_reason()
                .map(|reason| Action::OpenMedia(reason.image.clone())),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && contains(self.next_button, mouse.column, mouse.row)
        {
            return Ok(Some(Action::NextReason));
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        if action == Action::NextReason {
            self.carousel.next();
            self.shown_at = Instant::now();
            tracing::debug!(
                reason = self.carousel.current(),
                of = self.carousel.len(),
                "next reason"
            );
            return Ok(Some(Action::TriggerConfetti));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let elapsed = self.mounted_at.elapsed().as_secs_f32();
        paint::fill(frame, area, BG);

        let top = area.y + area.height.saturating_sub(16) / 2;
        paint::centered_text(
            frame,
            area,
            top,
            &self.content.title,
            Style::default().fg(TITLE).bg(BG).add_modifier(Modifier::BOLD),
        );

        let card_width = area.width.saturating_sub(8).clamp(20, 76);
        let mut card = centered_popup(area, card_width, 9);
        card.y = (top + 2).min(area.y + area.height.saturating_sub(1));
        card.height = card.height.min(area.y + area.height - card.y);

        let glow = tables::REASON_GLOW.sample(elapsed);
        let mut border = Style::default().fg(Color::Rgb(251, 207, 232)).bg(BG);
        if glow.scale > 1.01 {
            border = border.fg(Color::Rgb(244, 114, 182));
        }
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(Style::default().bg(Color::White)),
            card,
        );

        if let Some(reason) = self.current_reason() {
            let inner = card.inner(ratatui::layout::Margin {
                horizontal: 2,
                vertical: 1,
            });
            let body = Style::default().fg(TEXT).bg(Color::White);

            // A new reason is drawn dim for its first 200 ms
            let entering = self.shown_at.elapsed().as_secs_f32() < 0.2;
            let body = if entering {
                body.add_modifier(Modifier::DIM)
            } else {
                body.add_modifier(Modifier::BOLD)
            };

            let lines = paint::wrap(&reason.text, inner.width.saturating_sub(4));
            let first = inner.y + inner.height.saturating_sub(lines.len() as u16 + 2) / 2;
            let last_index = lines.len().saturating_sub(1);
            for (i, line) in lines.iter().enumerate() {
                let mut text = line.clone();
                if i == 0 {
                    text = format!("“{}", text);
                }
                if i == last_index {
                    text.push('”');
                }
                paint::centered_text(frame, inner, first + i as u16, &text, body);
            }
            paint::centered_text(
                frame,
                inner,
                first + lines.len() as u16 + 1,
                &format!("🖼  {}", reason.image),
                Style::default().fg(Color::DarkGray).bg(Color::White),
            );
        }

        let below = card.y + card.height + 1;
        self.next_button = paint::button(
            frame,
            area,
            below,
            "Next Reason 💖",
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(236, 72, 153))
                .add_modifier(Modifier::BOLD),
        );
        paint::centered_text(
            frame,
            area,
            below + 2,
            &self.carousel.position_label(),
            Style::default().fg(TEXT).bg(BG).add_modifier(Modifier::BOLD),
        );
        paint::centered_text(
            frame,
            area,
            below + 3,
            "o  open photo",
            Style::default().fg(Color::DarkGray).bg(BG),
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_reason_wraps_and_celebrates() {
        let mut reasons = ReasonsComponent::new(ReasonsContent::default());
        for _ in 0..11 {
            assert_eq!(
                reasons.update(Action::NextReason).unwrap(),
                Some(Action::TriggerConfetti)
            );
        }
        assert_eq!(
            reasons.current_reason().map(|r| r.text.as_str()),
            Some("You encourage us to try new things")
        );

        reasons.update(Action::NextReason).unwrap();
        assert_eq!(reasons.carousel.current(), 0);
    }

    #[test]
    fn test_open_current_photo() {
        let mut reasons = ReasonsComponent::new(ReasonsContent::default());
        reasons.update(Action::NextReason).unwrap();
        let action = reasons
            .handle_key_event(KeyEvent::from(KeyCode::Char('o')))
            .unwrap();
        assert_eq!(
            action,
            Some(Action::OpenMedia("/photos/IMG_7136.jpeg".to_string()))
        );
    }

    #[test]
    fn test_other_actions_ignored() {
        let mut reasons = ReasonsComponent::new(ReasonsContent::default());
        assert_eq!(reasons.update(Action::Tick(Instant::now())).unwrap(), None);
        assert_eq!(reasons.carousel.current(), 0);
    }
}
