//! Photo page - the birthday star

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{centered_popup, text_width};
use crate::components::paint;
use crate::model::animation::tables;
use crate::model::content::PhotoContent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders},
    Frame,
};
use std::time::Instant;

const BG: Color = Color::Rgb(253, 242, 248);
const TITLE: Color = Color::Rgb(219, 39, 119);
const TEXT: Color = Color::Rgb(55, 65, 81);
const HALO: [Color; 2] = [Color::Rgb(244, 114, 182), Color::Rgb(168, 85, 247)];

pub struct PhotoComponent {
    content: PhotoContent,
    mounted_at: Instant,
}

impl PhotoComponent {
    pub fn new(content: PhotoContent) -> Self {
        Self {
            content,
            mounted_at: Instant::now(),
        }
    }
}

impl Component for PhotoComponent {
    fn init(&mut self) -> Result<()> {
        self.mounted_at = Instant::now();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Char('o') | KeyCode::Enter => Some(Action::OpenMedia(self.content.image.clone())),
            _ => None,
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let elapsed = self.mounted_at.elapsed().as_secs_f32();
        paint::fill(frame, area, BG);

        let top = area.y + area.height.saturating_sub(14) / 2;
        paint::centered_text(
            frame,
            area,
            top,
            &self.content.title,
            Style::default().fg(TITLE).bg(BG).add_modifier(Modifier::BOLD),
        );

        // Photo card; the halo color rotates with the halo track
        let card_width = (text_width(&self.content.image) + 6).clamp(24, area.width.max(24));
        let mut card = centered_popup(area, card_width, 7);
        card.y = (top + 2).min(area.y + area.height.saturating_sub(1));
        card.height = card.height.min(area.y + area.height - card.y);

        let halo = tables::PHOTO_HALO.sample(elapsed);
        let halo_color = HALO[((halo.rotate / 180.0) as usize) % HALO.len()];
        let mut border = Style::default().fg(halo_color).bg(BG);
        if halo.is_emphasized() {
            border = border.add_modifier(Modifier::BOLD);
        }
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border)
                .style(Style::default().bg(Color::White)),
            card,
        );

        let inner_mid = card.y + card.height / 2;
        let label_style = Style::default().fg(TEXT).bg(Color::White);
        paint::centered_text(frame, card, inner_mid.saturating_sub(1), "📷", label_style);
        paint::centered_text(
            frame,
            card,
            inner_mid + 1,
            &self.content.image,
            label_style.add_modifier(Modifier::DIM),
        );

        // Crown top-right, gem bottom-left
        let crown = tables::PHOTO_CROWN.sample(elapsed);
        let crown_style = if crown.is_emphasized() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let right = (card.x + card.width).saturating_sub(2);
        paint::glyph(frame, area, right, card.y, "👑", crown_style.bg(BG));
        let gem = tables::PHOTO_GEM.sample(elapsed);
        let gem_y = (card.y + card.height).saturating_sub(1);
        let gem_style = if gem.is_emphasized() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        paint::glyph(frame, area, card.x, gem_y, "💎", gem_style.bg(BG));

        // Caption slides in after 0.6 s
        if elapsed >= 0.6 {
            let width = area.width.saturating_sub(8).min(60);
            for (i, line) in paint::wrap(&self.content.caption, width).iter().enumerate() {
                paint::centered_text(
                    frame,
                    area,
                    card.y + card.height + 1 + i as u16,
                    line,
                    Style::default().fg(TEXT).bg(BG),
                );
            }
            paint::centered_text(
                frame,
                area,
                card.y + card.height + 4,
                "o  open photo",
                Style::default().fg(Color::DarkGray).bg(BG),
            );
        }

        Ok(())
    }
}
