//! Celebration page - closing message and the confetti button

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{contains, offset_within, text_width};
use crate::components::paint;
use crate::model::animation::tables;
use crate::model::content::CelebrationContent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use std::time::Instant;

const BG: Color = Color::Rgb(254, 249, 231);
const TITLE: Color = Color::Rgb(236, 72, 153);
const HEADING: Color = Color::Rgb(147, 51, 234);
const TEXT: Color = Color::Rgb(55, 65, 81);
const BUTTON_COLORS: [Color; 3] = [
    Color::Rgb(250, 204, 21),
    Color::Rgb(236, 72, 153),
    Color::Rgb(168, 85, 247),
];

pub struct CelebrationComponent {
    content: CelebrationContent,
    mounted_at: Instant,
    celebrate_button: Rect,
}

impl CelebrationComponent {
    pub fn new(content: CelebrationContent) -> Self {
        Self {
            content,
            mounted_at: Instant::now(),
            celebrate_button: Rect::default(),
        }
    }

    /// Faint glyphs drifting behind the text
    fn draw_floating(&self, frame: &mut Frame, area: Rect, elapsed: f32) {
        for (i, glyph) in self.content.floating.iter().enumerate() {
            let motion = tables::FLOATING
                .lasting(4.0 + i as f32 * 0.5)
                .delayed(i as f32 * 0.3);
            let pose = motion.sample(elapsed);
            let x = area.x + (area.width as u32 * (20 + i as u32 * 20) / 100) as u16;
            let y = area.y + (area.height as u32 * (20 + (i as u32 % 2) * 40) / 100) as u16;
            let y = offset_within(y, pose.row_offset(), area.y, area.y + area.height.saturating_sub(1));
            paint::glyph(
                frame,
                area,
                x,
                y,
                glyph,
                Style::default().bg(BG).add_modifier(Modifier::DIM),
            );
        }
    }

    /// Bobbing emoji row centered at `y`
    fn draw_emoji_row(&self, frame: &mut Frame, area: Rect, y: u16, elapsed: f32) {
        let gap = 2u16;
        let total: u16 = self
            .content
            .emojis
            .iter()
            .map(|e| text_width(e) + gap)
            .sum::<u16>()
            .saturating_sub(gap);
        let mut x = area.x + area.width.saturating_sub(total) / 2;
        for (i, emoji) in self.content.emojis.iter().enumerate() {
            let motion = tables::EMOJI_ROW
                .lasting(2.0 + i as f32 * 0.1)
                .delayed(i as f32 * 0.1);
            let pose = motion.sample(elapsed);
            let row = offset_within(y, pose.row_offset().signum(), area.y, area.y + area.height.saturating_sub(1));
            paint::glyph(frame, area, x, row, emoji, Style::default().bg(BG));
            x += text_width(emoji) + gap;
        }
    }
}

impl Component for CelebrationComponent {
    fn init(&mut self) -> Result<()> {
        self.mounted_at = Instant::now();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('c') => {
                Some(Action::TriggerConfetti)
            }
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && contains(self.celebrate_button, mouse.column, mouse.row)
        {
            return Ok(Some(Action::TriggerConfetti));
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let elapsed = self.mounted_at.elapsed().as_secs_f32();
        paint::fill(frame, area, BG);
        self.draw_floating(frame, area, elapsed);

        let text_width_limit = area.width.saturating_sub(8).min(90);
        let paragraphs: Vec<Vec<String>> = self
            .content
            .paragraphs
            .iter()
            .map(|p| paint::wrap(p, text_width_limit))
            .collect();
        let body_height: u16 = paragraphs.iter().map(|p| p.len() as u16 + 1).sum();
        let block_height = 4 + body_height + 4;
        let mut y = area.y + area.height.saturating_sub(block_height) / 2;

        let title = tables::CELEBRATION_TITLE.sample(elapsed);
        let mut title_style = Style::default().fg(TITLE).bg(BG).add_modifier(Modifier::BOLD);
        if title.rotate > 0.0 {
            title_style = title_style.add_modifier(Modifier::ITALIC);
        }
        paint::centered_text(frame, area, y, &self.content.title, title_style);
        y += 2;

        if elapsed >= 0.3 {
            paint::centered_text(
                frame,
                area,
                y,
                &self.content.heading,
                Style::default().fg(HEADING).bg(BG).add_modifier(Modifier::BOLD),
            );
        }
        y += 2;

        let last = paragraphs.len().saturating_sub(1);
        for (i, lines) in paragraphs.iter().enumerate() {
            let mut style = Style::default().fg(TEXT).bg(BG);
            if i == last {
                style = style.add_modifier(Modifier::BOLD);
            }
            for line in lines {
                paint::centered_text(frame, area, y, line, style);
                y += 1;
            }
            y += 1;
        }

        // Button shadow pulses on a 2 s cycle; cycle its color instead
        let phase = ((elapsed / 2.0 * BUTTON_COLORS.len() as f32) as usize) % BUTTON_COLORS.len();
        self.celebrate_button = paint::button(
            frame,
            area,
            y,
            &self.content.button_label,
            Style::default()
                .fg(Color::White)
                .bg(BUTTON_COLORS[phase])
                .add_modifier(Modifier::BOLD),
        );
        y += 2;

        if elapsed >= 0.5 {
            self.draw_emoji_row(frame, area, y, elapsed);
        }

        Ok(())
    }
}
