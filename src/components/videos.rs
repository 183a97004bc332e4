//! Videos page - one card per clip with a selection cursor

use crate::action::Action;
use crate::component::Component;
use crate::components::layout::{contains, offset_within, text_width};
use crate::components::paint;
use crate::model::animation::tables;
use crate::model::content::VideosContent;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use std::time::Instant;

const BG: Color = Color::Rgb(239, 246, 255);
const TITLE: Color = Color::Rgb(124, 58, 237);
const TEXT: Color = Color::Rgb(55, 65, 81);
const CARD_BORDER: Color = Color::Rgb(196, 181, 253);
const SELECTED_BORDER: Color = Color::Rgb(37, 99, 235);

pub struct VideosComponent {
    content: VideosContent,
    mounted_at: Instant,
    pub selected: usize,
    /// Card areas from the last draw
    cards: Vec<Rect>,
}

impl VideosComponent {
    pub fn new(content: VideosContent) -> Self {
        Self {
            content,
            mounted_at: Instant::now(),
            selected: 0,
            cards: Vec::new(),
        }
    }

    pub fn selected_video(&self) -> Option<&str> {
        self.content.items.get(self.selected).map(String::as_str)
    }

    fn open_selected(&self) -> Option<Action> {
        self.selected_video()
            .map(|path| Action::OpenMedia(path.to_string()))
    }

    fn draw_card(&self, frame: &mut Frame, card: Rect, index: usize, path: &str, elapsed: f32) {
        let is_selected = index == self.selected;
        let border_color = if is_selected { SELECTED_BORDER } else { CARD_BORDER };
        let mut border_style = Style::default().fg(border_color).bg(BG);
        if is_selected {
            border_style = border_style.add_modifier(Modifier::BOLD);
        }

        let name = path.rsplit('/').next().unwrap_or(path);
        let body = vec![
            Line::from(""),
            Line::from(Span::styled("▶", Style::default().fg(Color::White))),
            Line::from(""),
            Line::from(Span::styled(
                name.to_string(),
                Style::default().fg(Color::Gray),
            )),
        ];
        let paragraph = Paragraph::new(body)
            .alignment(ratatui::layout::Alignment::Center)
            .style(Style::default().bg(Color::Black))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(border_style)
                    .title(format!(" Clip {} ", index + 1)),
            );
        frame.render_widget(paragraph, card);

        // Camera badge on the top-right corner, staggered per card
        let badge = tables::VIDEO_BADGE.delayed(index as f32 * 0.3).sample(elapsed);
        let x = offset_within(
            (card.x + card.width).saturating_sub(3),
            badge.col_offset().signum(),
            card.x,
            (card.x + card.width).saturating_sub(2),
        );
        paint::glyph(frame, card, x, card.y, "🎥", Style::default().bg(BG));
    }
}

impl Component for VideosComponent {
    fn init(&mut self) -> Result<()> {
        self.mounted_at = Instant::now();
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let action = match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::PrevVideo),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NextVideo),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected(),
            _ => None,
        };
        Ok(action)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        if let Some(index) = self
            .cards
            .iter()
            .position(|card| contains(*card, mouse.column, mouse.row))
        {
            self.selected = index;
            return Ok(self.open_selected());
        }
        Ok(None)
    }

    fn update(&mut self, action: Action) -> Result<Option<Action>> {
        let last = self.content.items.len().saturating_sub(1);
        match action {
            Action::PrevVideo => self.selected = self.selected.saturating_sub(1),
            Action::NextVideo => self.selected = (self.selected + 1).min(last),
            _ => {}
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let elapsed = self.mounted_at.elapsed().as_secs_f32();
        paint::fill(frame, area, BG);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(area);

        paint::centered_text(
            frame,
            chunks[0],
            chunks[0].y + 1,
            &self.content.title,
            Style::default().fg(TITLE).bg(BG).add_modifier(Modifier::BOLD),
        );

        self.cards.clear();
        let count = self.content.items.len();
        if count > 0 {
            // One column on narrow terminals, up to three side by side
            let columns = if area.width >= 90 {
                count.min(3)
            } else if area.width >= 60 {
                count.min(2)
            } else {
                1
            };
            let rows = count.div_ceil(columns);
            let row_areas = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
                .split(chunks[2]);

            for (row, row_area) in row_areas.iter().enumerate() {
                let col_areas = Layout::default()
                    .direction(Direction::Horizontal)
                    .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                    .split(*row_area);
                for (col, cell) in col_areas.iter().enumerate() {
                    let index = row * columns + col;
                    let Some(path) = self.content.items.get(index) else {
                        break;
                    };
                    let card = cell.inner(ratatui::layout::Margin {
                        horizontal: 2,
                        vertical: 0,
                    });
                    self.draw_card(frame, card, index, path, elapsed);
                    self.cards.push(card);
                }
            }
        }

        if elapsed >= 0.8 {
            let width = area.width.saturating_sub(8).min(80);
            for (i, line) in paint::wrap(&self.content.caption, width).iter().take(3).enumerate() {
                paint::centered_text(
                    frame,
                    chunks[3],
                    chunks[3].y + i as u16,
                    line,
                    Style::default().fg(TEXT).bg(BG),
                );
            }
        }

        let hint = "↑/↓ choose clip   o open";
        if text_width(hint) <= chunks[4].width {
            paint::centered_text(
                frame,
                chunks[4],
                chunks[4].y,
                hint,
                Style::default().fg(Color::DarkGray).bg(BG),
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_is_bounded() {
        let mut videos = VideosComponent::new(VideosContent::default());
        videos.update(Action::PrevVideo).unwrap();
        assert_eq!(videos.selected, 0);
        for _ in 0..5 {
            videos.update(Action::NextVideo).unwrap();
        }
        assert_eq!(videos.selected, 2);
        assert_eq!(videos.selected_video(), Some("/videos/vid3.mp4"));
    }

    #[test]
    fn test_open_selected_video() {
        let mut videos = VideosComponent::new(VideosContent::default());
        videos.update(Action::NextVideo).unwrap();
        let action = videos
            .handle_key_event(KeyEvent::from(KeyCode::Char('o')))
            .unwrap();
        assert_eq!(action, Some(Action::OpenMedia("/videos/vid2.mp4".to_string())));
    }

    #[test]
    fn test_no_videos_opens_nothing() {
        let mut videos = VideosComponent::new(VideosContent {
            items: Vec::new(),
            ..VideosContent::default()
        });
        videos.update(Action::NextVideo).unwrap();
        assert_eq!(videos.selected, 0);
        assert_eq!(videos.handle_key_event(KeyEvent::from(KeyCode::Enter)).unwrap(), None);
    }
}
