//! Confetti overlay drawn over the active page

use crate::components::paint;
use crate::model::confetti::ConfettiBurst;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};
use std::time::Instant;

pub struct ConfettiOverlay {
    piece_count: usize,
    burst: ConfettiBurst,
    /// Start of the burst currently laid out
    started_at: Option<Instant>,
}

impl ConfettiOverlay {
    pub fn new(piece_count: usize) -> Self {
        Self {
            piece_count,
            burst: ConfettiBurst::default(),
            started_at: None,
        }
    }

    pub fn burst(&self) -> &ConfettiBurst {
        &self.burst
    }

    /// Lay out a fresh burst when the overlay was triggered again
    ///
    /// Returns true when a new burst was generated.
    pub fn sync<R: Rng + ?Sized>(&mut self, triggered_at: Option<Instant>, rng: &mut R) -> bool {
        match triggered_at {
            Some(start) if self.started_at != Some(start) => {
                self.burst = ConfettiBurst::generate(self.piece_count, rng);
                self.started_at = Some(start);
                tracing::debug!(pieces = self.burst.len(), "new confetti burst");
                true
            }
            Some(_) => false,
            None => {
                self.started_at = None;
                false
            }
        }
    }

    /// Draw the burst as it looks at `now`
    pub fn draw_at(&self, frame: &mut Frame, area: Rect, now: Instant) {
        let Some(start) = self.started_at else {
            return;
        };
        if self.burst.is_empty() {
            return;
        }
        let elapsed = now.saturating_duration_since(start).as_secs_f32();
        for piece in &self.burst.pieces {
            let Some((col, row)) = piece.cell(elapsed, area.width, area.height) else {
                continue;
            };
            let (r, g, b) = piece.color;
            let mut style = Style::default().fg(Color::Rgb(r, g, b));
            if piece.is_flipped(elapsed) {
                style = style.add_modifier(Modifier::BOLD);
            }
            paint::glyph(frame, area, area.x + col, area.y + row, piece.glyph, style);
        }
    }
}
