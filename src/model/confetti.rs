//! Confetti burst layout

use super::animation::tables::{CONFETTI_FALL, CONFETTI_OPACITY, CONFETTI_SPIN};
use rand::Rng;

pub const DEFAULT_PIECE_COUNT: usize = 20;

/// Seconds between successive pieces starting to fall
const STAGGER: f32 = 0.1;

pub const COLORS: [(u8, u8, u8); 6] = [
    (0xff, 0x69, 0xb4),
    (0xff, 0x14, 0x93),
    (0x93, 0x70, 0xdb),
    (0xba, 0x55, 0xd3),
    (0xff, 0x63, 0x47),
    (0xff, 0xd7, 0x00),
];

pub const GLYPHS: [&str; 6] = ["🎉", "🎊", "✨", "💖", "🌟", "🎈"];

#[derive(Debug, Clone, PartialEq)]
pub struct ConfettiPiece {
    /// Horizontal position as a fraction of the area width
    pub x: f32,
    pub color: (u8, u8, u8),
    pub glyph: &'static str,
    /// Seconds after the burst starts before this piece moves
    pub delay: f32,
}

impl ConfettiPiece {
    /// Cell occupied `elapsed` seconds into the burst, if the piece is showing
    ///
    /// Glyphs are two columns wide, so the column leaves room for that.
    pub fn cell(&self, elapsed: f32, width: u16, height: u16) -> Option<(u16, u16)> {
        if width < 2 || height == 0 {
            return None;
        }
        let local = elapsed - self.delay;
        if local < 0.0 || CONFETTI_OPACITY.sample(local) <= 0.0 {
            return None;
        }

        let row = (CONFETTI_FALL.sample(local) * height as f32).floor().max(0.0);
        if row >= height as f32 {
            return None;
        }
        let col = (self.x * width as f32).floor() as u16;
        Some((col.min(width - 2), row as u16))
    }

    /// Whether the piece is mid-flip, drawn emphasised
    pub fn is_flipped(&self, elapsed: f32) -> bool {
        let angle = CONFETTI_SPIN.sample(elapsed - self.delay) % 360.0;
        (90.0..270.0).contains(&angle)
    }
}

/// One burst of confetti pieces
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfettiBurst {
    pub pieces: Vec<ConfettiPiece>,
}

impl ConfettiBurst {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Self {
        let pieces = (0..count)
            .map(|i| ConfettiPiece {
                x: rng.random_range(0.0..1.0),
                color: COLORS[rng.random_range(0..COLORS.len())],
                glyph: GLYPHS[rng.random_range(0..GLYPHS.len())],
                delay: i as f32 * STAGGER,
            })
            .collect();
        Self { pieces }
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }
}
