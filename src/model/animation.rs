//! Declarative animation tables
//!
//! Each decorative element carries a [`Motion`]: optional keyframe tracks
//! for horizontal/vertical offset, scale and rotation. Tracks are pure data
//! and are sampled by elapsed time when a frame is drawn; nothing here keeps
//! state between frames.
//!
//! Offsets are expressed in pixels and rotation in degrees, the units the
//! tables were authored in. [`Pose`] converts them to terminal cells.

/// A single animated property
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframes {
    pub values: &'static [f32],
    /// Normalised keyframe positions in `[0, 1]`; evenly spaced when absent
    /// or when the length does not match `values`
    pub times: Option<&'static [f32]>,
    /// Seconds per cycle
    pub duration: f32,
    /// Seconds before the track starts moving
    pub delay: f32,
    pub repeat: bool,
}

impl Keyframes {
    pub const fn looping(values: &'static [f32], duration: f32) -> Self {
        Self {
            values,
            times: None,
            duration,
            delay: 0.0,
            repeat: true,
        }
    }

    pub const fn once(values: &'static [f32], duration: f32) -> Self {
        Self {
            values,
            times: None,
            duration,
            delay: 0.0,
            repeat: false,
        }
    }

    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub const fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub const fn with_times(mut self, times: &'static [f32]) -> Self {
        self.times = Some(times);
        self
    }

    /// Value of the track `elapsed` seconds after it was mounted
    pub fn sample(&self, elapsed: f32) -> f32 {
        let (first, last) = match (self.values.first(), self.values.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return 0.0,
        };
        if self.values.len() == 1 {
            return first;
        }

        let t = elapsed - self.delay;
        if t <= 0.0 {
            return first;
        }
        if self.duration <= 0.0 {
            return last;
        }

        let t = if self.repeat {
            t % self.duration
        } else if t >= self.duration {
            return last;
        } else {
            t
        };
        let progress = t / self.duration;

        let count = self.values.len();
        let position = |i: usize| -> f32 {
            match self.times {
                Some(times) if times.len() == count => times[i],
                _ => i as f32 / (count - 1) as f32,
            }
        };

        for i in 0..count - 1 {
            let (start, end) = (position(i), position(i + 1));
            if progress <= end {
                let span = end - start;
                let local = if span > 0.0 {
                    ((progress - start) / span).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                let (a, b) = (self.values[i], self.values[i + 1]);
                return a + (b - a) * local;
            }
        }
        last
    }
}

/// Sampled transform of one element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    pub rotate: f32,
}

impl Default for Pose {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            rotate: 0.0,
        }
    }
}

/// Pixels per terminal row used to map vertical offsets
const PX_PER_ROW: f32 = 8.0;
/// Degrees of rotation that sway an element one column
const DEG_PER_COL: f32 = 10.0;

impl Pose {
    /// Vertical offset in whole rows
    pub fn row_offset(&self) -> i16 {
        (self.y / PX_PER_ROW).round() as i16
    }

    /// Horizontal offset in whole columns; rotation reads as a sideways sway
    pub fn col_offset(&self) -> i16 {
        ((self.x / PX_PER_ROW) + (self.rotate / DEG_PER_COL)).round() as i16
    }

    /// Whether the element is near the peak of a scale pulse
    pub fn is_emphasized(&self) -> bool {
        self.scale >= 1.05
    }
}

/// A bundle of optional property tracks
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    pub x: Option<Keyframes>,
    pub y: Option<Keyframes>,
    pub scale: Option<Keyframes>,
    pub rotate: Option<Keyframes>,
}

impl Motion {
    pub const fn new() -> Self {
        Self {
            x: None,
            y: None,
            scale: None,
            rotate: None,
        }
    }

    pub const fn x(mut self, track: Keyframes) -> Self {
        self.x = Some(track);
        self
    }

    pub const fn y(mut self, track: Keyframes) -> Self {
        self.y = Some(track);
        self
    }

    pub const fn scale(mut self, track: Keyframes) -> Self {
        self.scale = Some(track);
        self
    }

    pub const fn rotate(mut self, track: Keyframes) -> Self {
        self.rotate = Some(track);
        self
    }

    /// Shift every track's start by `delay` seconds
    pub fn delayed(self, delay: f32) -> Self {
        let shift = |track: Option<Keyframes>| track.map(|k| k.with_delay(k.delay + delay));
        Self {
            x: shift(self.x),
            y: shift(self.y),
            scale: shift(self.scale),
            rotate: shift(self.rotate),
        }
    }

    /// Stretch every track to `duration` seconds per cycle
    pub fn lasting(self, duration: f32) -> Self {
        let set = |track: Option<Keyframes>| track.map(|k| k.with_duration(duration));
        Self {
            x: set(self.x),
            y: set(self.y),
            scale: set(self.scale),
            rotate: set(self.rotate),
        }
    }

    pub fn sample(&self, elapsed: f32) -> Pose {
        let defaults = Pose::default();
        Pose {
            x: self.x.map_or(defaults.x, |k| k.sample(elapsed)),
            y: self.y.map_or(defaults.y, |k| k.sample(elapsed)),
            scale: self.scale.map_or(defaults.scale, |k| k.sample(elapsed)),
            rotate: self.rotate.map_or(defaults.rotate, |k| k.sample(elapsed)),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tables
// ─────────────────────────────────────────────────────────────────────────────

pub mod tables {
    use super::{Keyframes, Motion};

    // Welcome page corner decorations
    pub const DECORATION_TOP_LEFT: Motion = Motion::new()
        .rotate(Keyframes::looping(&[0.0, 10.0, -10.0, 0.0], 4.0))
        .scale(Keyframes::looping(&[1.0, 1.1, 1.0], 4.0));
    pub const DECORATION_TOP_RIGHT: Motion = Motion::new()
        .y(Keyframes::looping(&[-10.0, 10.0, -10.0], 3.0))
        .rotate(Keyframes::looping(&[0.0, 15.0, 0.0], 3.0));
    pub const DECORATION_BOTTOM_LEFT: Motion =
        Motion::new().scale(Keyframes::looping(&[1.0, 1.2, 1.0], 2.5));
    pub const DECORATION_BOTTOM_RIGHT: Motion =
        Motion::new().rotate(Keyframes::looping(&[-15.0, 15.0, -15.0], 2.0));

    // Welcome titles
    pub const TITLE_MAIN: Motion = Motion::new().y(Keyframes::looping(&[-2.0, 2.0, -2.0], 3.0));
    pub const TITLE_SUB: Motion =
        Motion::new().scale(Keyframes::looping(&[1.0, 1.02, 1.0], 2.5).with_delay(0.5));

    // Photo page
    pub const PHOTO_HALO: Motion = Motion::new()
        .scale(Keyframes::looping(&[1.0, 1.05, 1.0], 8.0))
        .rotate(Keyframes::looping(&[0.0, 180.0, 360.0], 8.0));
    pub const PHOTO_CROWN: Motion = Motion::new()
        .rotate(Keyframes::looping(&[0.0, 10.0, -10.0, 0.0], 2.0))
        .scale(Keyframes::looping(&[1.0, 1.1, 1.0], 2.0));
    pub const PHOTO_GEM: Motion = Motion::new().scale(Keyframes::looping(&[1.0, 1.2, 1.0], 1.8));

    // Video card badge; each card delays by `index * 0.3`
    pub const VIDEO_BADGE: Motion = Motion::new()
        .rotate(Keyframes::looping(&[0.0, 5.0, -5.0, 0.0], 2.0))
        .scale(Keyframes::looping(&[1.0, 1.1, 1.0], 2.0));

    // Reasons card glow
    pub const REASON_GLOW: Motion = Motion::new().scale(Keyframes::looping(&[1.0, 1.02, 1.0], 3.0));

    // Celebration page
    pub const CELEBRATION_TITLE: Motion = Motion::new()
        .scale(Keyframes::looping(&[1.0, 1.02, 1.0], 3.0))
        .rotate(Keyframes::looping(&[-1.0, 1.0, -1.0], 3.0));
    /// Emoji row; entry `i` lasts `2 + i * 0.1` s and starts after `i * 0.1` s
    pub const EMOJI_ROW: Motion = Motion::new()
        .y(Keyframes::looping(&[-2.0, 2.0, -2.0], 2.0))
        .rotate(Keyframes::looping(&[-5.0, 5.0, -5.0], 2.0));
    /// Floating glyph `i` lasts `4 + i * 0.5` s and starts after `i * 0.3` s
    pub const FLOATING: Motion = Motion::new()
        .y(Keyframes::looping(&[-15.0, 15.0, -15.0], 4.0))
        .rotate(Keyframes::looping(&[0.0, 180.0, 360.0], 4.0))
        .scale(Keyframes::looping(&[1.0, 1.2, 1.0], 4.0));

    /// Confetti fall progress (0 = top edge, 1 = past the bottom edge)
    pub const CONFETTI_FALL: Keyframes =
        Keyframes::once(&[0.0, -0.05, 1.0], 3.0).with_times(&[0.0, 0.1, 1.0]);
    pub const CONFETTI_OPACITY: Keyframes =
        Keyframes::once(&[0.0, 1.0, 1.0, 0.0], 3.0).with_times(&[0.0, 0.1, 0.9, 1.0]);
    pub const CONFETTI_SPIN: Keyframes = Keyframes::once(&[0.0, 180.0, 360.0, 540.0], 3.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    const RAMP: Keyframes = Keyframes::once(&[0.0, 10.0], 2.0);

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_linear_interpolation() {
        assert!(approx(RAMP.sample(0.0), 0.0));
        assert!(approx(RAMP.sample(1.0), 5.0));
        assert!(approx(RAMP.sample(1.5), 7.5));
    }

    #[test]
    fn test_once_holds_last_value() {
        assert!(approx(RAMP.sample(2.0), 10.0));
        assert!(approx(RAMP.sample(60.0), 10.0));
    }

    #[test]
    fn test_repeat_wraps_cycle() {
        let track = Keyframes::looping(&[0.0, 10.0, 0.0], 2.0);
        assert!(approx(track.sample(1.0), 10.0));
        assert!(approx(track.sample(3.0), 10.0));
        assert!(approx(track.sample(2.5), 5.0));
    }

    #[test]
    fn test_delay_holds_first_value() {
        let track = RAMP.with_delay(1.0);
        assert!(approx(track.sample(0.5), 0.0));
        assert!(approx(track.sample(2.0), 5.0));
    }

    #[test]
    fn test_explicit_times() {
        let track = Keyframes::once(&[0.0, 1.0, 1.0, 0.0], 10.0).with_times(&[0.0, 0.1, 0.9, 1.0]);
        assert!(approx(track.sample(0.5), 0.5));
        assert!(approx(track.sample(5.0), 1.0));
        assert!(approx(track.sample(9.5), 0.5));
    }

    #[test]
    fn test_mismatched_times_fall_back_to_even_spacing() {
        let track = Keyframes::once(&[0.0, 10.0, 20.0], 2.0).with_times(&[0.0, 0.5]);
        assert!(approx(track.sample(1.0), 10.0));
    }

    #[test]
    fn test_degenerate_tracks() {
        assert_eq!(Keyframes::once(&[], 1.0).sample(0.5), 0.0);
        assert_eq!(Keyframes::once(&[3.0], 1.0).sample(0.5), 3.0);
        assert_eq!(Keyframes::once(&[1.0, 2.0], 0.0).sample(0.5), 2.0);
    }

    #[test]
    fn test_motion_defaults_for_missing_tracks() {
        let pose = Motion::new().sample(1.0);
        assert_eq!(pose, Pose::default());
        assert!(!pose.is_emphasized());
    }

    #[test]
    fn test_bob_maps_to_rows() {
        let pose = tables::DECORATION_TOP_RIGHT.sample(0.0);
        assert_eq!(pose.row_offset(), -1);
        let pose = tables::DECORATION_TOP_RIGHT.sample(1.5);
        assert_eq!(pose.row_offset(), 1);
    }

    #[test]
    fn test_delayed_and_lasting_apply_to_all_tracks() {
        let motion = tables::EMOJI_ROW.delayed(0.3).lasting(2.3);
        let y = motion.y.unwrap();
        let rotate = motion.rotate.unwrap();
        assert!(approx(y.delay, 0.3) && approx(rotate.delay, 0.3));
        assert!(approx(y.duration, 2.3) && approx(rotate.duration, 2.3));
    }
}
