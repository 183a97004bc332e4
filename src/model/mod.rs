//! Model layer - state owned by the app
//!
//! - `SlideController` - which page is showing
//! - `OverlayTimer` + `Scheduler` - confetti visibility and its deferred reset
//! - `ReasonCarousel` - position in the reasons list
//! - `Content` - page copy and asset paths
//! - `ModalStack` - dialog overlays

pub mod animation;
pub mod carousel;
pub mod confetti;
pub mod content;
pub mod modal;
pub mod overlay;
pub mod scheduler;
pub mod slides;
pub mod ui;

pub use content::Content;
pub use overlay::{OverlayTimer, TimerEvent};
pub use scheduler::Scheduler;
pub use slides::SlideController;
pub use ui::Page;
