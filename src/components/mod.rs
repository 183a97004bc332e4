//! UI Components
//!
//! One component per page plus the navigation chrome, the confetti overlay
//! and the dialogs. Components communicate through Actions rather than direct
//! state mutation.

pub mod celebration;
pub mod confetti;
pub mod help_dialog;
pub mod layout;
pub mod nav;
pub mod paint;
pub mod photo;
pub mod quit_dialog;
pub mod reasons;
pub mod videos;
pub mod welcome;

pub use celebration::CelebrationComponent;
pub use confetti::ConfettiOverlay;
pub use help_dialog::HelpDialog;
pub use layout::calculate_page_layout;
pub use nav::NavBarComponent;
pub use photo::PhotoComponent;
pub use quit_dialog::QuitDialog;
pub use reasons::ReasonsComponent;
pub use videos::VideosComponent;
pub use welcome::WelcomeComponent;
