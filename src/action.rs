//! Action enum - All possible application actions
//!
//! Components turn key and mouse events into Actions; the App applies them.

use std::fmt;
use std::time::Instant;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // ─────────────────────────────────────────────────────────────────────────
    // App Lifecycle
    // ─────────────────────────────────────────────────────────────────────────
    /// Run deferred tasks due at this instant
    Tick(Instant),
    /// Terminal was resized
    Resize(u16, u16),
    /// Quit without confirmation
    ForceQuit,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Navigation
    // ─────────────────────────────────────────────────────────────────────────
    /// Advance to the next page
    NextPage,
    /// Go back one page
    PrevPage,
    /// Return to the welcome page
    FirstPage,
    /// Jump to a page by index
    JumpToPage(usize),
    /// Leave the welcome page for the first content page
    StartCelebration,

    // ─────────────────────────────────────────────────────────────────────────
    // Page Content
    // ─────────────────────────────────────────────────────────────────────────
    /// Show the next reason (and celebrate it)
    NextReason,
    /// Show the confetti overlay
    TriggerConfetti,
    /// Move the video selection up
    PrevVideo,
    /// Move the video selection down
    NextVideo,
    /// Open an asset in the external viewer
    OpenMedia(String),

    // ─────────────────────────────────────────────────────────────────────────
    // Modals
    // ─────────────────────────────────────────────────────────────────────────
    /// Open quit confirmation dialog
    OpenQuitDialog,
    /// Open help dialog showing all keyboard shortcuts
    OpenHelp,
    /// Close the current modal
    CloseModal,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Tick(_) => write!(f, "Tick"),
            Action::Resize(w, h) => write!(f, "Resize({}, {})", w, h),
            Action::ForceQuit => write!(f, "ForceQuit"),
            Action::NextPage => write!(f, "NextPage"),
            Action::PrevPage => write!(f, "PrevPage"),
            Action::FirstPage => write!(f, "FirstPage"),
            Action::JumpToPage(i) => write!(f, "JumpToPage({})", i),
            Action::StartCelebration => write!(f, "StartCelebration"),
            Action::NextReason => write!(f, "NextReason"),
            Action::TriggerConfetti => write!(f, "TriggerConfetti"),
            Action::PrevVideo => write!(f, "PrevVideo"),
            Action::NextVideo => write!(f, "NextVideo"),
            Action::OpenMedia(path) => write!(f, "OpenMedia({})", path),
            Action::OpenQuitDialog => write!(f, "OpenQuitDialog"),
            Action::OpenHelp => write!(f, "OpenHelp"),
            Action::CloseModal => write!(f, "CloseModal"),
        }
    }
}
