//! External interactions
//!
//! - Opening media in an external viewer
//! - Log file setup

pub mod logging;
pub mod media;

pub use media::{resolve_asset, viewer_command, viewer_program};
