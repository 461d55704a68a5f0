//! Reusable UI components for the Blue Bank TUI.
//!
//! Components are stateless overlays drawn on top of the main screen.
//!
//! # Components
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages

pub mod toast;

pub use toast::render_toast;
