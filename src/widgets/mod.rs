//! Widget components for the Blue Bank TUI.
//!
//! # Module Structure
//!
//! - [`helpers`]: Amount formatting, digit localization and color blending
//! - [`common`]: Small reusable widgets (amounts, icons)

pub mod common;
pub mod helpers;

pub use common::{BalanceDisplay, NavIcon, SignedAmount, TransactionIcon};
