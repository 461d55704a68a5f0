//! Common reusable widget components.
//!
//! - [`BalanceDisplay`]: The header balance with its visibility mask
//! - [`SignedAmount`]: A transaction amount with sign glyph and currency
//! - [`TransactionIcon`] / [`NavIcon`]: Icon keys resolved to terminal glyphs

mod amount;
mod icon;

pub use amount::{BalanceDisplay, SignedAmount};
pub use icon::{NavIcon, TransactionIcon};
