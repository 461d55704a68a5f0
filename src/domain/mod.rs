//! Domain types for the Blue Bank home screen.
//!
//! # Module Organization
//!
//! - [`error`] - Errors raised while loading a dataset
//! - [`transaction`] - Ledger entries shown in the transaction sheet
//! - [`navigation`] - Entries of the bottom navigation bar
//! - [`dataset`] - The startup input: balance, transactions and navigation items

// ============================================================================
// Module Declarations
// ============================================================================

pub mod dataset;
pub mod error;
pub mod navigation;
pub mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use dataset::Dataset;
pub use error::DataError;
pub use navigation::NavigationItem;
pub use transaction::{Transaction, TransactionCategory};
