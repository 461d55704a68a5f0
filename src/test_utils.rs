//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, layout::Rect};
use rstest::fixture;

use crate::domain::{Dataset, NavigationItem, Transaction, TransactionCategory};
use crate::state::{App, AppConfig, StartupOptions};

/// Size of the [`test_terminal`] fixture.
pub const TEST_WIDTH: u16 = 60;
pub const TEST_HEIGHT: u16 = 40;

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct TransactionMother;

impl TransactionMother {
    /// An incoming payment of `amount`.
    #[must_use]
    pub fn credit(id: &str, amount: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: "دریافت".to_string(),
            date: "۱ آبان ۱۴۰۴".to_string(),
            time: "۱۰:۰۰".to_string(),
            amount,
            category: TransactionCategory::Payment,
            icon: "receipt".to_string(),
        }
    }

    /// A purchase; the amount is made negative whichever sign is passed.
    #[must_use]
    pub fn debit(id: &str, amount: i64) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: "خرید".to_string(),
            date: "۱ آبان ۱۴۰۴".to_string(),
            time: "۱۲:۰۰".to_string(),
            amount: -amount.abs(),
            category: TransactionCategory::Shopping,
            icon: "shopping_cart".to_string(),
        }
    }
}

pub struct NavItemMother;

impl NavItemMother {
    #[must_use]
    pub fn with_icon(id: &str, icon: &str) -> NavigationItem {
        NavigationItem::new(id, id, icon)
    }
}

pub struct DatasetMother;

impl DatasetMother {
    /// A dataset with `count` debits and the demo navigation bar.
    #[must_use]
    pub fn with_transactions(count: usize) -> Dataset {
        let mut data = Dataset::demo();
        data.transactions = (0..count)
            .map(|i| TransactionMother::debit(&i.to_string(), 1_000))
            .collect();
        data
    }
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Renders the symbols of a buffer as text, one line per row.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(TEST_WIDTH, TEST_HEIGHT))
        .expect("terminal creation should succeed")
}

/// The demo account laid out for a [`test_terminal`]-sized screen.
#[fixture]
pub fn demo_app() -> App {
    app_with(Dataset::demo(), AppConfig::default(), &StartupOptions::default())
}

/// Builds an app sized for a [`test_terminal`].
#[must_use]
pub fn app_with(data: Dataset, config: AppConfig, options: &StartupOptions) -> App {
    let mut app = App::new(data, config, options);
    app.update_screen(Rect::new(0, 0, TEST_WIDTH, TEST_HEIGHT));
    app
}
