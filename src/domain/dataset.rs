//! The startup dataset: balance, transaction history and navigation items.
//!
//! The screen never fetches or mutates data. Everything it shows comes from a
//! [`Dataset`] built once at startup, either the compiled-in demo data or a
//! JSON file with the same shape:
//!
//! ```json
//! {
//!   "balance": 2253623,
//!   "transactions": [{ "id": "1", "title": "...", "date": "...", "time": "...",
//!                      "amount": -600000, "category": "shopping", "icon": "shopping_cart" }],
//!   "nav_items": [{ "id": "home", "label": "خانه", "icon": "home" }]
//! }
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{DataError, NavigationItem, Transaction, TransactionCategory};

// ============================================================================
// Dataset
// ============================================================================

/// Everything the screen displays, supplied at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    /// Current account balance in minor currency units.
    pub balance: i64,
    /// Transaction history, most recent first.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Bottom navigation entries, in display order.
    #[serde(alias = "navItems", alias = "navigation_items")]
    pub nav_items: Vec<NavigationItem>,
}

impl Dataset {
    /// The built-in demo account.
    #[must_use]
    pub fn demo() -> Self {
        Self {
            balance: 2_253_623,
            transactions: demo_transactions(),
            nav_items: demo_nav_items(),
        }
    }

    /// Parses and validates a dataset from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Parse`] for malformed JSON and
    /// [`DataError::Invalid`] when the dataset cannot drive the screen.
    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let dataset: Self = serde_json::from_str(content)?;
        dataset.validate()
    }

    /// Reads a dataset from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`DataError::Io`] if the file cannot be read, otherwise the
    /// errors of [`Dataset::from_json`].
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = fs::read_to_string(path).map_err(|err| DataError::io(path, err))?;
        let dataset = Self::from_json(&content)?;
        tracing::info!(
            path = %path.display(),
            transactions = dataset.transactions.len(),
            tabs = dataset.nav_items.len(),
            "Loaded dataset"
        );
        Ok(dataset)
    }

    /// Returns the position of a navigation item by id.
    #[must_use]
    pub fn nav_index(&self, id: &str) -> Option<usize> {
        self.nav_items.iter().position(|item| item.id == id)
    }

    fn validate(self) -> Result<Self, DataError> {
        if self.nav_items.is_empty() {
            return Err(DataError::invalid("at least one navigation item is required"));
        }

        // Duplicate ids only break row identity, they are not fatal.
        let mut seen = HashSet::new();
        for txn in &self.transactions {
            if !seen.insert(txn.id.as_str()) {
                tracing::warn!(id = %txn.id, "Duplicate transaction id in dataset");
            }
        }

        let mut seen_tabs = HashSet::new();
        for item in &self.nav_items {
            if !seen_tabs.insert(item.id.as_str()) {
                tracing::warn!(id = %item.id, "Duplicate navigation id in dataset");
            }
        }

        Ok(self)
    }
}

// ============================================================================
// Demo Data
// ============================================================================

const STORE_PURCHASE: &str = "خرید از فروشگاه";
const ONLINE_PURCHASE: &str = "خرید اینترنتی";
const INCOMING_PAYMENT: &str = "دریافت ارزاک";

fn txn(
    id: &str,
    title: &str,
    date: &str,
    time: &str,
    amount: i64,
    category: TransactionCategory,
    icon: &str,
) -> Transaction {
    Transaction {
        id: id.to_string(),
        title: title.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        amount,
        category,
        icon: icon.to_string(),
    }
}

fn demo_transactions() -> Vec<Transaction> {
    use TransactionCategory::{Internet, Payment, Shopping};

    vec![
        txn("1", STORE_PURCHASE, "۲۵ آبان ۱۴۰۴", "۱۶:۵۵", -600_000, Shopping, "shopping_cart"),
        txn("2", ONLINE_PURCHASE, "۲۵ آبان ۱۴۰۴", "۱۱:۰۹", -960_000, Internet, "public"),
        txn("3", INCOMING_PAYMENT, "۲۵ آبان ۱۴۰۴", "۱۱:۰۹", 3_500_000, Payment, "receipt"),
        txn("4", ONLINE_PURCHASE, "۲۴ آبان ۱۴۰۴", "۱۹:۵۵", -960_000, Internet, "public"),
        txn("5", STORE_PURCHASE, "۲۲ آبان ۱۴۰۴", "۱۱:۵۱", -600_000, Shopping, "shopping_cart"),
        txn("6", STORE_PURCHASE, "۲۱ آبان ۱۴۰۴", "۱۱:۵۱", -1_000_000, Shopping, "shopping_cart"),
    ]
}

fn demo_nav_items() -> Vec<NavigationItem> {
    let mut home = NavigationItem::new("home", "خانه", "home");
    home.active = Some(true);

    vec![
        home,
        NavigationItem::new("cards", "کارت‌ها", "credit_card"),
        NavigationItem::new("menu", "منو", "apps"),
        NavigationItem::new("transfer", "انتقال", "sync_alt"),
        NavigationItem::new("profile", "پروفایل", "person"),
    ]
}

// ============================================================================
// Tests
// ============================================================================
