//! Icon keys and their terminal glyphs.
//!
//! Data refers to icons by string keys. Each family is a closed enum with an
//! explicit default; keys outside the set resolve to that default rather than
//! failing.

// ============================================================================
// Transaction Icons
// ============================================================================

/// Icon shown in the circle at the end of a transaction row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionIcon {
    /// `shopping_cart`
    ShoppingCart,
    /// `public`
    Public,
    /// `receipt`, also the fallback for unknown keys.
    #[default]
    Receipt,
}

impl TransactionIcon {
    /// Resolves an icon key, falling back to [`TransactionIcon::Receipt`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "shopping_cart" => Self::ShoppingCart,
            "public" => Self::Public,
            "receipt" => Self::Receipt,
            _ => Self::default(),
        }
    }

    /// ASCII-safe glyph that renders in every terminal.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::ShoppingCart => "[#]",
            Self::Public => "[@]",
            Self::Receipt => "[=]",
        }
    }
}

// ============================================================================
// Navigation Icons
// ============================================================================

/// Icon shown above a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavIcon {
    /// `home`, also the fallback for unknown keys.
    #[default]
    Home,
    /// `credit_card`
    CreditCard,
    /// `apps`
    Apps,
    /// `sync_alt`
    SyncAlt,
    /// `person`
    Person,
}

impl NavIcon {
    /// Resolves an icon key, falling back to [`NavIcon::Home`].
    #[must_use]
    pub fn from_key(key: &str) -> Self {
        match key {
            "home" => Self::Home,
            "credit_card" => Self::CreditCard,
            "apps" => Self::Apps,
            "sync_alt" => Self::SyncAlt,
            "person" => Self::Person,
            _ => Self::default(),
        }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Home => "⌂",
            Self::CreditCard => "▭",
            Self::Apps => "▦",
            Self::SyncAlt => "⇄",
            Self::Person => "☺",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("shopping_cart", TransactionIcon::ShoppingCart)]
    #[case("public", TransactionIcon::Public)]
    #[case("receipt", TransactionIcon::Receipt)]
    #[case("sync_alt", TransactionIcon::Receipt)]
    #[case("", TransactionIcon::Receipt)]
    #[case("SHOPPING_CART", TransactionIcon::Receipt)]
    fn test_transaction_icon_from_key(#[case] key: &str, #[case] expected: TransactionIcon) {
        assert_eq!(TransactionIcon::from_key(key), expected);
    }

    #[rstest]
    #[case("home", NavIcon::Home)]
    #[case("credit_card", NavIcon::CreditCard)]
    #[case("apps", NavIcon::Apps)]
    #[case("sync_alt", NavIcon::SyncAlt)]
    #[case("person", NavIcon::Person)]
    #[case("settings", NavIcon::Home)]
    #[case("", NavIcon::Home)]
    fn test_nav_icon_from_key(#[case] key: &str, #[case] expected: NavIcon) {
        assert_eq!(NavIcon::from_key(key), expected);
    }

    #[test]
    fn test_unknown_keys_share_default_glyph() {
        assert_eq!(
            TransactionIcon::from_key("bogus").glyph(),
            TransactionIcon::Receipt.glyph()
        );
        assert_eq!(NavIcon::from_key("bogus").glyph(), NavIcon::Home.glyph());
    }
}
