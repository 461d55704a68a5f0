//! Amount display widgets.
//!
//! Renders the header balance (with its visibility mask) and the signed
//! amounts of transaction rows.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::CURRENCY_LABEL;
use crate::domain::Transaction;
use crate::theme::{BALANCE_CURRENCY_STYLE, BALANCE_STYLE, CREDIT_STYLE, DEBIT_STYLE};
use crate::widgets::helpers::{format_balance, format_signed_amount};

// ============================================================================
// BalanceDisplay Widget
// ============================================================================

/// The account balance followed by the currency label.
///
/// # Example
///
/// ```text
/// ۲,۲۵۳,۶۲۳ ریال
/// •••••••• ریال
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BalanceDisplay {
    balance: i64,
    visible: bool,
}

impl BalanceDisplay {
    /// Create a balance display.
    ///
    /// # Arguments
    ///
    /// * `balance` - The balance in minor currency units
    /// * `visible` - Whether the figure is shown or masked
    #[must_use]
    pub const fn new(balance: i64, visible: bool) -> Self {
        Self { balance, visible }
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        Line::from(vec![
            Span::styled(format_balance(self.balance, self.visible), BALANCE_STYLE),
            Span::styled(format!(" {CURRENCY_LABEL}"), BALANCE_CURRENCY_STYLE),
        ])
    }
}

impl Widget for BalanceDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.to_line()
            .alignment(Alignment::Center)
            .render(area, buf);
    }
}

// ============================================================================
// SignedAmount Widget
// ============================================================================

/// A transaction amount with its sign glyph and currency.
///
/// Credits are drawn on a highlight with a cell of padding on each side;
/// debits and zero amounts are drawn flush.
#[derive(Debug, Clone, Copy)]
pub struct SignedAmount {
    amount: i64,
    credit: bool,
    style_override: Option<Style>,
}

impl SignedAmount {
    /// Create a signed amount display, highlighted when `credit` is set.
    #[must_use]
    pub const fn new(amount: i64, credit: bool) -> Self {
        Self {
            amount,
            credit,
            style_override: None,
        }
    }

    /// Replace the credit/debit style, e.g. while the row fades in.
    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style_override = Some(style);
        self
    }

    /// The style this amount is drawn with.
    #[must_use]
    pub fn base_style(&self) -> Style {
        if self.credit { CREDIT_STYLE } else { DEBIT_STYLE }
    }

    /// Generate the display line.
    #[must_use]
    pub fn to_line(&self) -> Line<'static> {
        let style = self.style_override.unwrap_or_else(|| self.base_style());
        let text = format_signed_amount(self.amount);
        let text = if self.credit {
            format!(" {text} ")
        } else {
            text
        };
        Line::from(Span::styled(text, style))
    }
}

impl From<&Transaction> for SignedAmount {
    fn from(txn: &Transaction) -> Self {
        Self::new(txn.amount, txn.is_credit())
    }
}

impl Widget for SignedAmount {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        self.to_line().alignment(Alignment::Left).render(area, buf);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::MASKED_BALANCE;
    use crate::test_utils::TransactionMother;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_balance_display_visible() {
        let line = BalanceDisplay::new(2_253_623, true).to_line();
        assert_eq!(line_text(&line), "۲,۲۵۳,۶۲۳ ریال");
    }

    #[test]
    fn test_balance_display_masked_ignores_value() {
        let a = line_text(&BalanceDisplay::new(2_253_623, false).to_line());
        let b = line_text(&BalanceDisplay::new(7, false).to_line());
        assert_eq!(a, format!("{MASKED_BALANCE} {CURRENCY_LABEL}"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_signed_amount_styles() {
        let credit = SignedAmount::from(&TransactionMother::credit("1", 3_500_000));
        let debit = SignedAmount::from(&TransactionMother::debit("2", 600_000));
        let zero = SignedAmount::from(&TransactionMother::credit("3", 0));

        assert_eq!(credit.base_style(), CREDIT_STYLE);
        assert_eq!(debit.base_style(), DEBIT_STYLE);
        assert_eq!(zero.base_style(), DEBIT_STYLE);
        assert_eq!(line_text(&zero.to_line()), "۰ + ریال");

        assert_eq!(line_text(&credit.to_line()), " ۳,۵۰۰,۰۰۰ + ریال ");
        assert_eq!(line_text(&debit.to_line()), "۶۰۰,۰۰۰ - ریال");
    }

    #[test]
    fn test_signed_amount_renders_left_aligned() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        SignedAmount::new(-600_000, false).render(area, &mut buf);

        assert_eq!(buf[(0, 0)].symbol(), "۶");
    }

    #[test]
    fn test_widgets_ignore_zero_height() {
        let area = Rect::new(0, 0, 20, 0);
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 1));
        BalanceDisplay::new(1, true).render(area, &mut buf);
        SignedAmount::new(1, true).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].symbol(), " ");
    }
}
