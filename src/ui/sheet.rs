//! The pull-up transaction sheet.
//!
//! A light surface with a rounded top edge and a drag handle, listing every
//! transaction as a two-row item:
//!
//! ```text
//! ╭──────────────────────────────────────────╮
//!                   ━━━━━
//!
//!  ۶۰۰,۰۰۰ - ریال           خرید از فروشگاه  [#]
//!                       ۱۶:۵۵ • ۲۵ آبان ۱۴۰۴
//!  ──────────────────────────────────────────
//! ```
//!
//! Rows fade in one after another after the sheet mounts.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::constants::{ROW_REVEAL_DELAY_TICKS, ROW_REVEAL_TICKS};
use crate::domain::Transaction;
use crate::theme::{
    DIVIDER, HANDLE, ICON_BG, SHEET_BG, TEXT_SECONDARY, TXN_META_STYLE, TXN_TITLE_STYLE,
};
use crate::widgets::helpers::{fade, reveal_progress};
use crate::widgets::{SignedAmount, TransactionIcon};

use super::helpers::{fill, render_divider, render_rounded_edge};
use super::layout::{AMOUNT_WIDTH, ICON_WIDTH, TXN_HEIGHT, txn_row_area};

const HANDLE_GLYPHS: &str = "━━━━━";
const META_SEPARATOR: &str = " • ";

// ============================================================================
// TransactionSheet Widget
// ============================================================================

/// The transaction list on its sheet.
#[derive(Debug, Clone, Copy)]
pub struct TransactionSheet<'a> {
    transactions: &'a [Transaction],
    elapsed_ticks: u64,
}

impl<'a> TransactionSheet<'a> {
    /// Create a sheet showing `transactions` in order.
    #[must_use]
    pub const fn new(transactions: &'a [Transaction]) -> Self {
        Self {
            transactions,
            elapsed_ticks: u64::MAX,
        }
    }

    /// Ticks since the sheet mounted, driving the row entrance.
    #[must_use]
    pub const fn elapsed_ticks(mut self, ticks: u64) -> Self {
        self.elapsed_ticks = ticks;
        self
    }

    fn row_opacity(&self, index: usize) -> f32 {
        let delay = (index as u64).saturating_mul(ROW_REVEAL_DELAY_TICKS);
        reveal_progress(self.elapsed_ticks, delay, ROW_REVEAL_TICKS)
    }
}

impl Widget for TransactionSheet<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        if area.is_empty() {
            return;
        }
        fill(buf, area, SHEET_BG);
        render_rounded_edge(buf, area, SHEET_BG);

        if area.height > 1 {
            let handle = Rect::new(area.x, area.y + 1, area.width, 1);
            Line::from(Span::styled(HANDLE_GLYPHS, Style::new().fg(HANDLE)))
                .alignment(Alignment::Center)
                .render(handle, buf);
        }

        let last = self.transactions.len().saturating_sub(1);
        for (index, txn) in self.transactions.iter().enumerate() {
            let row = txn_row_area(area, index).intersection(area);
            if row.is_empty() {
                break;
            }
            let opacity = self.row_opacity(index);
            render_transaction(buf, row, txn, opacity);

            if index < last {
                let divider = Rect::new(row.x, row.y.saturating_add(TXN_HEIGHT), row.width, 1);
                let divider = divider.intersection(area);
                if !divider.is_empty() {
                    render_divider(buf, divider, fade(DIVIDER, SHEET_BG, opacity));
                }
            }
        }
    }
}

/// Draw one transaction: amount, then title and timestamp, then the icon.
fn render_transaction(buf: &mut Buffer, area: Rect, txn: &Transaction, opacity: f32) {
    let [amount_area, details_area, icon_area] = Layout::horizontal([
        Constraint::Length(AMOUNT_WIDTH),
        Constraint::Min(0),
        Constraint::Length(ICON_WIDTH),
    ])
    .areas(area);

    let amount = SignedAmount::from(txn);
    let base = amount.base_style();
    let mut style = base.fg(fade(
        base.fg.unwrap_or(TEXT_SECONDARY),
        SHEET_BG,
        opacity,
    ));
    if let Some(bg) = base.bg {
        style = style.bg(fade(bg, SHEET_BG, opacity));
    }
    amount.style(style).render(amount_area, buf);

    let [title_row, meta_row] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(details_area);
    let details = |row: Rect| Rect::new(row.x, row.y, row.width.saturating_sub(1), row.height);

    let title_style = faded(TXN_TITLE_STYLE, opacity);
    Line::from(Span::styled(txn.title.as_str(), title_style))
        .alignment(Alignment::Right)
        .render(details(title_row), buf);

    let meta = format!("{}{META_SEPARATOR}{}", txn.time, txn.date);
    Line::from(Span::styled(meta, faded(TXN_META_STYLE, opacity)))
        .alignment(Alignment::Right)
        .render(details(meta_row), buf);

    fill(buf, icon_area, fade(ICON_BG, SHEET_BG, opacity));
    let glyph = TransactionIcon::from_key(&txn.icon).glyph();
    Line::from(Span::styled(glyph, title_style))
        .alignment(Alignment::Center)
        .render(icon_area, buf);
}

fn faded(style: Style, opacity: f32) -> Style {
    match style.fg {
        Some(fg) => style.fg(fade(fg, SHEET_BG, opacity)),
        None => style,
    }
}

// ============================================================================
// Tests
// ============================================================================
