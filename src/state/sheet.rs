//! Mounted state of the pull-up transaction sheet.
//!
//! The sheet holds a [`ScrollSubscription`] for as long as it is mounted and
//! derives its vertical slide from the latest scroll sample:
//!
//! ```text
//! slide = max(initial_offset - scroll_offset * 0.5, 0)
//! ```
//!
//! With the default `initial_offset` of zero the slide is zero for every
//! offset, so the sheet only moves with the page itself.

use crate::constants::SCROLL_SLIDE_FACTOR;

use super::scroll::{ScrollSubscription, Viewport};

/// Computes the sheet's downward slide, in rows, for a scroll offset.
#[must_use]
pub fn slide_amount(initial_offset: f32, scroll_offset: f32) -> f32 {
    (initial_offset - scroll_offset * SCROLL_SLIDE_FACTOR).max(0.0)
}

/// The transaction sheet while it is mounted.
#[derive(Debug)]
pub struct SheetState {
    subscription: ScrollSubscription,
    initial_offset: f32,
    mounted_at_tick: u64,
}

impl SheetState {
    /// Mounts the sheet, subscribing to the viewport's scroll samples.
    #[must_use]
    pub fn mount(viewport: &Viewport, initial_offset: f32, tick: u64) -> Self {
        Self {
            subscription: viewport.subscribe(),
            initial_offset: initial_offset.max(0.0),
            mounted_at_tick: tick,
        }
    }

    /// Latest scroll offset seen by the sheet.
    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.subscription.offset()
    }

    /// Current slide in whole rows.
    #[must_use]
    pub fn slide(&self) -> u16 {
        self.slide_at(self.scroll_offset())
    }

    /// Slide in whole rows the sheet would have at `scroll_offset`.
    #[must_use]
    pub fn slide_at(&self, scroll_offset: u16) -> u16 {
        let rows = slide_amount(self.initial_offset, f32::from(scroll_offset)).round();
        rows.min(f32::from(u16::MAX)) as u16
    }

    /// Ticks elapsed since the sheet was mounted, for entrance animations.
    #[must_use]
    pub const fn ticks_since_mount(&self, tick: u64) -> u64 {
        tick.saturating_sub(self.mounted_at_tick)
    }
}

// ============================================================================
// Tests
// ============================================================================
