//! Page scrolling and scoped scroll subscriptions.
//!
//! The [`Viewport`] owns the page's vertical scroll offset. Views that react
//! to scrolling take a [`ScrollSubscription`] from it; every scroll sample is
//! pushed to all live subscriptions, and a subscription unregisters itself
//! when dropped.
//!
//! ```text
//! Viewport ──scroll_to──▶ Registry ──set──▶ ScrollSubscription (sheet)
//!                                    └────▶ ...
//! ```
//!
//! Everything runs on the UI thread, so the registry is shared through
//! `Rc<RefCell<_>>`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

// ============================================================================
// Registry
// ============================================================================

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    listeners: Vec<(u64, Rc<Cell<u16>>)>,
}

// ============================================================================
// Viewport
// ============================================================================

/// Vertical scroll position of the page area.
#[derive(Debug, Default)]
pub struct Viewport {
    offset: u16,
    max_offset: u16,
    registry: Rc<RefCell<Registry>>,
}

impl Viewport {
    /// Creates a viewport at the top of the page with nothing to scroll.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current scroll offset in rows.
    #[must_use]
    pub const fn offset(&self) -> u16 {
        self.offset
    }

    /// Largest reachable offset.
    #[must_use]
    pub const fn max_offset(&self) -> u16 {
        self.max_offset
    }

    /// Updates the scroll range, pulling the offset back inside it if needed.
    pub fn set_max_offset(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        if self.offset > max_offset {
            self.scroll_to(max_offset);
        }
    }

    /// Scrolls by a signed number of rows, clamped to the page.
    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.scroll_to(u16::try_from(target).unwrap_or(self.max_offset));
    }

    /// Scrolls to an absolute offset, clamped to the page.
    ///
    /// Every call is a scroll sample and is delivered to all subscribers,
    /// even when the offset does not change.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset);
        for (_, latest) in &self.registry.borrow().listeners {
            latest.set(self.offset);
        }
    }

    /// Registers a listener that observes every future scroll sample.
    ///
    /// The returned guard starts at the current offset and is removed from
    /// the viewport when dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self) -> ScrollSubscription {
        let latest = Rc::new(Cell::new(self.offset));
        let mut registry = self.registry.borrow_mut();
        let id = registry.next_id;
        registry.next_id += 1;
        registry.listeners.push((id, Rc::clone(&latest)));

        ScrollSubscription {
            id,
            latest,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().listeners.len()
    }
}

// ============================================================================
// ScrollSubscription
// ============================================================================

/// A live registration with a [`Viewport`].
///
/// Unsubscribes on drop. If the viewport is gone first, dropping is a no-op.
#[derive(Debug)]
pub struct ScrollSubscription {
    id: u64,
    latest: Rc<Cell<u16>>,
    registry: Weak<RefCell<Registry>>,
}

impl ScrollSubscription {
    /// The most recent scroll offset delivered to this subscription.
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.latest.get()
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .borrow_mut()
                .listeners
                .retain(|(id, _)| *id != self.id);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
