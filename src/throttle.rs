//! Per-category minimum-interval gating.
//!
//! The gate itself is a pure decision function; the last-emission instants
//! live in [`ThrottleState`], owned by the caller. After a successful
//! emission the caller records the new instant with [`ThrottleState::mark`].

/// A minimum-interval gate.
#[derive(Debug, Clone, Copy)]
pub struct Throttle {
    min_interval_ms: u64,
}

impl Throttle {
    pub fn new(min_interval_ms: u64) -> Self {
        Self { min_interval_ms }
    }

    /// Whether an event at `now` may be emitted given the last emission
    /// instant for its category. The first event of a category (no prior
    /// instant) always passes. Clocks are assumed non-decreasing.
    pub fn should_emit(&self, last: Option<u64>, now: u64) -> bool {
        match last {
            None => true,
            Some(last) => now.saturating_sub(last) >= self.min_interval_ms,
        }
    }
}

/// The independently throttled event categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThrottleKey {
    MouseMove,
    WheelScroll,
    DocumentScroll,
    DragMove,
}

/// Last-emission instants, one per throttled category.
///
/// Each instant only ever advances; it is set exclusively right after a
/// successful emission for that category.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThrottleState {
    mouse_move: Option<u64>,
    wheel_scroll: Option<u64>,
    document_scroll: Option<u64>,
    drag_move: Option<u64>,
}

impl ThrottleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last emission instant for `key`, if any.
    pub fn last(&self, key: ThrottleKey) -> Option<u64> {
        match key {
            ThrottleKey::MouseMove => self.mouse_move,
            ThrottleKey::WheelScroll => self.wheel_scroll,
            ThrottleKey::DocumentScroll => self.document_scroll,
            ThrottleKey::DragMove => self.drag_move,
        }
    }

    /// Record an emission at `now` for `key`.
    pub fn mark(&mut self, key: ThrottleKey, now: u64) {
        let slot = match key {
            ThrottleKey::MouseMove => &mut self.mouse_move,
            ThrottleKey::WheelScroll => &mut self.wheel_scroll,
            ThrottleKey::DocumentScroll => &mut self.document_scroll,
            ThrottleKey::DragMove => &mut self.drag_move,
        };
        *slot = Some(now);
    }
}
