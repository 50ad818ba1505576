//! Translation of raw input events into logged action descriptions.

use crate::events::{ActionCategory, InputEvent};
use crate::recorder::RecorderConfig;
use crate::throttle::{Throttle, ThrottleKey, ThrottleState};
use tracing::debug;

/// An active drag, opened by drag-start and consumed by drag-end.
#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_time: u64,
}

/// Turns raw [`InputEvent`]s into action descriptions, applying the
/// per-category throttle and tracking the drag lifecycle and the last
/// logged document scroll offset.
///
/// [`Capture::observe`] is the single entry point: it returns the category
/// and description to append, or `None` when the event is suppressed.
#[derive(Debug)]
pub struct Capture {
    config: RecorderConfig,
    throttle: ThrottleState,
    drag: Option<DragSession>,
    last_scroll_top: f64,
}

impl Capture {
    pub fn new(config: RecorderConfig) -> Self {
        Self {
            config,
            throttle: ThrottleState::new(),
            drag: None,
            last_scroll_top: 0.0,
        }
    }

    /// Whether a drag session is currently open.
    pub fn drag_active(&self) -> bool {
        self.drag.is_some()
    }

    /// Observe a raw event at instant `now` (milliseconds).
    pub fn observe(&mut self, event: &InputEvent, now: u64) -> Option<(ActionCategory, String)> {
        match *event {
            InputEvent::PointerMove { x, y } => {
                if !self.pass(ThrottleKey::MouseMove, self.config.mouse_move_throttle_ms, now) {
                    return None;
                }
                Some((
                    ActionCategory::MouseMove,
                    format!("Mouse move: x={}, y={}", x, y),
                ))
            }
            // Clicks are naturally low-frequency, so they are never throttled.
            InputEvent::Click { x, y } => Some((
                ActionCategory::LeftClick,
                format!("Left click: x={}, y={}", x, y),
            )),
            InputEvent::ContextMenu { x, y } => Some((
                ActionCategory::RightClick,
                format!("Right click: x={}, y={}", x, y),
            )),
            InputEvent::Wheel { delta_y } => {
                if !self.pass(ThrottleKey::WheelScroll, self.config.wheel_scroll_throttle_ms, now) {
                    return None;
                }
                Some((
                    ActionCategory::Scroll,
                    format!("Scroll: deltaY={}", delta_y.abs()),
                ))
            }
            InputEvent::DocumentScroll { scroll_top } => {
                // Both conditions must hold: outside the throttle window AND
                // the offset moved by more than the minimum delta.
                let gate = Throttle::new(self.config.document_scroll_throttle_ms);
                let moved =
                    (scroll_top - self.last_scroll_top).abs() > self.config.min_scroll_delta;
                if !gate.should_emit(self.throttle.last(ThrottleKey::DocumentScroll), now) || !moved
                {
                    debug!(scroll_top, moved, "document scroll suppressed");
                    return None;
                }
                self.throttle.mark(ThrottleKey::DocumentScroll, now);
                self.last_scroll_top = scroll_top;
                Some((
                    ActionCategory::Scroll,
                    format!("Scroll: offset={}px", scroll_top),
                ))
            }
            InputEvent::DragStart { x, y } => {
                // Session-start event, never throttled. No nested drags: a
                // second start simply restarts the session.
                self.drag = Some(DragSession { start_time: now });
                Some((
                    ActionCategory::Drag,
                    format!("Drag start: x={}, y={}", x, y),
                ))
            }
            InputEvent::DragMove { x, y } => {
                if self.drag.is_none() {
                    debug!("drag move outside a drag session, ignored");
                    return None;
                }
                if !self.pass(ThrottleKey::DragMove, self.config.drag_move_throttle_ms, now) {
                    return None;
                }
                Some((ActionCategory::Drag, format!("Drag move: x={}, y={}", x, y)))
            }
            InputEvent::DragEnd { x, y } => {
                let session = self.drag.take()?;
                let duration_secs = now.saturating_sub(session.start_time) as f64 / 1000.0;
                Some((
                    ActionCategory::Drag,
                    format!("Drag end: x={}, y={}, duration={:.2}s", x, y, duration_secs),
                ))
            }
        }
    }

    /// Consult the throttle for `key` and, on pass, record the emission.
    fn pass(&mut self, key: ThrottleKey, min_interval_ms: u64, now: u64) -> bool {
        let gate = Throttle::new(min_interval_ms);
        if gate.should_emit(self.throttle.last(key), now) {
            self.throttle.mark(key, now);
            true
        } else {
            debug!(?key, now, "event suppressed by throttle");
            false
        }
    }
}
