use crate::types::{Anchor, ClickAnchor};

/// A pointer click in window coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub x: f32,
    pub y: f32,
}

/// The canvas's on-screen bounding rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Convert a window-space click into canvas-local display pixels.
pub fn anchor_from_pointer(event: PointerEvent, rect: CanvasRect) -> Anchor {
    Anchor {
        x: event.x - rect.left,
        y: event.y - rect.top,
    }
}

/// Tracks the most recent click on a rendered page.
///
/// Only one anchor is kept; each click replaces the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionTracker {
    scale: f32,
    last: Option<ClickAnchor>,
}

impl InteractionTracker {
    pub fn new(scale: f32) -> Self {
        Self { scale, last: None }
    }

    /// Start from a previously recorded anchor
    pub fn with_anchor(scale: f32, last: Option<ClickAnchor>) -> Self {
        Self { scale, last }
    }

    pub fn record(&mut self, event: PointerEvent, rect: CanvasRect) -> ClickAnchor {
        let click = ClickAnchor {
            anchor: anchor_from_pointer(event, rect),
            scale: self.scale,
        };
        self.last = Some(click);
        click
    }

    pub fn anchor(&self) -> Option<ClickAnchor> {
        self.last
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}
