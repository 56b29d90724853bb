//! Editing session for one document
//!
//! A session is an immutable value: each user action produces a new session.
//! Picking a different file means starting a new session, which drops the
//! previous page size, scale, anchor and assets in one step.

use crate::compositor::{OverlayPresence, PreviewLayout, preview_layout};
use crate::engine::stamp_pdf;
use crate::interaction::{CanvasRect, InteractionTracker, PointerEvent};
use crate::options::OverlayOptions;
use crate::types::*;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Session {
    document: Arc<[u8]>,
    viewport: ViewportState,
    anchor: Option<ClickAnchor>,
    stamp: Option<OverlayAsset>,
    signature: Option<OverlayAsset>,
}

impl Session {
    pub fn new(document: impl Into<Arc<[u8]>>, viewport: ViewportState) -> Self {
        Self {
            document: document.into(),
            viewport,
            anchor: None,
            stamp: None,
            signature: None,
        }
    }

    pub fn document(&self) -> &Arc<[u8]> {
        &self.document
    }

    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    pub fn anchor(&self) -> Option<ClickAnchor> {
        self.anchor
    }

    pub fn asset(&self, kind: OverlayKind) -> Option<&OverlayAsset> {
        match kind {
            OverlayKind::Stamp => self.stamp.as_ref(),
            OverlayKind::Signature => self.signature.as_ref(),
        }
    }

    /// Record a click on the rendered canvas, replacing any previous anchor
    pub fn with_click(self, event: PointerEvent, rect: CanvasRect) -> Self {
        let mut tracker = InteractionTracker::with_anchor(self.viewport.scale, self.anchor);
        let click = tracker.record(event, rect);
        Self {
            anchor: Some(click),
            ..self
        }
    }

    pub fn with_asset(self, asset: OverlayAsset) -> Self {
        match asset.kind {
            OverlayKind::Stamp => Self {
                stamp: Some(asset),
                ..self
            },
            OverlayKind::Signature => Self {
                signature: Some(asset),
                ..self
            },
        }
    }

    pub fn without_asset(self, kind: OverlayKind) -> Self {
        match kind {
            OverlayKind::Stamp => Self {
                stamp: None,
                ..self
            },
            OverlayKind::Signature => Self {
                signature: None,
                ..self
            },
        }
    }

    pub fn presence(&self) -> OverlayPresence {
        OverlayPresence {
            stamp: self.stamp.is_some(),
            signature: self.signature.is_some(),
        }
    }

    /// Preview rectangles, once a click has been recorded
    pub fn preview(&self, options: &OverlayOptions) -> Option<PreviewLayout> {
        self.anchor
            .map(|click| preview_layout(&click, self.presence(), options))
    }

    pub fn request(&self) -> StampRequest {
        StampRequest {
            anchor: self.anchor,
            stamp: self.stamp.as_ref().map(|asset| asset.bytes.clone()),
            signature: self.signature.as_ref().map(|asset| asset.bytes.clone()),
        }
    }

    /// Produce the stamped document for the current state
    pub async fn generate(&self, options: &OverlayOptions) -> Result<Vec<u8>> {
        stamp_pdf(self.document.to_vec(), self.request(), options.clone()).await
    }
}
