//! Live overlay preview layout
//!
//! Positions the stamp and signature previews in display pixels around the
//! current anchor. The numbers come from the same [`OverlayOptions`] the
//! engine uses, scaled by the anchor's captured scale, so a preview centre
//! divided by that scale lands on the centre the engine will draw at.

use crate::options::OverlayOptions;
use crate::types::*;

/// Which overlays have an asset loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayPresence {
    pub stamp: bool,
    pub signature: bool,
}

impl OverlayPresence {
    pub fn contains(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Stamp => self.stamp,
            OverlayKind::Signature => self.signature,
        }
    }
}

/// Preview rectangles for the overlays that are present
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PreviewLayout {
    pub stamp: Option<DisplayRect>,
    pub signature: Option<DisplayRect>,
}

impl PreviewLayout {
    pub fn get(&self, kind: OverlayKind) -> Option<DisplayRect> {
        match kind {
            OverlayKind::Stamp => self.stamp,
            OverlayKind::Signature => self.signature,
        }
    }

    /// Overlays in painting order: the stamp is painted last so it stacks on top
    pub fn draw_order(&self) -> impl Iterator<Item = (OverlayKind, DisplayRect)> {
        let signature = self.signature.map(|rect| (OverlayKind::Signature, rect));
        let stamp = self.stamp.map(|rect| (OverlayKind::Stamp, rect));
        signature.into_iter().chain(stamp)
    }
}

/// Lay out the preview squares for an anchor.
pub fn preview_layout(
    click: &ClickAnchor,
    presence: OverlayPresence,
    options: &OverlayOptions,
) -> PreviewLayout {
    let rect_for = |kind: OverlayKind| {
        presence
            .contains(kind)
            .then(|| preview_rect(click, kind, options))
    };

    PreviewLayout {
        stamp: rect_for(OverlayKind::Stamp),
        signature: rect_for(OverlayKind::Signature),
    }
}

/// Preview square for one overlay kind
pub fn preview_rect(click: &ClickAnchor, kind: OverlayKind, options: &OverlayOptions) -> DisplayRect {
    let s = click.scale;
    let edge = options.footprint(kind);
    let (dx, dy) = options.offset(kind);

    // PDF y grows upward, display y grows downward
    DisplayRect {
        left: click.anchor.x + (dx - edge / 2.0) * s,
        top: click.anchor.y - (dy + edge / 2.0) * s,
        width: edge * s,
        height: edge * s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(x: f32, y: f32, scale: f32) -> ClickAnchor {
        ClickAnchor {
            anchor: Anchor::new(x, y),
            scale,
        }
    }

    #[test]
    fn stamp_is_centered_on_anchor() {
        let rect = preview_rect(
            &click(300.0, 400.0, 0.5),
            OverlayKind::Stamp,
            &OverlayOptions::default(),
        );
        assert_eq!(
            rect,
            DisplayRect {
                left: 250.0,
                top: 350.0,
                width: 100.0,
                height: 100.0,
            }
        );
    }

    #[test]
    fn signature_sits_right_of_anchor() {
        let rect = preview_rect(
            &click(300.0, 400.0, 0.5),
            OverlayKind::Signature,
            &OverlayOptions::default(),
        );
        // (ax + 50s, ay - 50s), edge 100s
        assert_eq!(
            rect,
            DisplayRect {
                left: 325.0,
                top: 375.0,
                width: 50.0,
                height: 50.0,
            }
        );
    }

    #[test]
    fn absent_assets_have_no_preview() {
        let layout = preview_layout(
            &click(10.0, 10.0, 1.0),
            OverlayPresence {
                stamp: false,
                signature: true,
            },
            &OverlayOptions::default(),
        );
        assert!(layout.stamp.is_none());
        assert!(layout.signature.is_some());
    }

    #[test]
    fn stamp_paints_above_signature() {
        let layout = preview_layout(
            &click(10.0, 10.0, 1.0),
            OverlayPresence {
                stamp: true,
                signature: true,
            },
            &OverlayOptions::default(),
        );
        let order: Vec<_> = layout.draw_order().map(|(kind, _)| kind).collect();
        assert_eq!(order, vec![OverlayKind::Signature, OverlayKind::Stamp]);
    }
}
