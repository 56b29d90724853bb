use crate::constants::*;
use crate::types::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How much of the window the rendered page may occupy
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewportOptions {
    pub width_fraction: f32,
    pub height_fraction: f32,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            width_fraction: VIEWPORT_WIDTH_FRACTION,
            height_fraction: VIEWPORT_HEIGHT_FRACTION,
        }
    }
}

/// Overlay placement configuration shared by the preview and the engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct OverlayOptions {
    /// Stamp width in PDF points
    pub stamp_footprint_pt: f32,
    /// Signature width in PDF points
    pub signature_footprint_pt: f32,
    /// Signature center relative to the stamp center (x right, y up), in PDF points
    pub signature_offset_pt: (f32, f32),
    pub viewport: ViewportOptions,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            stamp_footprint_pt: STAMP_FOOTPRINT_PT,
            signature_footprint_pt: SIGNATURE_FOOTPRINT_PT,
            signature_offset_pt: SIGNATURE_OFFSET_PT,
            viewport: ViewportOptions::default(),
        }
    }
}

impl OverlayOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options: Self = serde_json::from_slice(&bytes)
            .map_err(|e| StampError::Config(format!("Failed to parse config: {}", e)))?;
        options.validate()?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| StampError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Footprint width for an overlay kind, in PDF points
    pub fn footprint(&self, kind: OverlayKind) -> f32 {
        match kind {
            OverlayKind::Stamp => self.stamp_footprint_pt,
            OverlayKind::Signature => self.signature_footprint_pt,
        }
    }

    /// Center offset of an overlay kind from the anchor, in PDF points
    pub fn offset(&self, kind: OverlayKind) -> (f32, f32) {
        match kind {
            OverlayKind::Stamp => (0.0, 0.0),
            OverlayKind::Signature => self.signature_offset_pt,
        }
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        for kind in [OverlayKind::Stamp, OverlayKind::Signature] {
            let footprint = self.footprint(kind);
            if !(footprint.is_finite() && footprint > 0.0) {
                return Err(StampError::Config(format!(
                    "{} footprint must be a positive number of points, got {}",
                    kind.label(),
                    footprint
                )));
            }
        }

        let (dx, dy) = self.signature_offset_pt;
        if !(dx.is_finite() && dy.is_finite()) {
            return Err(StampError::Config(
                "Signature offset must be finite".to_string(),
            ));
        }

        let ViewportOptions {
            width_fraction,
            height_fraction,
        } = self.viewport;
        if !(width_fraction > 0.0 && width_fraction <= 1.0)
            || !(height_fraction > 0.0 && height_fraction <= 1.0)
        {
            return Err(StampError::Config(format!(
                "Viewport fractions must be in (0, 1], got {} x {}",
                width_fraction, height_fraction
            )));
        }

        Ok(())
    }
}
