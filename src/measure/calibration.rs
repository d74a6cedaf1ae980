//! Screen-scale calibration against a physical reference card.
//!
//! The user lays a standard card on the screen and adjusts an on-screen box
//! until its width matches the card. The ratio of box width in pixels to the
//! card's known physical width yields the px/mm scale factor that the
//! distance resolver consumes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical width of the reference card, in millimeters (ISO/IEC 7810 ID-1).
pub const CARD_WIDTH_MM: f64 = 85.6;

/// Smallest reference-box width the slider offers, in pixels.
pub const MIN_BOX_WIDTH_PX: f64 = 200.0;

/// Largest reference-box width the slider offers, in pixels.
pub const MAX_BOX_WIDTH_PX: f64 = 500.0;

/// Initial reference-box width, in pixels.
pub const DEFAULT_BOX_WIDTH_PX: f64 = 333.0;

/// Calibration errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalibrationError {
    #[error("Reference width must be finite, got {0}")]
    NonFinite(f64),
    #[error("Reference width must be positive, got {0}")]
    NonPositive(f64),
}

/// A committed px/mm scale factor. Always strictly positive and finite;
/// constructing one goes through [`derive_scale`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactor(f64);

impl ScaleFactor {
    /// Pixels per millimeter.
    pub fn px_per_mm(&self) -> f64 {
        self.0
    }

    /// Convert a pixel distance into millimeters.
    pub fn mm_from_px(&self, distance_px: f64) -> f64 {
        distance_px / self.0
    }
}

/// Derive the px/mm scale factor from the matched box width and the card's
/// physical width.
///
/// Clamping the box width into the slider bound is the presentation layer's
/// job; this function only rejects inputs no geometry can produce.
pub fn derive_scale(box_width_px: f64, card_width_mm: f64) -> Result<ScaleFactor, CalibrationError> {
    for value in [box_width_px, card_width_mm] {
        if !value.is_finite() {
            return Err(CalibrationError::NonFinite(value));
        }
        if value <= 0.0 {
            return Err(CalibrationError::NonPositive(value));
        }
    }
    Ok(ScaleFactor(box_width_px / card_width_mm))
}

/// Clamp a slider value into the reference-box bound.
pub fn clamp_box_width(width_px: f64) -> f64 {
    width_px.clamp(MIN_BOX_WIDTH_PX, MAX_BOX_WIDTH_PX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_is_width_over_card() {
        let scale = derive_scale(333.0, CARD_WIDTH_MM).unwrap();
        assert!((scale.px_per_mm() - 333.0 / 85.6).abs() < 1e-12);
    }

    #[test]
    fn test_scale_positive_over_whole_bound() {
        let mut width = MIN_BOX_WIDTH_PX;
        while width <= MAX_BOX_WIDTH_PX {
            let scale = derive_scale(width, CARD_WIDTH_MM).unwrap();
            assert!(scale.px_per_mm() > 0.0);
            assert_eq!(scale.px_per_mm(), width / CARD_WIDTH_MM);
            width += 1.0;
        }
    }

    #[test]
    fn test_zero_width_rejected() {
        assert_eq!(
            derive_scale(0.0, CARD_WIDTH_MM),
            Err(CalibrationError::NonPositive(0.0))
        );
    }

    #[test]
    fn test_negative_width_rejected() {
        assert!(matches!(
            derive_scale(-10.0, CARD_WIDTH_MM),
            Err(CalibrationError::NonPositive(_))
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            derive_scale(f64::NAN, CARD_WIDTH_MM),
            Err(CalibrationError::NonFinite(_))
        ));
        assert!(matches!(
            derive_scale(333.0, f64::INFINITY),
            Err(CalibrationError::NonFinite(_))
        ));
    }

    #[test]
    fn test_mm_from_px() {
        let scale = derive_scale(333.0, CARD_WIDTH_MM).unwrap();
        let mm = scale.mm_from_px(500.0);
        assert!((mm - 128.528).abs() < 0.01);
    }

    #[test]
    fn test_clamp_box_width() {
        assert_eq!(clamp_box_width(100.0), MIN_BOX_WIDTH_PX);
        assert_eq!(clamp_box_width(650.0), MAX_BOX_WIDTH_PX);
        assert_eq!(clamp_box_width(333.0), 333.0);
    }
}
