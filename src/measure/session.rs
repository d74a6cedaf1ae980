//! Hand-measurement session state machine.
//!
//! One session covers a single measurement attempt, from calibration through
//! result or reset: `Calibration → Measurement → Complete`, with explicit
//! reverse transitions (retake keeps the scale factor, returning to
//! calibration discards it). All transitions are plain methods on the
//! session, so the flow is unit-testable without any rendering layer.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::calibration::{
    clamp_box_width, derive_scale, CalibrationError, ScaleFactor, CARD_WIDTH_MM,
    DEFAULT_BOX_WIDTH_PX,
};
use super::geometry::{SurfacePoint, SurfaceRect};

/// Current stage of the hand-measurement flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MeasureStage {
    /// Matching the on-screen box against the reference card.
    #[default]
    Calibration,
    /// Waiting for the two anchor clicks.
    Measurement,
    /// Both anchors captured and a length resolved.
    Complete,
}

/// Outcome of a capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    /// The point was recorded as the start anchor.
    Recorded,
    /// The point was recorded as the end anchor and the length resolved.
    Resolved,
    /// The event arrived outside the measurement stage, with two points
    /// already held, or outside the surface. Nothing changed.
    Ignored,
}

/// A finished measurement, suitable for export or history display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasurementRecord {
    pub id: Uuid,
    pub taken_at: DateTime<Local>,
    pub length_mm: f64,
    pub scale_px_per_mm: f64,
}

/// State of one hand-measurement attempt.
///
/// At most two points are ever held; a third capture attempt is a no-op.
/// The committed scale factor is never recomputed silently; only the
/// explicit [`HandSession::reset_to_calibration`] transition discards it.
#[derive(Debug, Clone)]
pub struct HandSession {
    stage: MeasureStage,
    box_width_px: f64,
    scale: Option<ScaleFactor>,
    points: Vec<SurfacePoint>,
    length_mm: Option<f64>,
}

impl Default for HandSession {
    fn default() -> Self {
        Self::new()
    }
}

impl HandSession {
    /// Create an empty session in the calibration stage.
    pub fn new() -> Self {
        Self {
            stage: MeasureStage::Calibration,
            box_width_px: DEFAULT_BOX_WIDTH_PX,
            scale: None,
            points: Vec::with_capacity(2),
            length_mm: None,
        }
    }

    /// Current stage.
    pub fn stage(&self) -> MeasureStage {
        self.stage
    }

    /// Current reference-box width in pixels.
    pub fn box_width_px(&self) -> f64 {
        self.box_width_px
    }

    /// Adjust the reference-box width, clamped into the slider bound.
    /// Only meaningful during calibration; ignored afterwards so an
    /// in-progress measurement can never pick up a stale slider event.
    pub fn set_box_width(&mut self, width_px: f64) {
        if self.stage == MeasureStage::Calibration {
            self.box_width_px = clamp_box_width(width_px);
        }
    }

    /// The committed scale factor, if calibration has been confirmed.
    pub fn scale(&self) -> Option<ScaleFactor> {
        self.scale
    }

    /// Captured anchor points, in click order (start first).
    pub fn points(&self) -> &[SurfacePoint] {
        &self.points
    }

    /// The resolved length in millimeters, present only once two points are
    /// captured under a committed scale factor. Never a fabricated zero.
    pub fn length_mm(&self) -> Option<f64> {
        self.length_mm
    }

    /// Confirm calibration: derive the scale factor from the current box
    /// width and unlock the measurement stage.
    ///
    /// On failure the session stays in the calibration stage untouched.
    pub fn commit_calibration(&mut self) -> Result<ScaleFactor, CalibrationError> {
        if self.stage != MeasureStage::Calibration {
            // Committing twice would silently invalidate captured points.
            return self.scale.ok_or(CalibrationError::NonPositive(0.0));
        }
        let scale = derive_scale(self.box_width_px, CARD_WIDTH_MM)?;
        self.scale = Some(scale);
        self.stage = MeasureStage::Measurement;
        tracing::debug!(px_per_mm = scale.px_per_mm(), "calibration committed");
        Ok(scale)
    }

    /// Record a raw pointer coordinate against the capture surface.
    ///
    /// The coordinate is normalized into surface-relative space; points
    /// landing outside the surface, arriving outside the measurement stage,
    /// or arriving once two anchors exist are silently ignored.
    pub fn capture(&mut self, raw_x: f64, raw_y: f64, rect: &SurfaceRect) -> CaptureOutcome {
        if self.stage != MeasureStage::Measurement || self.points.len() >= 2 {
            return CaptureOutcome::Ignored;
        }

        let point = rect.normalize(raw_x, raw_y);
        if !rect.contains(&point) {
            return CaptureOutcome::Ignored;
        }

        self.points.push(point);
        if self.points.len() == 2 {
            if let Some(scale) = self.scale {
                let distance_px = self.points[0].distance_to(&self.points[1]);
                self.length_mm = Some(scale.mm_from_px(distance_px));
                self.stage = MeasureStage::Complete;
                return CaptureOutcome::Resolved;
            }
        }
        CaptureOutcome::Recorded
    }

    /// Discard points and result but keep the scale factor, returning to the
    /// measurement stage for another attempt.
    pub fn retake(&mut self) {
        self.points.clear();
        self.length_mm = None;
        if self.scale.is_some() {
            self.stage = MeasureStage::Measurement;
        }
    }

    /// Full reset: additionally discard the scale factor and return to the
    /// calibration stage.
    pub fn reset_to_calibration(&mut self) {
        self.points.clear();
        self.length_mm = None;
        self.scale = None;
        self.stage = MeasureStage::Calibration;
    }

    /// Export the completed measurement, if there is one.
    pub fn record(&self) -> Option<MeasurementRecord> {
        let length_mm = self.length_mm?;
        let scale = self.scale?;
        Some(MeasurementRecord {
            id: Uuid::new_v4(),
            taken_at: Local::now(),
            length_mm,
            scale_px_per_mm: scale.px_per_mm(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> SurfaceRect {
        SurfaceRect::at_origin(640.0, 360.0)
    }

    fn calibrated_session() -> HandSession {
        let mut session = HandSession::new();
        session.commit_calibration().unwrap();
        session
    }

    #[test]
    fn test_initial_state() {
        let session = HandSession::new();
        assert_eq!(session.stage(), MeasureStage::Calibration);
        assert_eq!(session.box_width_px(), DEFAULT_BOX_WIDTH_PX);
        assert!(session.scale().is_none());
        assert!(session.points().is_empty());
        assert!(session.length_mm().is_none());
    }

    #[test]
    fn test_commit_calibration_unlocks_measurement() {
        let mut session = HandSession::new();
        let scale = session.commit_calibration().unwrap();
        assert_eq!(session.stage(), MeasureStage::Measurement);
        assert!((scale.px_per_mm() - 333.0 / 85.6).abs() < 1e-12);
    }

    #[test]
    fn test_box_width_clamped_and_frozen_after_commit() {
        let mut session = HandSession::new();
        session.set_box_width(900.0);
        assert_eq!(session.box_width_px(), 500.0);
        session.commit_calibration().unwrap();
        session.set_box_width(250.0);
        assert_eq!(session.box_width_px(), 500.0);
    }

    #[test]
    fn test_known_distance_resolves() {
        let mut session = calibrated_session();
        assert_eq!(session.capture(0.0, 0.0, &rect()), CaptureOutcome::Recorded);
        assert_eq!(
            session.capture(300.0, 400.0, &rect()),
            CaptureOutcome::Resolved
        );
        assert_eq!(session.stage(), MeasureStage::Complete);
        let length = session.length_mm().unwrap();
        // 500 px at 333/85.6 px/mm
        assert!((length - 128.53).abs() < 0.01);
    }

    #[test]
    fn test_coincident_points_yield_zero() {
        let mut session = calibrated_session();
        session.capture(120.0, 80.0, &rect());
        session.capture(120.0, 80.0, &rect());
        assert_eq!(session.length_mm(), Some(0.0));
    }

    #[test]
    fn test_capture_before_calibration_ignored() {
        let mut session = HandSession::new();
        assert_eq!(session.capture(10.0, 10.0, &rect()), CaptureOutcome::Ignored);
        assert!(session.points().is_empty());
    }

    #[test]
    fn test_third_capture_is_noop() {
        let mut session = calibrated_session();
        session.capture(0.0, 0.0, &rect());
        session.capture(300.0, 400.0, &rect());
        let length_before = session.length_mm();

        assert_eq!(session.capture(50.0, 50.0, &rect()), CaptureOutcome::Ignored);
        assert_eq!(session.points().len(), 2);
        assert_eq!(session.length_mm(), length_before);
    }

    #[test]
    fn test_capture_outside_surface_ignored() {
        let mut session = calibrated_session();
        assert_eq!(
            session.capture(-5.0, 10.0, &rect()),
            CaptureOutcome::Ignored
        );
        assert_eq!(
            session.capture(641.0, 10.0, &rect()),
            CaptureOutcome::Ignored
        );
        assert!(session.points().is_empty());
    }

    #[test]
    fn test_normalization_against_offset_rect() {
        let mut session = calibrated_session();
        let offset = SurfaceRect::new(100.0, 50.0, 640.0, 360.0);
        session.capture(100.0, 50.0, &offset);
        session.capture(400.0, 450.0, &offset);
        assert_eq!(session.points()[0], SurfacePoint::new(0.0, 0.0));
        assert_eq!(session.points()[1], SurfacePoint::new(300.0, 400.0));
        assert!((session.length_mm().unwrap() - 128.53).abs() < 0.01);
    }

    #[test]
    fn test_no_premature_resolution() {
        let mut session = calibrated_session();
        assert!(session.length_mm().is_none());
        session.capture(10.0, 10.0, &rect());
        assert!(session.length_mm().is_none());
        assert!(session.record().is_none());
    }

    #[test]
    fn test_retake_keeps_scale() {
        let mut session = calibrated_session();
        let scale = session.scale();
        session.capture(0.0, 0.0, &rect());
        session.capture(30.0, 40.0, &rect());

        session.retake();
        assert_eq!(session.stage(), MeasureStage::Measurement);
        assert!(session.points().is_empty());
        assert!(session.length_mm().is_none());
        assert_eq!(session.scale(), scale);
    }

    #[test]
    fn test_reset_to_calibration_drops_scale() {
        let mut session = calibrated_session();
        session.capture(0.0, 0.0, &rect());
        session.capture(30.0, 40.0, &rect());

        session.reset_to_calibration();
        assert_eq!(session.stage(), MeasureStage::Calibration);
        assert!(session.scale().is_none());
        assert!(session.points().is_empty());
        assert!(session.length_mm().is_none());
    }

    #[test]
    fn test_record_export() {
        let mut session = calibrated_session();
        session.capture(0.0, 0.0, &rect());
        session.capture(300.0, 400.0, &rect());
        let record = session.record().unwrap();
        assert!((record.length_mm - 128.53).abs() < 0.01);
        assert!((record.scale_px_per_mm - 333.0 / 85.6).abs() < 1e-12);
    }
}
