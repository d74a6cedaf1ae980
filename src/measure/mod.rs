//! Calibration-scaled distance measurement for the hand step.

mod calibration;
mod geometry;
mod overlay;
mod session;

pub use calibration::{
    clamp_box_width, derive_scale, CalibrationError, ScaleFactor, CARD_WIDTH_MM,
    DEFAULT_BOX_WIDTH_PX, MAX_BOX_WIDTH_PX, MIN_BOX_WIDTH_PX,
};
pub use geometry::{SurfacePoint, SurfaceRect};
pub use overlay::render_snapshot;
pub use session::{CaptureOutcome, HandSession, MeasureStage, MeasurementRecord};
