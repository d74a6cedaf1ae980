// Copyright 2026 BrushFit contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # BrushFit
//!
//! Measurement wizard and recommendation screens for a personalized
//! toothbrush fitting service.
//!
//! The engineering core is a calibration-scaled two-click distance
//! measurement: the user matches an on-screen box against a reference card
//! of known width (85.6mm), which fixes a px/mm scale factor, and then the
//! straight-line distance between two touch points converts to millimeters.
//! Around that core sit the profile wizard, a camera collaborator for the
//! teeth-photo step, the static product catalog, and purchase arithmetic.
//!
//! ## Example
//!
//! ```rust
//! use brushfit::measure::{HandSession, SurfaceRect};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut session = HandSession::new();
//!     session.commit_calibration()?;
//!
//!     let surface = SurfaceRect::at_origin(640.0, 360.0);
//!     session.capture(0.0, 0.0, &surface);
//!     session.capture(300.0, 400.0, &surface);
//!
//!     // 500px at the default 333px/85.6mm scale
//!     assert!((session.length_mm().unwrap() - 128.53).abs() < 0.01);
//!     Ok(())
//! }
//! ```

pub mod camera;
pub mod catalog;
pub mod config;
pub mod gui;
pub mod measure;
pub mod pricing;
pub mod profile;
pub mod settings;
pub mod wizard;

pub use camera::{CameraError, CameraSession, CommandFrameSource, FrameSource, StillFrame};
pub use measure::{
    CalibrationError, CaptureOutcome, HandSession, MeasureStage, MeasurementRecord,
    ScaleFactor, SurfacePoint, SurfaceRect,
};
pub use pricing::{FamilyRoster, SinglePurchase, Subscription};
pub use profile::{BasicInfo, SurveyAnswers, TeethReading};
pub use settings::AppSettings;
pub use wizard::{WizardState, WizardStep};
