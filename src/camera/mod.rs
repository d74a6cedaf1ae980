//! Scoped camera access for the teeth-photo step.

mod capture;

pub use capture::{CameraError, CameraSession, CommandFrameSource, FrameSource, StillFrame};
