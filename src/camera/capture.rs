//! Still-frame capture for the teeth-photo step.
//!
//! The camera is an external collaborator to the measurement core: a frame
//! source is acquired for the lifetime of the capture dialog and released on
//! every exit path, with a single-shot still extraction in between.

use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, RgbImage};
use std::io::Cursor;
use std::process::Command;
use thiserror::Error;

/// Frame dimensions used when no real frame is available.
const FALLBACK_WIDTH: u32 = 720;
const FALLBACK_HEIGHT: u32 = 1280;

/// Camera errors.
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Camera access was denied")]
    PermissionDenied,
    #[error("No camera device available: {0}")]
    DeviceUnavailable(String),
    #[error("Failed to capture frame: {0}")]
    CaptureFailed(String),
    #[error("Captured data is not a valid frame: {0}")]
    InvalidFrame(String),
}

/// A captured still frame.
#[derive(Debug, Clone)]
pub struct StillFrame {
    pub base64_data: String,
    pub width: u32,
    pub height: u32,
}

impl StillFrame {
    /// Create a new frame from already-encoded data.
    pub fn new(base64_data: String, width: u32, height: u32) -> Self {
        Self {
            base64_data,
            width,
            height,
        }
    }

    /// Create a black fallback frame for when capture is unavailable.
    pub fn fallback() -> Self {
        let black = RgbImage::from_fn(FALLBACK_WIDTH, FALLBACK_HEIGHT, |_, _| {
            image::Rgb([0u8, 0u8, 0u8])
        });
        let dynamic = DynamicImage::ImageRgb8(black);

        let mut buffer = Cursor::new(Vec::new());
        let _ = dynamic.write_to(&mut buffer, image::ImageFormat::Png);
        Self::new(
            STANDARD.encode(buffer.into_inner()),
            FALLBACK_WIDTH,
            FALLBACK_HEIGHT,
        )
    }
}

/// Source of raw PNG frame data.
pub trait FrameSource {
    /// Human-readable description for logs.
    fn describe(&self) -> String;

    /// Grab one frame as PNG bytes.
    fn grab(&mut self) -> Result<Vec<u8>, CameraError>;
}

/// Frame source backed by an external capture command that writes a PNG
/// frame to stdout (e.g. `ffmpeg`/`libcamera-still` wrappers).
#[derive(Debug, Clone)]
pub struct CommandFrameSource {
    program: String,
    args: Vec<String>,
}

impl CommandFrameSource {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl FrameSource for CommandFrameSource {
    fn describe(&self) -> String {
        format!("{} {}", self.program, self.args.join(" "))
    }

    fn grab(&mut self) -> Result<Vec<u8>, CameraError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .output()
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::PermissionDenied => CameraError::PermissionDenied,
                std::io::ErrorKind::NotFound => {
                    CameraError::DeviceUnavailable(self.program.clone())
                }
                _ => CameraError::CaptureFailed(e.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            if stderr.to_lowercase().contains("permission") {
                return Err(CameraError::PermissionDenied);
            }
            return Err(CameraError::CaptureFailed(stderr.into_owned()));
        }

        Ok(output.stdout)
    }
}

/// Scoped camera acquisition.
///
/// The wrapped source is held for the lifetime of the session and released
/// on drop, whether the dialog closed normally, the capture failed, or the
/// owning component went away.
pub struct CameraSession<S: FrameSource> {
    source: S,
}

impl<S: FrameSource> CameraSession<S> {
    /// Acquire the frame source.
    pub fn open(source: S) -> Self {
        tracing::debug!(source = %source.describe(), "camera session opened");
        Self { source }
    }

    /// Capture a single still frame.
    ///
    /// Validates the PNG header and decodes dimensions before encoding the
    /// payload, so a garbage frame surfaces as an error instead of a broken
    /// image downstream.
    pub fn capture_still(&mut self) -> Result<StillFrame, CameraError> {
        let png_data = self.source.grab()?;

        if png_data.len() < 8 {
            return Err(CameraError::InvalidFrame(format!(
                "frame too small: {} bytes",
                png_data.len()
            )));
        }
        if &png_data[0..8] != b"\x89PNG\r\n\x1a\n" {
            return Err(CameraError::InvalidFrame("missing PNG header".to_string()));
        }

        let img = image::load_from_memory(&png_data)
            .map_err(|e| CameraError::InvalidFrame(e.to_string()))?;

        Ok(StillFrame::new(
            STANDARD.encode(&png_data),
            img.width(),
            img.height(),
        ))
    }

    /// Capture a still, degrading to the black fallback frame when the
    /// source fails so the owning step can continue. The original error is
    /// handed back alongside the frame for display.
    pub fn capture_still_or_fallback(&mut self) -> (StillFrame, Option<CameraError>) {
        match self.capture_still() {
            Ok(frame) => (frame, None),
            Err(e) => {
                tracing::warn!(error = %e, "capture failed, using fallback frame");
                (StillFrame::fallback(), Some(e))
            }
        }
    }
}

impl<S: FrameSource> Drop for CameraSession<S> {
    fn drop(&mut self) {
        tracing::debug!(source = %self.source.describe(), "camera session released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubSource(Result<Vec<u8>, CameraError>);

    impl FrameSource for StubSource {
        fn describe(&self) -> String {
            "stub".to_string()
        }

        fn grab(&mut self) -> Result<Vec<u8>, CameraError> {
            match &self.0 {
                Ok(bytes) => Ok(bytes.clone()),
                Err(CameraError::PermissionDenied) => Err(CameraError::PermissionDenied),
                Err(e) => Err(CameraError::CaptureFailed(e.to_string())),
            }
        }
    }

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |_, _| image::Rgb([200u8, 10u8, 10u8]));
        let mut buffer = Cursor::new(Vec::new());
        DynamicImage::ImageRgb8(img)
            .write_to(&mut buffer, image::ImageFormat::Png)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn test_capture_still_decodes_dimensions() {
        let mut session = CameraSession::open(StubSource(Ok(png_bytes(64, 48))));
        let frame = session.capture_still().unwrap();
        assert_eq!(frame.width, 64);
        assert_eq!(frame.height, 48);
        assert!(!frame.base64_data.is_empty());
    }

    #[test]
    fn test_garbage_frame_rejected() {
        let mut session = CameraSession::open(StubSource(Ok(vec![0u8; 32])));
        assert!(matches!(
            session.capture_still(),
            Err(CameraError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_short_frame_rejected() {
        let mut session = CameraSession::open(StubSource(Ok(vec![1, 2, 3])));
        assert!(matches!(
            session.capture_still(),
            Err(CameraError::InvalidFrame(_))
        ));
    }

    #[test]
    fn test_permission_denied_propagates() {
        let mut session = CameraSession::open(StubSource(Err(CameraError::PermissionDenied)));
        assert!(matches!(
            session.capture_still(),
            Err(CameraError::PermissionDenied)
        ));
    }

    #[test]
    fn test_failed_capture_degrades_to_fallback() {
        let mut session = CameraSession::open(StubSource(Err(CameraError::CaptureFailed(
            "device busy".to_string(),
        ))));
        let (frame, error) = session.capture_still_or_fallback();
        assert_eq!(frame.width, 720);
        assert_eq!(frame.height, 1280);
        assert!(!frame.base64_data.is_empty());
        assert!(error.is_some());
    }

    #[test]
    fn test_successful_capture_carries_no_error() {
        let mut session = CameraSession::open(StubSource(Ok(png_bytes(64, 48))));
        let (frame, error) = session.capture_still_or_fallback();
        assert_eq!(frame.width, 64);
        assert!(error.is_none());
    }

    #[test]
    fn test_fallback_frame() {
        let frame = StillFrame::fallback();
        assert_eq!(frame.width, 720);
        assert_eq!(frame.height, 1280);
        assert!(!frame.base64_data.is_empty());
    }
}
