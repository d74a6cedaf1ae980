//! GUI module.
//!
//! Provides a graphical user interface using Iced.

pub mod app;
pub mod logger;
pub mod surface;

pub use app::BrushFitApp;
pub use logger::{LogEntry, LogLevel, Logger};
pub use surface::MeasureSurface;
