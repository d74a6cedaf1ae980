//! Fitting activity log for the GUI.
//!
//! Keeps a bounded in-memory feed for the log view and mirrors every entry
//! into a per-session `fitting_*.log` file. Measurement and capture events
//! have dedicated entry points so the log carries their identity, not just a
//! preformatted string.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::camera::StillFrame;
use crate::measure::MeasurementRecord;
use crate::settings::AppSettings;

/// Log level enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
    Measure,
    Capture,
}

impl LogLevel {
    /// Get display string for the log level.
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Info => "INFO",
            LogLevel::Success => "SUCCESS",
            LogLevel::Warning => "WARN",
            LogLevel::Error => "ERROR",
            LogLevel::Measure => "MEASURE",
            LogLevel::Capture => "CAPTURE",
        }
    }

    /// Get emoji for the log level.
    pub fn emoji(&self) -> &'static str {
        match self {
            LogLevel::Info => "ℹ️",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
            LogLevel::Measure => "📏",
            LogLevel::Capture => "📷",
        }
    }
}

/// A single log entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub level: LogLevel,
    pub message: String,
}

impl LogEntry {
    /// Create a new log entry.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
        }
    }

    /// Format the log entry for display.
    pub fn format_display(&self) -> String {
        format!(
            "[{}] {} {}",
            self.timestamp.format("%H:%M:%S"),
            self.level.emoji(),
            self.message
        )
    }

    /// Format the log entry for file storage.
    pub fn format_file(&self) -> String {
        format!(
            "[{}] [{}] {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.level.as_str(),
            self.message
        )
    }
}

/// Logger that manages log entries in memory and on disk.
#[derive(Debug, Clone)]
pub struct Logger {
    /// In-memory log entries for display.
    entries: Vec<LogEntry>,
    /// Maximum entries to keep in memory.
    max_entries: usize,
    /// Current session log file path.
    log_file: Option<PathBuf>,
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a new logger.
    pub fn new() -> Self {
        let log_file = Self::create_log_file();
        Self {
            entries: Vec::new(),
            max_entries: 1000,
            log_file,
        }
    }

    /// Create a new log file for this fitting session.
    fn create_log_file() -> Option<PathBuf> {
        let logs_dir = AppSettings::logs_dir()?;
        fs::create_dir_all(&logs_dir).ok()?;

        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let path = logs_dir.join(format!("fitting_{}.log", timestamp));

        let mut file = File::create(&path).ok()?;
        let _ = writeln!(
            file,
            "# BrushFit fitting log, started {}",
            Local::now().format("%Y-%m-%d %H:%M:%S")
        );

        Some(path)
    }

    /// Add a log entry.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        let entry = LogEntry::new(level, message);

        // Write to file
        if let Some(ref path) = self.log_file {
            if let Ok(mut file) = OpenOptions::new().append(true).open(path) {
                let _ = writeln!(file, "{}", entry.format_file());
            }
        }

        // Add to memory
        self.entries.push(entry);

        // Trim if too many entries
        if self.entries.len() > self.max_entries {
            self.entries.remove(0);
        }
    }

    /// Convenience methods for different log levels.
    pub fn info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    pub fn measure(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Measure, message);
    }

    pub fn capture(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Capture, message);
    }

    /// Record a completed hand measurement. The record id is shortened to
    /// eight hex digits, enough to trace a specific attempt across the log.
    pub fn measure_record(&mut self, record: &MeasurementRecord) {
        let id = record.id.simple().to_string();
        let short_id = &id[..8];
        self.log(
            LogLevel::Measure,
            format!(
                "측정 #{} 손 길이 {:.1}mm ({:.3} px/mm)",
                short_id, record.length_mm, record.scale_px_per_mm
            ),
        );
    }

    /// Record a captured still frame with its dimensions.
    pub fn capture_frame(&mut self, frame: &StillFrame) {
        self.log(
            LogLevel::Capture,
            format!("촬영 완료 ({}x{})", frame.width, frame.height),
        );
    }

    /// Get all log entries.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Clear all log entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get the current log file path.
    pub fn log_file_path(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Get formatted log text for display.
    pub fn format_all(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.format_display())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_entry_formats() {
        let entry = LogEntry::new(LogLevel::Measure, "distance 128.5mm");
        assert!(entry.format_display().contains("📏"));
        assert!(entry.format_file().contains("[MEASURE]"));
        assert!(entry.format_file().contains("distance 128.5mm"));
    }

    #[test]
    fn test_level_labels() {
        assert_eq!(LogLevel::Capture.as_str(), "CAPTURE");
        assert_eq!(LogLevel::Error.as_str(), "ERROR");
    }

    #[test]
    fn test_measure_record_entry_carries_identity() {
        let mut logger = Logger::new();
        let record = MeasurementRecord {
            id: Uuid::nil(),
            taken_at: Local::now(),
            length_mm: 128.53,
            scale_px_per_mm: 333.0 / 85.6,
        };
        logger.measure_record(&record);

        let entry = logger.entries().last().unwrap();
        assert_eq!(entry.level, LogLevel::Measure);
        assert!(entry.message.contains("#00000000"));
        assert!(entry.message.contains("128.5mm"));
    }

    #[test]
    fn test_capture_frame_entry() {
        let mut logger = Logger::new();
        logger.capture_frame(&StillFrame::new("Zg==".to_string(), 720, 1280));

        let entry = logger.entries().last().unwrap();
        assert_eq!(entry.level, LogLevel::Capture);
        assert!(entry.message.contains("720x1280"));
    }
}
