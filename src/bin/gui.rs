//! GUI entry point.
//!
//! Run with: cargo run --bin brushfit-gui

use iced::Size;

use brushfit::gui::BrushFitApp;

fn main() -> iced::Result {
    iced::application(BrushFitApp::title, BrushFitApp::update, BrushFitApp::view)
        .theme(BrushFitApp::theme)
        .window_size(Size::new(900.0, 700.0))
        .run_with(|| (BrushFitApp::new(), iced::Task::none()))
}
