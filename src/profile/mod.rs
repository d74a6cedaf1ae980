//! User profile data collected by the wizard.

mod basic;
mod survey;
mod teeth;

pub use basic::{AgeGroup, BasicInfo, BrushFrequency, Gender, ReplaceCycle};
pub use survey::{GapSpacing, SurveyAnswers, SymptomFrequency};
pub use teeth::TeethReading;
