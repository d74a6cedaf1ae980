//! Measurement wizard flow.

mod flow;

pub use flow::{WizardState, WizardStep, STEP_ORDER};
