//! Step ordering and aggregate state for the measurement wizard.

use serde::{Deserialize, Serialize};

use crate::camera::StillFrame;
use crate::measure::HandSession;
use crate::profile::{BasicInfo, SurveyAnswers, TeethReading};

/// Wizard steps, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WizardStep {
    #[default]
    Basic,
    Hand,
    Teeth,
    Survey,
}

/// Fixed step order.
pub const STEP_ORDER: [WizardStep; 4] = [
    WizardStep::Basic,
    WizardStep::Hand,
    WizardStep::Teeth,
    WizardStep::Survey,
];

impl WizardStep {
    /// Zero-based position in [`STEP_ORDER`].
    pub fn index(&self) -> usize {
        STEP_ORDER.iter().position(|s| s == self).unwrap_or(0)
    }

    /// The following step, if any.
    pub fn next(&self) -> Option<WizardStep> {
        STEP_ORDER.get(self.index() + 1).copied()
    }

    /// The preceding step, if any.
    pub fn prev(&self) -> Option<WizardStep> {
        self.index().checked_sub(1).and_then(|i| STEP_ORDER.get(i)).copied()
    }
}

/// Aggregate state of one wizard run.
#[derive(Debug, Clone, Default)]
pub struct WizardState {
    step: WizardStep,
    /// Highest step index visited so far; earlier steps stay clickable.
    reached: usize,
    pub basic: BasicInfo,
    pub hand: HandSession,
    pub teeth_frame: Option<StillFrame>,
    pub teeth: Option<TeethReading>,
    pub survey: SurveyAnswers,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Currently active step.
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Progress across the step bar, 0.0 at the first step, 1.0 at the last.
    pub fn progress(&self) -> f64 {
        let total = STEP_ORDER.len();
        if total <= 1 {
            return 1.0;
        }
        self.step.index() as f64 / (total - 1) as f64
    }

    /// Whether a step can be selected directly: only steps already reached.
    pub fn can_select(&self, step: WizardStep) -> bool {
        step.index() <= self.reached
    }

    /// Jump to an already-reached step; later steps are not reachable by
    /// direct selection.
    pub fn select(&mut self, step: WizardStep) -> bool {
        if self.can_select(step) {
            self.step = step;
            true
        } else {
            false
        }
    }

    /// Advance to the next step, marking it as reached.
    pub fn advance(&mut self) -> Option<WizardStep> {
        let next = self.step.next()?;
        self.step = next;
        self.reached = self.reached.max(next.index());
        Some(next)
    }

    /// Whether a step's completion requirement is met.
    pub fn is_step_complete(&self, step: WizardStep) -> bool {
        match step {
            WizardStep::Basic => self.basic.is_complete(),
            WizardStep::Hand => self.hand.length_mm().is_some(),
            // The teeth photo can be skipped, as in the original flow.
            WizardStep::Teeth => true,
            WizardStep::Survey => self.survey.is_complete(),
        }
    }

    /// Attach a captured teeth frame together with its analysis reading.
    pub fn attach_teeth_frame(&mut self, frame: StillFrame) {
        self.teeth_frame = Some(frame);
        self.teeth = Some(TeethReading::default());
    }

    /// Discard the captured frame and reading for a re-shoot.
    pub fn discard_teeth_frame(&mut self) {
        self.teeth_frame = None;
        self.teeth = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_navigation() {
        assert_eq!(WizardStep::Basic.next(), Some(WizardStep::Hand));
        assert_eq!(WizardStep::Survey.next(), None);
        assert_eq!(WizardStep::Basic.prev(), None);
        assert_eq!(WizardStep::Teeth.prev(), Some(WizardStep::Hand));
    }

    #[test]
    fn test_progress_fraction() {
        let mut state = WizardState::new();
        assert_eq!(state.progress(), 0.0);
        state.advance();
        assert!((state.progress() - 1.0 / 3.0).abs() < 1e-12);
        state.advance();
        state.advance();
        assert_eq!(state.progress(), 1.0);
    }

    #[test]
    fn test_future_steps_not_selectable() {
        let mut state = WizardState::new();
        assert!(!state.select(WizardStep::Survey));
        assert_eq!(state.step(), WizardStep::Basic);

        state.advance();
        state.advance();
        // Going back to an earlier step is allowed…
        assert!(state.select(WizardStep::Basic));
        // …and the previously reached step stays reachable.
        assert!(state.select(WizardStep::Teeth));
    }

    #[test]
    fn test_teeth_frame_attach_and_discard() {
        let mut state = WizardState::new();
        assert!(state.is_step_complete(WizardStep::Teeth));

        state.attach_teeth_frame(crate::camera::StillFrame::fallback());
        assert!(state.teeth.is_some());

        state.discard_teeth_frame();
        assert!(state.teeth.is_none());
        assert!(state.teeth_frame.is_none());
    }
}
