//! Health survey step and gum-risk weighting.

use serde::{Deserialize, Serialize};

use super::basic::BasicInfo;

/// How often a symptom occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymptomFrequency {
    Often,
    Sometimes,
    Never,
}

impl SymptomFrequency {
    pub const ALL: [SymptomFrequency; 3] = [
        SymptomFrequency::Often,
        SymptomFrequency::Sometimes,
        SymptomFrequency::Never,
    ];

    fn weight(&self) -> u32 {
        match self {
            SymptomFrequency::Often => 2,
            SymptomFrequency::Sometimes => 1,
            SymptomFrequency::Never => 0,
        }
    }
}

impl std::fmt::Display for SymptomFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymptomFrequency::Often => write!(f, "자주"),
            SymptomFrequency::Sometimes => write!(f, "가끔"),
            SymptomFrequency::Never => write!(f, "없음"),
        }
    }
}

/// Interdental spacing as the user perceives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapSpacing {
    Wide,
    Normal,
    Tight,
}

impl GapSpacing {
    pub const ALL: [GapSpacing; 3] = [GapSpacing::Wide, GapSpacing::Normal, GapSpacing::Tight];
}

impl std::fmt::Display for GapSpacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GapSpacing::Wide => write!(f, "벌어짐"),
            GapSpacing::Normal => write!(f, "보통"),
            GapSpacing::Tight => write!(f, "촘촘"),
        }
    }
}

/// Answers collected by the survey step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SurveyAnswers {
    pub gum_bleeding: Option<SymptomFrequency>,
    pub cold_sensitivity: Option<SymptomFrequency>,
    pub gap_spacing: Option<GapSpacing>,
    pub braces: bool,
    pub implant: bool,
    pub gum_disease_diagnosed: bool,
}

impl SurveyAnswers {
    /// Whether all required questions were answered.
    pub fn is_complete(&self) -> bool {
        self.gum_bleeding.is_some()
            && self.cold_sensitivity.is_some()
            && self.gap_spacing.is_some()
    }

    /// Additive gum-risk score used to bias recommendation priority.
    ///
    /// Survey symptoms, a confirmed diagnosis and the lifestyle flags from
    /// the basic step each contribute; the score only reorders priorities,
    /// it is not a ranking algorithm.
    pub fn gum_risk_score(&self, basic: &BasicInfo) -> u32 {
        let mut score = 0;
        if let Some(bleeding) = self.gum_bleeding {
            score += bleeding.weight() * 2;
        }
        if let Some(sensitivity) = self.cold_sensitivity {
            score += sensitivity.weight();
        }
        if self.gum_disease_diagnosed {
            score += 3;
        }
        if basic.smoking {
            score += 2;
        }
        if basic.diabetes {
            score += 2;
        }
        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completeness() {
        let mut survey = SurveyAnswers::default();
        assert!(!survey.is_complete());

        survey.gum_bleeding = Some(SymptomFrequency::Sometimes);
        survey.cold_sensitivity = Some(SymptomFrequency::Never);
        survey.gap_spacing = Some(GapSpacing::Normal);
        assert!(survey.is_complete());
    }

    #[test]
    fn test_risk_score_empty() {
        let survey = SurveyAnswers::default();
        assert_eq!(survey.gum_risk_score(&BasicInfo::default()), 0);
    }

    #[test]
    fn test_risk_score_weighting() {
        let survey = SurveyAnswers {
            gum_bleeding: Some(SymptomFrequency::Often),
            cold_sensitivity: Some(SymptomFrequency::Sometimes),
            gap_spacing: Some(GapSpacing::Wide),
            gum_disease_diagnosed: true,
            ..Default::default()
        };
        let basic = BasicInfo {
            smoking: true,
            diabetes: false,
            ..Default::default()
        };
        // bleeding 2*2 + sensitivity 1 + diagnosis 3 + smoking 2
        assert_eq!(survey.gum_risk_score(&basic), 10);
    }
}
