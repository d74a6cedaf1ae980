//! Basic-information step of the measurement wizard.

use serde::{Deserialize, Serialize};

/// Age group options offered by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AgeGroup {
    Teens,
    Twenties,
    Thirties,
    Forties,
    Fifties,
    SixtyPlus,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 6] = [
        AgeGroup::Teens,
        AgeGroup::Twenties,
        AgeGroup::Thirties,
        AgeGroup::Forties,
        AgeGroup::Fifties,
        AgeGroup::SixtyPlus,
    ];

    /// Stable code used in settings and review filters.
    pub fn as_code(&self) -> &'static str {
        match self {
            AgeGroup::Teens => "10",
            AgeGroup::Twenties => "20",
            AgeGroup::Thirties => "30",
            AgeGroup::Forties => "40",
            AgeGroup::Fifties => "50",
            AgeGroup::SixtyPlus => "60+",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.as_code() == code)
    }
}

impl std::fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AgeGroup::SixtyPlus => write!(f, "60대 이상"),
            other => write!(f, "{}대", other.as_code()),
        }
    }
}

/// Gender selection; disclosure is optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
    #[default]
    Undisclosed,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Female, Gender::Male, Gender::Undisclosed];
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Female => write!(f, "여성"),
            Gender::Male => write!(f, "남성"),
            Gender::Undisclosed => write!(f, "선택 안 함"),
        }
    }
}

/// Daily brushing frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BrushFrequency {
    Once,
    Twice,
    ThreeTimes,
    FourPlus,
}

impl BrushFrequency {
    pub const ALL: [BrushFrequency; 4] = [
        BrushFrequency::Once,
        BrushFrequency::Twice,
        BrushFrequency::ThreeTimes,
        BrushFrequency::FourPlus,
    ];
}

impl std::fmt::Display for BrushFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrushFrequency::Once => write!(f, "1회"),
            BrushFrequency::Twice => write!(f, "2회"),
            BrushFrequency::ThreeTimes => write!(f, "3회"),
            BrushFrequency::FourPlus => write!(f, "4회 이상"),
        }
    }
}

/// Brush replacement cycle, in weeks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReplaceCycle {
    OneWeek,
    TwoWeeks,
    ThreeWeeks,
    FourWeeks,
    SixWeeks,
    EightPlusWeeks,
}

impl ReplaceCycle {
    pub const ALL: [ReplaceCycle; 6] = [
        ReplaceCycle::OneWeek,
        ReplaceCycle::TwoWeeks,
        ReplaceCycle::ThreeWeeks,
        ReplaceCycle::FourWeeks,
        ReplaceCycle::SixWeeks,
        ReplaceCycle::EightPlusWeeks,
    ];

    /// Weeks represented by this cycle (lower bound for the open-ended one).
    pub fn weeks(&self) -> u32 {
        match self {
            ReplaceCycle::OneWeek => 1,
            ReplaceCycle::TwoWeeks => 2,
            ReplaceCycle::ThreeWeeks => 3,
            ReplaceCycle::FourWeeks => 4,
            ReplaceCycle::SixWeeks => 6,
            ReplaceCycle::EightPlusWeeks => 8,
        }
    }

    /// Whether the cycle exceeds the recommended four weeks.
    pub fn exceeds_recommended(&self) -> bool {
        self.weeks() > 4
    }
}

impl std::fmt::Display for ReplaceCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplaceCycle::EightPlusWeeks => write!(f, "8주 이상"),
            other => write!(f, "{}주", other.weeks()),
        }
    }
}

/// Everything collected by the basic-information form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicInfo {
    pub name: String,
    pub age_group: Option<AgeGroup>,
    pub gender: Gender,
    pub brush_frequency: Option<BrushFrequency>,
    pub replace_cycle: Option<ReplaceCycle>,
    pub smoking: bool,
    pub diabetes: bool,
}

impl BasicInfo {
    /// Whether every required field has been filled in.
    /// Gender is optional; lifestyle checkboxes default to off.
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty()
            && self.age_group.is_some()
            && self.brush_frequency.is_some()
            && self.replace_cycle.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_age_group_codes_round_trip() {
        for group in AgeGroup::ALL {
            assert_eq!(AgeGroup::from_code(group.as_code()), Some(group));
        }
        assert_eq!(AgeGroup::from_code("70"), None);
    }

    #[test]
    fn test_replace_cycle_recommendation() {
        assert!(!ReplaceCycle::FourWeeks.exceeds_recommended());
        assert!(ReplaceCycle::SixWeeks.exceeds_recommended());
        assert!(ReplaceCycle::EightPlusWeeks.exceeds_recommended());
    }

    #[test]
    fn test_completeness() {
        let mut info = BasicInfo::default();
        assert!(!info.is_complete());

        info.name = "지민".to_string();
        info.age_group = Some(AgeGroup::Twenties);
        info.brush_frequency = Some(BrushFrequency::Twice);
        assert!(!info.is_complete());

        info.replace_cycle = Some(ReplaceCycle::FourWeeks);
        assert!(info.is_complete());

        info.name = "   ".to_string();
        assert!(!info.is_complete());
    }
}
