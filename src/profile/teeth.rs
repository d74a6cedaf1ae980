//! Teeth-photo analysis result.
//!
//! The analysis backend is not part of this repository; a captured frame is
//! paired with the canned reading the original client displays.

use serde::{Deserialize, Serialize};

/// Measurements derived from a teeth photo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeethReading {
    /// Front teeth width, mm.
    pub front_teeth_width_mm: f64,
    /// Molar height, mm.
    pub molar_height_mm: f64,
    /// Recommended brush head width, mm.
    pub head_width_mm: f64,
    /// Gum line slope, degrees.
    pub gum_line_slope_deg: f64,
}

impl Default for TeethReading {
    fn default() -> Self {
        Self {
            front_teeth_width_mm: 8.4,
            molar_height_mm: 9.1,
            head_width_mm: 8.0,
            gum_line_slope_deg: 12.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reading_matches_displayed_values() {
        let reading = TeethReading::default();
        assert_eq!(reading.front_teeth_width_mm, 8.4);
        assert_eq!(reading.molar_height_mm, 9.1);
        assert_eq!(reading.head_width_mm, 8.0);
        assert_eq!(reading.gum_line_slope_deg, 12.0);
    }
}
