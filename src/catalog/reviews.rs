//! Review list with the filter chips from the review page.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::profile::{AgeGroup, Gender};

/// A single product review.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub author: &'static str,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub rating: u8,
    pub body: &'static str,
    /// Reviewer reported gum bleeding.
    pub bleeding: bool,
    /// Review concerns an electric toothbrush.
    pub electric: bool,
    pub helpful_count: u32,
}

/// Filter chip state. `None` means the chip is off.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewFilter {
    pub age_group: Option<AgeGroup>,
    pub gender: Option<Gender>,
    /// Only reviews from users with gum bleeding.
    pub bleeding: bool,
    /// Hide electric toothbrush reviews.
    pub exclude_electric: bool,
}

impl ReviewFilter {
    /// Whether a review passes all active chips.
    pub fn matches(&self, review: &Review) -> bool {
        if let Some(age) = self.age_group {
            if review.age_group != age {
                return false;
            }
        }
        if let Some(gender) = self.gender {
            if review.gender != gender {
                return false;
            }
        }
        if self.bleeding && !review.bleeding {
            return false;
        }
        if self.exclude_electric && review.electric {
            return false;
        }
        true
    }

    /// Number of active chips, shown as a badge on the filter button.
    pub fn active_count(&self) -> usize {
        usize::from(self.age_group.is_some())
            + usize::from(self.gender.is_some())
            + usize::from(self.bleeding)
            + usize::from(self.exclude_electric)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Apply a filter over the static review list.
pub fn filtered_reviews(filter: &ReviewFilter) -> Vec<&'static Review> {
    REVIEWS.iter().filter(|r| filter.matches(r)).collect()
}

pub static REVIEWS: Lazy<Vec<Review>> = Lazy::new(|| {
    vec![
        Review {
            author: "민지",
            age_group: AgeGroup::Twenties,
            gender: Gender::Female,
            rating: 5,
            body: "잇몸에서 피가 자주 났는데 모가 부드러워서 2주 만에 출혈이 확실히 줄었어요.",
            bleeding: true,
            electric: false,
            helpful_count: 42,
        },
        Review {
            author: "현우",
            age_group: AgeGroup::Thirties,
            gender: Gender::Male,
            rating: 4,
            body: "그립이 손에 딱 맞아서 안쪽 어금니까지 편하게 닦입니다. 헤드가 조금만 더 길었으면.",
            bleeding: false,
            electric: false,
            helpful_count: 31,
        },
        Review {
            author: "서연",
            age_group: AgeGroup::Twenties,
            gender: Gender::Female,
            rating: 5,
            body: "전동 칫솔 쓰다가 넘어왔는데 수동인데도 세정력이 만족스러워요.",
            bleeding: false,
            electric: true,
            helpful_count: 27,
        },
        Review {
            author: "지훈",
            age_group: AgeGroup::Forties,
            gender: Gender::Male,
            rating: 4,
            body: "치간이 좁은 편이라 슬림 헤드 추천받았는데 끼임 없이 잘 들어갑니다.",
            bleeding: false,
            electric: false,
            helpful_count: 19,
        },
        Review {
            author: "은채",
            age_group: AgeGroup::Thirties,
            gender: Gender::Female,
            rating: 3,
            body: "교정 중이라 브라켓 주변이 걱정이었는데 무난해요. 출혈 있을 땐 더 살살 닦는 걸 추천.",
            bleeding: true,
            electric: false,
            helpful_count: 14,
        },
        Review {
            author: "태양",
            age_group: AgeGroup::Fifties,
            gender: Gender::Male,
            rating: 5,
            body: "전동 헤드 교체 비용이 부담돼서 구독으로 바꿨습니다. 정기 배송이 편하네요.",
            bleeding: false,
            electric: true,
            helpful_count: 11,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_filter_returns_all() {
        let filter = ReviewFilter::default();
        assert_eq!(filtered_reviews(&filter).len(), REVIEWS.len());
        assert_eq!(filter.active_count(), 0);
    }

    #[test]
    fn test_bleeding_filter_keeps_only_bleeding_reviews() {
        let filter = ReviewFilter {
            bleeding: true,
            ..Default::default()
        };
        let out = filtered_reviews(&filter);
        assert!(!out.is_empty());
        assert!(out.iter().all(|r| r.bleeding));
    }

    #[test]
    fn test_exclude_electric_drops_electric_reviews() {
        let filter = ReviewFilter {
            exclude_electric: true,
            ..Default::default()
        };
        let out = filtered_reviews(&filter);
        assert!(out.iter().all(|r| !r.electric));
        assert_eq!(out.len(), REVIEWS.iter().filter(|r| !r.electric).count());
    }

    #[test]
    fn test_combined_filter_and_badge_count() {
        let mut filter = ReviewFilter {
            age_group: Some(AgeGroup::Twenties),
            gender: Some(Gender::Female),
            bleeding: true,
            exclude_electric: false,
        };
        assert_eq!(filter.active_count(), 3);

        let out = filtered_reviews(&filter);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].author, "민지");

        filter.clear();
        assert_eq!(filter.active_count(), 0);
    }
}
