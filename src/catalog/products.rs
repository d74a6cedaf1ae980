//! Product catalog shown on the recommendation page.
//!
//! The ranking is static content; no scoring algorithm runs client-side.

use once_cell::sync::Lazy;
use serde::Serialize;

/// The highlighted product at the top of the recommendation page.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedProduct {
    pub brand: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub price_krw: u32,
    pub grip_diameter_mm: f64,
    pub head_width_mm: f64,
    pub bristle: &'static str,
    pub rating: f64,
    pub rating_count: u32,
    pub fit_percent: u32,
}

/// One row of the "users like you preferred" ranking list.
#[derive(Debug, Clone, Serialize)]
pub struct RankedProduct {
    pub rank: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub price_krw: u32,
    pub match_percent: u32,
    pub features: &'static [&'static str],
}

/// Featured recommendation.
pub static FEATURED: Lazy<FeaturedProduct> = Lazy::new(|| FeaturedProduct {
    brand: "Aquila",
    name: "Soft Precision",
    description: "부드러운 실리콘 그립과 초슬림 헤드 구성으로 손 크기와 앞니 폭에 맞게 정교하게 설계된 칫솔입니다.",
    price_krw: 13_900,
    grip_diameter_mm: 18.0,
    head_width_mm: 8.0,
    bristle: "Soft+ · 미세모 38 Cluster",
    rating: 4.7,
    rating_count: 128,
    fit_percent: 93,
});

/// Top-5 ranking filtered to similar users (hand girth ±5mm, front teeth
/// width ±0.5mm in the original copy).
pub static RANKING: Lazy<Vec<RankedProduct>> = Lazy::new(|| {
    vec![
        RankedProduct {
            rank: 1,
            name: "Lumen Wave Pro",
            description: "슬림 헤드 · Soft 모, 추천 적합도 92%",
            price_krw: 12_500,
            match_percent: 92,
            features: &["Soft 모", "슬림 헤드", "4주 교체"],
        },
        RankedProduct {
            rank: 2,
            name: "Puremint Flex Mini",
            description: "좁은 치간용 미니 헤드, 교정 사용자 만족도 높음",
            price_krw: 11_300,
            match_percent: 88,
            features: &["미니 헤드", "교정용", "탄력 모"],
        },
        RankedProduct {
            rank: 3,
            name: "Brillia Gentle Air",
            description: "무게 중심 안정화 · 초미세모, 잇몸 자극 최소화",
            price_krw: 14_200,
            match_percent: 87,
            features: &["초미세모", "무게 밸런스", "민감성"],
        },
        RankedProduct {
            rank: 4,
            name: "Atria Leaf Lite",
            description: "라이트 그립 · 친환경 모, 매월 구독 옵션",
            price_krw: 13_500,
            match_percent: 84,
            features: &["가벼움", "친환경", "구독"],
        },
        RankedProduct {
            rank: 5,
            name: "Mossy Calm Slim",
            description: "연두색 모 패턴 · Soft+, 민감성 잇몸에 최적",
            price_krw: 10_900,
            match_percent: 82,
            features: &["Soft+", "슬림", "민감성"],
        },
    ]
});

/// Format a won amount the way the pages display it (₩12,500).
/// Thousands groups are counted from the right.
pub fn format_krw(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('₩');
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranking_is_sorted_by_match() {
        assert_eq!(RANKING.len(), 5);
        for pair in RANKING.windows(2) {
            assert!(pair[0].match_percent >= pair[1].match_percent);
            assert!(pair[0].rank < pair[1].rank);
        }
    }

    #[test]
    fn test_featured_values() {
        assert_eq!(FEATURED.price_krw, 13_900);
        assert_eq!(FEATURED.head_width_mm, 8.0);
    }

    #[test]
    fn test_format_krw() {
        assert_eq!(format_krw(0), "₩0");
        assert_eq!(format_krw(900), "₩900");
        assert_eq!(format_krw(4_500), "₩4,500");
        assert_eq!(format_krw(9_900), "₩9,900");
        assert_eq!(format_krw(13_900), "₩13,900");
        assert_eq!(format_krw(100_000), "₩100,000");
        assert_eq!(format_krw(1_234_567), "₩1,234,567");
    }

    #[test]
    fn test_format_krw_groups_from_the_right() {
        // Digit counts that are not a multiple of three.
        assert_eq!(format_krw(1_000), "₩1,000");
        assert_eq!(format_krw(10_000), "₩10,000");
        assert_eq!(format_krw(21_750), "₩21,750");
        assert_eq!(format_krw(18_487), "₩18,487");
    }
}
