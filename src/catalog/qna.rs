//! Q&A board: doctor answers and community threads.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Which board a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum QuestionKind {
    /// Answered by a partnered dentist.
    #[default]
    Doctor,
    /// Open community thread.
    Community,
}

/// One Q&A entry.
#[derive(Debug, Clone, Serialize)]
pub struct Question {
    pub kind: QuestionKind,
    pub author: &'static str,
    pub title: &'static str,
    pub body: &'static str,
    pub answer: Option<&'static str>,
    /// Doctor answers can be subscriber-only.
    pub subscriber_only: bool,
    pub reply_count: u32,
}

impl Question {
    /// Whether the answer text may be shown. Community threads are always
    /// open; subscriber-only doctor answers need an active subscription.
    pub fn answer_visible(&self, subscribed: bool) -> bool {
        match self.kind {
            QuestionKind::Community => true,
            QuestionKind::Doctor => !self.subscriber_only || subscribed,
        }
    }
}

/// Questions on the selected tab.
pub fn questions_for(kind: QuestionKind) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|q| q.kind == kind).collect()
}

pub static QUESTIONS: Lazy<Vec<Question>> = Lazy::new(|| {
    vec![
        Question {
            kind: QuestionKind::Doctor,
            author: "하늘",
            title: "양치할 때마다 피가 나요. 칫솔을 바꿔야 할까요?",
            body: "6개월째 같은 칫솔을 쓰고 있는데 최근 들어 잇몸 출혈이 잦습니다.",
            answer: Some(
                "출혈이 2주 이상 지속되면 치은염 가능성이 있습니다. 미세모로 교체하시고 가까운 치과에서 스케일링을 받아보세요.",
            ),
            subscriber_only: false,
            reply_count: 3,
        },
        Question {
            kind: QuestionKind::Doctor,
            author: "도윤",
            title: "임플란트 주변은 어떻게 닦는 게 좋나요?",
            body: "작년에 어금니 임플란트를 했는데 전용 칫솔이 따로 필요한지 궁금합니다.",
            answer: Some(
                "임플란트 경계부는 치간칫솔과 슬림 헤드 조합을 권장합니다. 자세한 관리 루틴은 구독 회원 상담에서 안내드립니다.",
            ),
            subscriber_only: true,
            reply_count: 1,
        },
        Question {
            kind: QuestionKind::Doctor,
            author: "소율",
            title: "교정 중인데 칫솔모 교체 주기가 달라지나요?",
            body: "브라켓 때문에 모가 빨리 벌어지는 것 같아요.",
            answer: None,
            subscriber_only: false,
            reply_count: 0,
        },
        Question {
            kind: QuestionKind::Community,
            author: "준호",
            title: "구독 배송일 바꿔보신 분 계신가요?",
            body: "매월 5일로 받고 있는데 월말로 옮기고 싶습니다.",
            answer: Some("설정에서 1~28일 사이로 자유롭게 변경돼요. 저는 25일로 받고 있어요."),
            subscriber_only: false,
            reply_count: 5,
        },
        Question {
            kind: QuestionKind::Community,
            author: "유나",
            title: "손 측정 다시 하고 싶을 때 어떻게 하나요?",
            body: "처음 측정이 대충 된 것 같아서요.",
            answer: Some("측정 화면에서 다시 측정을 누르면 점만 지워지고 보정은 유지돼요."),
            subscriber_only: false,
            reply_count: 2,
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_filter_splits_boards() {
        let doctor = questions_for(QuestionKind::Doctor);
        let community = questions_for(QuestionKind::Community);
        assert_eq!(doctor.len() + community.len(), QUESTIONS.len());
        assert!(doctor.iter().all(|q| q.kind == QuestionKind::Doctor));
        assert!(community.iter().all(|q| q.kind == QuestionKind::Community));
    }

    #[test]
    fn test_subscriber_only_answer_hidden_without_subscription() {
        let gated = QUESTIONS
            .iter()
            .find(|q| q.subscriber_only)
            .unwrap();
        assert!(!gated.answer_visible(false));
        assert!(gated.answer_visible(true));
    }

    #[test]
    fn test_community_answers_always_visible() {
        for q in questions_for(QuestionKind::Community) {
            assert!(q.answer_visible(false));
        }
    }
}
