//! Internationalization (i18n) module for UI messages.

/// UI messages structure
#[derive(Debug, Clone)]
pub struct Messages {
    pub app_title: &'static str,
    pub step_basic: &'static str,
    pub step_hand: &'static str,
    pub step_teeth: &'static str,
    pub step_survey: &'static str,
    pub calibration_title: &'static str,
    pub calibration_hint: &'static str,
    pub calibration_done: &'static str,
    pub measurement_title: &'static str,
    pub measurement_hint: &'static str,
    pub measurement_result: &'static str,
    pub retake: &'static str,
    pub recalibrate: &'static str,
    pub next: &'static str,
    pub back: &'static str,
    pub skip: &'static str,
    pub capture: &'static str,
    pub capture_failed: &'static str,
    pub camera_permission_denied: &'static str,
    pub retake_photo: &'static str,
    pub recommend_title: &'static str,
    pub fit_label: &'static str,
    pub subscribe: &'static str,
    pub buy_once: &'static str,
    pub monthly_total: &'static str,
    pub discount: &'static str,
    pub final_price: &'static str,
    pub delivery_day: &'static str,
    pub family_full: &'static str,
    pub settings_saved: &'static str,
}

/// Korean messages
pub static MESSAGES_KO: Messages = Messages {
    app_title: "내 입에 맞는 칫솔 찾기",
    step_basic: "기본 정보",
    step_hand: "손 측정",
    step_teeth: "치아 촬영",
    step_survey: "구강 설문",
    calibration_title: "카드로 화면 보정",
    calibration_hint: "카드(가로 85.6mm)를 화면의 상자에 맞춘 뒤 완료를 누르세요",
    calibration_done: "보정 완료",
    measurement_title: "손 길이 측정",
    measurement_hint: "손바닥 시작점과 중지 끝을 차례로 터치하세요",
    measurement_result: "측정 결과",
    retake: "다시 측정",
    recalibrate: "보정부터 다시",
    next: "다음",
    back: "이전",
    skip: "건너뛰기",
    capture: "촬영",
    capture_failed: "촬영에 실패했습니다",
    camera_permission_denied: "카메라 권한이 필요합니다",
    retake_photo: "다시 촬영",
    recommend_title: "맞춤 추천",
    fit_label: "적합도",
    subscribe: "구독하기",
    buy_once: "한 번만 구매",
    monthly_total: "월 구독료",
    discount: "구독 할인",
    final_price: "최종 결제 금액",
    delivery_day: "배송일",
    family_full: "가족 구성원은 5명까지 등록할 수 있어요",
    settings_saved: "설정이 저장되었습니다",
};

/// English messages
pub static MESSAGES_EN: Messages = Messages {
    app_title: "Find a toothbrush that fits",
    step_basic: "Basic Info",
    step_hand: "Hand Measurement",
    step_teeth: "Teeth Photo",
    step_survey: "Oral Survey",
    calibration_title: "Calibrate with a card",
    calibration_hint: "Match a card (85.6mm wide) to the on-screen box, then confirm",
    calibration_done: "Calibration Done",
    measurement_title: "Measure hand length",
    measurement_hint: "Tap the base of your palm, then the tip of your middle finger",
    measurement_result: "Result",
    retake: "Measure Again",
    recalibrate: "Restart from Calibration",
    next: "Next",
    back: "Back",
    skip: "Skip",
    capture: "Capture",
    capture_failed: "Capture failed",
    camera_permission_denied: "Camera permission required",
    retake_photo: "Retake Photo",
    recommend_title: "Your Recommendation",
    fit_label: "Fit",
    subscribe: "Subscribe",
    buy_once: "Buy Once",
    monthly_total: "Monthly Total",
    discount: "Subscriber Discount",
    final_price: "Final Price",
    delivery_day: "Delivery Day",
    family_full: "Up to 5 family members can be registered",
    settings_saved: "Settings saved",
};

/// Get UI messages by language.
///
/// # Arguments
/// * `lang` - Language code, "ko" for Korean, "en" for English.
///
/// # Returns
/// Reference to Messages struct.
pub fn get_messages(lang: &str) -> &'static Messages {
    match lang {
        "en" => &MESSAGES_EN,
        _ => &MESSAGES_KO,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_messages() {
        let ko = get_messages("ko");
        assert_eq!(ko.next, "다음");

        let en = get_messages("en");
        assert_eq!(en.next, "Next");
    }

    #[test]
    fn test_unknown_language_falls_back_to_korean() {
        assert_eq!(get_messages("fr").next, "다음");
    }
}
