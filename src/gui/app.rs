//! Main Iced application for the toothbrush fitting GUI.

use iced::widget::{
    button, canvas, column, container, horizontal_rule, horizontal_space, pick_list, row,
    scrollable, slider, text, text_input, toggler, vertical_space,
};
use iced::{Element, Length, Task, Theme};

use crate::camera::{CameraSession, CommandFrameSource, StillFrame};
use crate::catalog::{
    filtered_reviews, format_krw, questions_for, QuestionKind, ReviewFilter, FEATURED, RANKING,
};
use crate::config::get_messages;
use crate::measure::{
    CaptureOutcome, MeasureStage, SurfaceRect, MAX_BOX_WIDTH_PX, MIN_BOX_WIDTH_PX,
};
use crate::pricing::{FamilyMember, FamilyRoster, SinglePurchase, Subscription};
use crate::profile::{
    AgeGroup, BrushFrequency, GapSpacing, Gender, ReplaceCycle, SymptomFrequency,
};
use crate::settings::AppSettings;
use crate::wizard::{WizardState, WizardStep, STEP_ORDER};

use super::logger::Logger;
use super::surface::MeasureSurface;

/// Current view/tab of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Wizard,
    Recommend,
    Purchase,
    Reviews,
    Qna,
    Settings,
    Logs,
}

/// Language options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Korean,
    English,
}

impl Language {
    fn as_code(&self) -> &'static str {
        match self {
            Language::Korean => "ko",
            Language::English => "en",
        }
    }

    fn from_code(code: &str) -> Self {
        match code {
            "en" => Language::English,
            _ => Language::Korean,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Korean => write!(f, "한국어"),
            Language::English => write!(f, "English"),
        }
    }
}

/// Purchase mode on the purchase view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PurchaseMode {
    #[default]
    Subscribe,
    Single,
}

/// Messages for the Iced application.
#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    SwitchView(View),

    // Wizard navigation
    SelectStep(WizardStep),
    NextStep,
    PrevStep,
    FinishWizard,

    // Basic info
    NameChanged(String),
    AgeGroupSelected(AgeGroup),
    GenderSelected(Gender),
    BrushFrequencySelected(BrushFrequency),
    ReplaceCycleSelected(ReplaceCycle),
    SmokingToggled(bool),
    DiabetesToggled(bool),

    // Hand measurement
    BoxWidthChanged(f64),
    CommitCalibration,
    SurfacePressed { x: f64, y: f64, width: f64, height: f64 },
    Retake,
    Recalibrate,

    // Teeth capture
    CaptureTeeth,
    TeethCaptured { frame: StillFrame, error: Option<String> },
    DiscardTeeth,

    // Survey
    GumBleedingSelected(SymptomFrequency),
    ColdSensitivitySelected(SymptomFrequency),
    GapSpacingSelected(GapSpacing),
    BracesToggled(bool),
    ImplantToggled(bool),
    GumDiseaseToggled(bool),

    // Reviews
    FilterAgeSelected(AgeGroup),
    FilterGenderSelected(Gender),
    FilterBleedingToggled(bool),
    FilterExcludeElectricToggled(bool),
    ClearFilters,

    // Q&A
    QnaTabSelected(QuestionKind),

    // Purchase
    PurchaseModeSelected(PurchaseMode),
    BasketQuantityChanged(usize, i32),
    BasketItemRemoved(usize),
    DeliveryDayChanged(u8),
    FamilyNameChanged(String),
    FamilyAgeChanged(String),
    FamilyNoteChanged(String),
    AddFamilyMember,
    FamilyMemberRemoved(usize),
    SingleQuantityChanged(i32),
    CaseToggled(bool),
    StandToggled(bool),

    // Settings
    LanguageSelected(Language),
    CaptureCommandChanged(String),
    SubscribedToggled(bool),
    SaveSettings,
    ResetSettings,
    SettingsSaved(Result<(), String>),

    // Logs
    ClearLogs,
}

/// Main application struct.
pub struct BrushFitApp {
    // Current view
    view: View,

    // Settings
    settings: AppSettings,
    language: Language,

    // Wizard state
    wizard: WizardState,
    capturing: bool,

    // Catalog state
    review_filter: ReviewFilter,
    qna_tab: QuestionKind,

    // Purchase state
    purchase_mode: PurchaseMode,
    subscription: Subscription,
    single: SinglePurchase,
    family: FamilyRoster,
    family_name_input: String,
    family_age_input: String,
    family_note_input: String,

    // Logger
    logger: Logger,

    // Status message
    status: String,
}

impl Default for BrushFitApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BrushFitApp {
    /// Create a new application instance.
    pub fn new() -> Self {
        let settings = AppSettings::load();
        let mut logger = Logger::new();
        logger.info("BrushFit GUI 시작");

        let mut wizard = WizardState::new();
        wizard.hand.set_box_width(settings.box_width_px);

        let mut subscription = Subscription::default();
        let _ = subscription.set_delivery_day(settings.delivery_day);

        Self {
            view: View::Wizard,
            language: Language::from_code(&settings.lang),
            wizard,
            capturing: false,
            review_filter: ReviewFilter::default(),
            qna_tab: QuestionKind::Doctor,
            purchase_mode: PurchaseMode::Subscribe,
            subscription,
            single: SinglePurchase::new(FEATURED.price_krw),
            family: FamilyRoster::sample(),
            family_name_input: String::new(),
            family_age_input: String::new(),
            family_note_input: String::new(),
            settings,
            logger,
            status: "준비".to_string(),
        }
    }

    /// Get the window title.
    pub fn title(&self) -> String {
        format!("BrushFit - {}", get_messages(&self.settings.lang).app_title)
    }

    /// Get the theme.
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Update the application state based on messages.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Navigation
            Message::SwitchView(view) => {
                self.view = view;
                Task::none()
            }

            // Wizard navigation
            Message::SelectStep(step) => {
                self.wizard.select(step);
                Task::none()
            }
            Message::NextStep => {
                if self.wizard.is_step_complete(self.wizard.step()) {
                    self.wizard.advance();
                }
                Task::none()
            }
            Message::PrevStep => {
                if let Some(prev) = self.wizard.step().prev() {
                    self.wizard.select(prev);
                }
                Task::none()
            }
            Message::FinishWizard => {
                if !self.wizard.is_step_complete(WizardStep::Survey) {
                    self.logger.warning("설문을 모두 완료해주세요");
                    return Task::none();
                }
                self.settings.box_width_px = self.wizard.hand.box_width_px();
                if let Some(length) = self.wizard.hand.length_mm() {
                    self.logger.success(format!("측정 완료: 손 길이 {:.1}mm", length));
                }
                self.view = View::Recommend;
                self.status = "추천 완료".to_string();
                Task::none()
            }

            // Basic info
            Message::NameChanged(value) => {
                self.wizard.basic.name = value;
                Task::none()
            }
            Message::AgeGroupSelected(group) => {
                self.wizard.basic.age_group = Some(group);
                Task::none()
            }
            Message::GenderSelected(gender) => {
                self.wizard.basic.gender = gender;
                Task::none()
            }
            Message::BrushFrequencySelected(freq) => {
                self.wizard.basic.brush_frequency = Some(freq);
                Task::none()
            }
            Message::ReplaceCycleSelected(cycle) => {
                self.wizard.basic.replace_cycle = Some(cycle);
                Task::none()
            }
            Message::SmokingToggled(on) => {
                self.wizard.basic.smoking = on;
                Task::none()
            }
            Message::DiabetesToggled(on) => {
                self.wizard.basic.diabetes = on;
                Task::none()
            }

            // Hand measurement
            Message::BoxWidthChanged(width) => {
                self.wizard.hand.set_box_width(width);
                Task::none()
            }
            Message::CommitCalibration => {
                match self.wizard.hand.commit_calibration() {
                    Ok(scale) => {
                        self.logger.measure(format!(
                            "보정 완료: {:.3} px/mm",
                            scale.px_per_mm()
                        ));
                    }
                    Err(e) => {
                        self.logger.error(format!("보정 실패: {}", e));
                    }
                }
                Task::none()
            }
            Message::SurfacePressed { x, y, width, height } => {
                let rect = SurfaceRect::at_origin(width, height);
                match self.wizard.hand.capture(x, y, &rect) {
                    CaptureOutcome::Recorded => {
                        self.logger.measure(format!("시작점 기록 ({:.0}, {:.0})", x, y));
                    }
                    CaptureOutcome::Resolved => {
                        if let Some(record) = self.wizard.hand.record() {
                            self.status = format!("{:.1}mm", record.length_mm);
                            self.logger.measure_record(&record);
                        }
                    }
                    CaptureOutcome::Ignored => {}
                }
                Task::none()
            }
            Message::Retake => {
                self.wizard.hand.retake();
                self.logger.measure("다시 측정");
                Task::none()
            }
            Message::Recalibrate => {
                self.wizard.hand.reset_to_calibration();
                self.logger.measure("보정부터 다시 시작");
                Task::none()
            }

            // Teeth capture
            Message::CaptureTeeth => {
                if self.capturing {
                    return Task::none();
                }
                self.capturing = true;
                self.logger.capture("치아 촬영 시작");

                let source = CommandFrameSource::new(
                    self.settings.capture_command.clone(),
                    self.settings.capture_args.clone(),
                );
                Task::perform(
                    async move {
                        let mut session = CameraSession::open(source);
                        let (frame, error) = session.capture_still_or_fallback();
                        (frame, error.map(|e| e.to_string()))
                    },
                    |(frame, error)| Message::TeethCaptured { frame, error },
                )
            }
            Message::TeethCaptured { frame, error } => {
                self.capturing = false;
                match error {
                    None => {
                        self.logger.capture_frame(&frame);
                    }
                    Some(e) => {
                        // Fallback frame stands in so the step can finish.
                        self.logger.error(format!("촬영 실패, 기본 프레임 사용: {}", e));
                        self.status = get_messages(&self.settings.lang)
                            .capture_failed
                            .to_string();
                    }
                }
                self.wizard.attach_teeth_frame(frame);
                Task::none()
            }
            Message::DiscardTeeth => {
                self.wizard.discard_teeth_frame();
                self.logger.capture("촬영본 삭제");
                Task::none()
            }

            // Survey
            Message::GumBleedingSelected(freq) => {
                self.wizard.survey.gum_bleeding = Some(freq);
                Task::none()
            }
            Message::ColdSensitivitySelected(freq) => {
                self.wizard.survey.cold_sensitivity = Some(freq);
                Task::none()
            }
            Message::GapSpacingSelected(spacing) => {
                self.wizard.survey.gap_spacing = Some(spacing);
                Task::none()
            }
            Message::BracesToggled(on) => {
                self.wizard.survey.braces = on;
                Task::none()
            }
            Message::ImplantToggled(on) => {
                self.wizard.survey.implant = on;
                Task::none()
            }
            Message::GumDiseaseToggled(on) => {
                self.wizard.survey.gum_disease_diagnosed = on;
                Task::none()
            }

            // Reviews
            Message::FilterAgeSelected(group) => {
                self.review_filter.age_group = Some(group);
                Task::none()
            }
            Message::FilterGenderSelected(gender) => {
                self.review_filter.gender = Some(gender);
                Task::none()
            }
            Message::FilterBleedingToggled(on) => {
                self.review_filter.bleeding = on;
                Task::none()
            }
            Message::FilterExcludeElectricToggled(on) => {
                self.review_filter.exclude_electric = on;
                Task::none()
            }
            Message::ClearFilters => {
                self.review_filter.clear();
                Task::none()
            }

            // Q&A
            Message::QnaTabSelected(kind) => {
                self.qna_tab = kind;
                Task::none()
            }

            // Purchase
            Message::PurchaseModeSelected(mode) => {
                self.purchase_mode = mode;
                self.view = View::Purchase;
                Task::none()
            }
            Message::BasketQuantityChanged(index, delta) => {
                self.subscription.adjust_quantity(index, delta);
                Task::none()
            }
            Message::BasketItemRemoved(index) => {
                self.subscription.remove_item(index);
                Task::none()
            }
            Message::DeliveryDayChanged(day) => {
                if let Err(e) = self.subscription.set_delivery_day(day) {
                    self.logger.warning(format!("배송일 변경 실패: {}", e));
                } else {
                    self.settings.delivery_day = day;
                }
                Task::none()
            }
            Message::FamilyNameChanged(value) => {
                self.family_name_input = value;
                Task::none()
            }
            Message::FamilyAgeChanged(value) => {
                self.family_age_input = value;
                Task::none()
            }
            Message::FamilyNoteChanged(value) => {
                self.family_note_input = value;
                Task::none()
            }
            Message::AddFamilyMember => {
                let name = self.family_name_input.trim().to_string();
                if name.is_empty() {
                    self.logger.warning("가족 이름을 입력해주세요");
                    return Task::none();
                }
                let age = self.family_age_input.trim().parse().unwrap_or(0);
                let member = FamilyMember {
                    name,
                    age,
                    note: self.family_note_input.trim().to_string(),
                };
                match self.family.add(member) {
                    Ok(()) => {
                        self.family_name_input.clear();
                        self.family_age_input.clear();
                        self.family_note_input.clear();
                    }
                    Err(e) => {
                        self.logger.warning(e.to_string());
                        self.status = get_messages(&self.settings.lang)
                            .family_full
                            .to_string();
                    }
                }
                Task::none()
            }
            Message::FamilyMemberRemoved(index) => {
                self.family.remove(index);
                Task::none()
            }
            Message::SingleQuantityChanged(delta) => {
                self.single.adjust_quantity(delta);
                Task::none()
            }
            Message::CaseToggled(on) => {
                self.single.with_case = on;
                Task::none()
            }
            Message::StandToggled(on) => {
                self.single.with_stand = on;
                Task::none()
            }

            // Settings
            Message::LanguageSelected(lang) => {
                self.language = lang;
                self.settings.lang = lang.as_code().to_string();
                Task::none()
            }
            Message::CaptureCommandChanged(value) => {
                self.settings.capture_command = value;
                Task::none()
            }
            Message::SubscribedToggled(on) => {
                self.settings.subscribed = on;
                Task::none()
            }
            Message::SaveSettings => {
                let settings = self.settings.clone();
                Task::perform(async move { settings.save() }, Message::SettingsSaved)
            }
            Message::ResetSettings => {
                self.settings = AppSettings::default();
                self.language = Language::Korean;
                self.logger.info("설정이 기본값으로 초기화됨");
                Task::none()
            }
            Message::SettingsSaved(result) => {
                match result {
                    Ok(()) => {
                        let msgs = get_messages(&self.settings.lang);
                        self.logger.success(msgs.settings_saved);
                        self.status = msgs.settings_saved.to_string();
                    }
                    Err(e) => {
                        self.logger.error(format!("설정 저장 실패: {}", e));
                        self.status = format!("저장 실패: {}", e);
                    }
                }
                Task::none()
            }

            // Logs
            Message::ClearLogs => {
                self.logger.clear();
                self.logger.info("로그 초기화");
                Task::none()
            }
        }
    }

    /// Build the view.
    pub fn view(&self) -> Element<'_, Message> {
        let content = match self.view {
            View::Wizard => self.view_wizard(),
            View::Recommend => self.view_recommend(),
            View::Purchase => self.view_purchase(),
            View::Reviews => self.view_reviews(),
            View::Qna => self.view_qna(),
            View::Settings => self.view_settings(),
            View::Logs => self.view_logs(),
        };

        let nav_bar = self.view_nav_bar();
        let status_bar = self.view_status_bar();

        column![nav_bar, content, status_bar]
            .spacing(10)
            .padding(20)
            .into()
    }

    /// Navigation bar.
    fn view_nav_bar(&self) -> Element<'_, Message> {
        let tabs = [
            (View::Wizard, "📏 측정"),
            (View::Recommend, "🪥 추천"),
            (View::Purchase, "🛒 구매"),
            (View::Reviews, "⭐ 리뷰"),
            (View::Qna, "💬 Q&A"),
            (View::Settings, "⚙️ 설정"),
            (View::Logs, "📋 로그"),
        ];

        let mut bar = row![].spacing(10);
        for (view, label) in tabs {
            bar = bar.push(
                button(text(label))
                    .on_press(Message::SwitchView(view))
                    .style(if self.view == view {
                        button::primary
                    } else {
                        button::secondary
                    }),
            );
        }
        bar.into()
    }

    /// Status bar.
    fn view_status_bar(&self) -> Element<'_, Message> {
        let stage_text = match self.wizard.hand.stage() {
            MeasureStage::Calibration => "🟡 보정 대기",
            MeasureStage::Measurement => "🔵 측정 중",
            MeasureStage::Complete => "🟢 측정 완료",
        };

        row![
            text(stage_text).size(14),
            horizontal_space(),
            text(&self.status).size(14),
        ]
        .padding(10)
        .into()
    }

    /// Wizard view: step bar plus the active step's form.
    fn view_wizard(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);

        let mut step_bar = row![].spacing(10);
        for step in STEP_ORDER {
            let label = match step {
                WizardStep::Basic => msgs.step_basic,
                WizardStep::Hand => msgs.step_hand,
                WizardStep::Teeth => msgs.step_teeth,
                WizardStep::Survey => msgs.step_survey,
            };
            let mut btn = button(text(label).size(14)).style(if self.wizard.step() == step {
                button::primary
            } else {
                button::secondary
            });
            if self.wizard.can_select(step) {
                btn = btn.on_press(Message::SelectStep(step));
            }
            step_bar = step_bar.push(btn);
        }

        let body = match self.wizard.step() {
            WizardStep::Basic => self.view_basic_step(),
            WizardStep::Hand => self.view_hand_step(),
            WizardStep::Teeth => self.view_teeth_step(),
            WizardStep::Survey => self.view_survey_step(),
        };

        let mut nav = row![].spacing(10);
        if self.wizard.step().prev().is_some() {
            nav = nav.push(
                button(text(msgs.back))
                    .on_press(Message::PrevStep)
                    .style(button::secondary),
            );
        }
        nav = nav.push(horizontal_space());
        if self.wizard.step() == WizardStep::Survey {
            let mut finish = button(text("추천 받기")).style(button::success);
            if self.wizard.is_step_complete(WizardStep::Survey) {
                finish = finish.on_press(Message::FinishWizard);
            }
            nav = nav.push(finish);
        } else {
            let mut next = button(text(msgs.next)).style(button::primary);
            if self.wizard.is_step_complete(self.wizard.step()) {
                next = next.on_press(Message::NextStep);
            }
            nav = nav.push(next);
        }

        column![
            step_bar,
            horizontal_rule(1),
            scrollable(body).height(Length::Fill),
            nav,
        ]
        .spacing(15)
        .height(Length::Fill)
        .into()
    }

    fn view_basic_step(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);
        let title = text(msgs.step_basic).size(24);

        let name = labeled_input("이름", &self.wizard.basic.name, "이름", Message::NameChanged);

        let age = labeled_pick(
            "연령대",
            AgeGroup::ALL.to_vec(),
            self.wizard.basic.age_group,
            Message::AgeGroupSelected,
        );

        let gender = labeled_pick(
            "성별",
            Gender::ALL.to_vec(),
            Some(self.wizard.basic.gender),
            Message::GenderSelected,
        );

        let frequency = labeled_pick(
            "하루 양치 횟수",
            BrushFrequency::ALL.to_vec(),
            self.wizard.basic.brush_frequency,
            Message::BrushFrequencySelected,
        );

        let cycle = labeled_pick(
            "칫솔 교체 주기",
            ReplaceCycle::ALL.to_vec(),
            self.wizard.basic.replace_cycle,
            Message::ReplaceCycleSelected,
        );

        let cycle_hint: Element<'_, Message> = if self
            .wizard
            .basic
            .replace_cycle
            .map(|c| c.exceeds_recommended())
            .unwrap_or(false)
        {
            text("권장 교체 주기(4주)보다 깁니다").size(13).into()
        } else {
            row![].into()
        };

        let smoking = row![
            text("흡연").width(120),
            toggler(self.wizard.basic.smoking).on_toggle(Message::SmokingToggled),
        ]
        .spacing(10);

        let diabetes = row![
            text("당뇨").width(120),
            toggler(self.wizard.basic.diabetes).on_toggle(Message::DiabetesToggled),
        ]
        .spacing(10);

        column![title, name, age, gender, frequency, cycle, cycle_hint, smoking, diabetes]
            .spacing(12)
            .into()
    }

    fn view_hand_step(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);

        let surface = canvas(MeasureSurface {
            session: &self.wizard.hand,
        })
        .width(Length::Fill)
        .height(360);

        let controls: Element<'_, Message> = match self.wizard.hand.stage() {
            MeasureStage::Calibration => {
                let width_px = self.wizard.hand.box_width_px();
                column![
                    text(msgs.calibration_title).size(24),
                    text(msgs.calibration_hint).size(14),
                    row![
                        slider(
                            MIN_BOX_WIDTH_PX..=MAX_BOX_WIDTH_PX,
                            width_px,
                            Message::BoxWidthChanged
                        )
                        .step(1.0),
                        text(format!("{:.0}px", width_px)).size(14).width(60),
                    ]
                    .spacing(10),
                    button(text(msgs.calibration_done))
                        .on_press(Message::CommitCalibration)
                        .style(button::success),
                ]
                .spacing(12)
                .into()
            }
            MeasureStage::Measurement => column![
                text(msgs.measurement_title).size(24),
                text(msgs.measurement_hint).size(14),
                button(text(msgs.recalibrate))
                    .on_press(Message::Recalibrate)
                    .style(button::secondary),
            ]
            .spacing(12)
            .into(),
            MeasureStage::Complete => {
                let length = self.wizard.hand.length_mm().unwrap_or_default();
                column![
                    text(msgs.measurement_result).size(24),
                    text(format!("{:.1} mm", length)).size(36),
                    row![
                        button(text(msgs.retake))
                            .on_press(Message::Retake)
                            .style(button::secondary),
                        button(text(msgs.recalibrate))
                            .on_press(Message::Recalibrate)
                            .style(button::secondary),
                    ]
                    .spacing(10),
                ]
                .spacing(12)
                .into()
            }
        };

        column![controls, vertical_space().height(10), surface]
            .spacing(10)
            .into()
    }

    fn view_teeth_step(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);
        let title = text(msgs.step_teeth).size(24);

        let content: Element<'_, Message> = if let Some(reading) = &self.wizard.teeth {
            let frame_info = self
                .wizard
                .teeth_frame
                .as_ref()
                .map(|f| format!("{}x{}", f.width, f.height))
                .unwrap_or_default();

            column![
                text(format!("촬영본 {}", frame_info)).size(14),
                text(format!("앞니 폭 {:.1}mm", reading.front_teeth_width_mm)).size(16),
                text(format!("어금니 높이 {:.1}mm", reading.molar_height_mm)).size(16),
                text(format!("권장 헤드 폭 {:.1}mm", reading.head_width_mm)).size(16),
                text(format!("잇몸 라인 기울기 {:.0}°", reading.gum_line_slope_deg)).size(16),
                button(text(msgs.retake_photo))
                    .on_press(Message::DiscardTeeth)
                    .style(button::secondary),
            ]
            .spacing(10)
            .into()
        } else {
            let capture_btn = if self.capturing {
                button(text("촬영 중...")).style(button::secondary)
            } else {
                button(text(msgs.capture))
                    .on_press(Message::CaptureTeeth)
                    .style(button::primary)
            };

            column![
                text("치아 사진으로 앞니 폭과 추천 헤드 크기를 분석합니다").size(14),
                text("이 단계는 건너뛸 수 있어요").size(13),
                capture_btn,
            ]
            .spacing(10)
            .into()
        };

        column![title, content].spacing(15).into()
    }

    fn view_survey_step(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);
        let title = text(msgs.step_survey).size(24);

        let bleeding = labeled_pick(
            "잇몸 출혈",
            SymptomFrequency::ALL.to_vec(),
            self.wizard.survey.gum_bleeding,
            Message::GumBleedingSelected,
        );

        let sensitivity = labeled_pick(
            "차가운 것에 시림",
            SymptomFrequency::ALL.to_vec(),
            self.wizard.survey.cold_sensitivity,
            Message::ColdSensitivitySelected,
        );

        let spacing = labeled_pick(
            "치간 간격",
            GapSpacing::ALL.to_vec(),
            self.wizard.survey.gap_spacing,
            Message::GapSpacingSelected,
        );

        let braces = row![
            text("교정 중").width(120),
            toggler(self.wizard.survey.braces).on_toggle(Message::BracesToggled),
        ]
        .spacing(10);

        let implant = row![
            text("임플란트").width(120),
            toggler(self.wizard.survey.implant).on_toggle(Message::ImplantToggled),
        ]
        .spacing(10);

        let diagnosed = row![
            text("잇몸질환 진단").width(120),
            toggler(self.wizard.survey.gum_disease_diagnosed)
                .on_toggle(Message::GumDiseaseToggled),
        ]
        .spacing(10);

        column![title, bleeding, sensitivity, spacing, braces, implant, diagnosed]
            .spacing(12)
            .into()
    }

    /// Recommendation view.
    fn view_recommend(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);
        let title = text(msgs.recommend_title).size(28);

        let risk = self.wizard.survey.gum_risk_score(&self.wizard.basic);

        let mut summary = column![].spacing(4);
        if let Some(length) = self.wizard.hand.length_mm() {
            summary = summary.push(text(format!("손 길이 {:.1}mm", length)).size(14));
        }
        if let Some(reading) = &self.wizard.teeth {
            summary = summary
                .push(text(format!("앞니 폭 {:.1}mm", reading.front_teeth_width_mm)).size(14));
        }
        summary = summary.push(text(format!("잇몸 위험 점수 {}", risk)).size(14));

        let featured = container(
            column![
                text(format!("{} {}", FEATURED.brand, FEATURED.name)).size(22),
                text(format!("{} {}%", msgs.fit_label, FEATURED.fit_percent)).size(16),
                text(FEATURED.description).size(14),
                text(format!(
                    "그립 {:.0}mm · 헤드 {:.0}mm · {}",
                    FEATURED.grip_diameter_mm, FEATURED.head_width_mm, FEATURED.bristle
                ))
                .size(13),
                text(format!(
                    "★ {:.1} ({}) · {}",
                    FEATURED.rating,
                    FEATURED.rating_count,
                    format_krw(FEATURED.price_krw)
                ))
                .size(15),
                row![
                    button(text(msgs.subscribe))
                        .on_press(Message::PurchaseModeSelected(PurchaseMode::Subscribe))
                        .style(button::success),
                    button(text(msgs.buy_once))
                        .on_press(Message::PurchaseModeSelected(PurchaseMode::Single))
                        .style(button::primary),
                ]
                .spacing(10),
            ]
            .spacing(8),
        )
        .width(Length::Fill)
        .padding(15)
        .style(container::bordered_box);

        let mut ranking = column![text("나와 비슷한 사용자가 선택한 제품").size(18)].spacing(8);
        for product in RANKING.iter() {
            ranking = ranking.push(
                container(
                    row![
                        text(format!("{}", product.rank)).size(18).width(30),
                        column![
                            text(product.name).size(15),
                            text(product.description).size(12),
                        ]
                        .spacing(2),
                        horizontal_space(),
                        column![
                            text(format!("{}%", product.match_percent)).size(15),
                            text(format_krw(product.price_krw)).size(13),
                        ]
                        .spacing(2),
                    ]
                    .spacing(10),
                )
                .width(Length::Fill)
                .padding(10)
                .style(container::bordered_box),
            );
        }

        scrollable(
            column![title, summary, featured, ranking]
                .spacing(15)
                .padding(10),
        )
        .height(Length::Fill)
        .into()
    }

    /// Purchase view.
    fn view_purchase(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);

        let mode_bar = row![
            button(text(msgs.subscribe))
                .on_press(Message::PurchaseModeSelected(PurchaseMode::Subscribe))
                .style(if self.purchase_mode == PurchaseMode::Subscribe {
                    button::primary
                } else {
                    button::secondary
                }),
            button(text(msgs.buy_once))
                .on_press(Message::PurchaseModeSelected(PurchaseMode::Single))
                .style(if self.purchase_mode == PurchaseMode::Single {
                    button::primary
                } else {
                    button::secondary
                }),
        ]
        .spacing(10);

        let body = match self.purchase_mode {
            PurchaseMode::Subscribe => self.view_subscription(),
            PurchaseMode::Single => self.view_single_purchase(),
        };

        column![mode_bar, scrollable(body).height(Length::Fill)]
            .spacing(15)
            .height(Length::Fill)
            .into()
    }

    fn view_subscription(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);

        let mut items = column![text("구독 구성").size(18)].spacing(8);
        for (i, item) in self.subscription.items.iter().enumerate() {
            items = items.push(
                container(
                    row![
                        column![
                            text(item.name).size(15),
                            text(format!("{} · {}", item.variant, item.cycle.label_ko()))
                                .size(12),
                        ]
                        .spacing(2),
                        horizontal_space(),
                        button(text("-")).on_press(Message::BasketQuantityChanged(i, -1)),
                        text(format!("{}", item.quantity)).size(15),
                        button(text("+")).on_press(Message::BasketQuantityChanged(i, 1)),
                        text(format!("{}/월", format_krw(item.monthly_cost_krw()))).size(14),
                        button(text("🗑️"))
                            .on_press(Message::BasketItemRemoved(i))
                            .style(button::danger),
                    ]
                    .spacing(10),
                )
                .width(Length::Fill)
                .padding(10)
                .style(container::bordered_box),
            );
        }

        let totals = column![
            row![
                text(msgs.monthly_total).size(14),
                horizontal_space(),
                text(format_krw(self.subscription.monthly_total_krw())).size(14),
            ],
            row![
                text(msgs.discount).size(14),
                horizontal_space(),
                text(format!("-{}", format_krw(self.subscription.discount_krw()))).size(14),
            ],
            horizontal_rule(1),
            row![
                text(msgs.final_price).size(16),
                horizontal_space(),
                text(format_krw(self.subscription.final_monthly_krw())).size(18),
            ],
        ]
        .spacing(6);

        let delivery = row![
            text(msgs.delivery_day).width(120),
            slider(1..=28u8, self.subscription.delivery_day, Message::DeliveryDayChanged),
            text(format!("매월 {}일", self.subscription.delivery_day)).size(14),
        ]
        .spacing(10);

        let mut family = column![text("가족 구성원").size(18)].spacing(8);
        for (i, member) in self.family.members().iter().enumerate() {
            family = family.push(
                row![
                    text(format!("{} ({}세)", member.name, member.age)).size(14),
                    text(&member.note).size(12),
                    horizontal_space(),
                    button(text("삭제"))
                        .on_press(Message::FamilyMemberRemoved(i))
                        .style(button::danger),
                ]
                .spacing(10),
            );
        }
        if !self.family.is_full() {
            family = family.push(
                row![
                    text_input("이름", &self.family_name_input)
                        .on_input(Message::FamilyNameChanged)
                        .width(120),
                    text_input("나이", &self.family_age_input)
                        .on_input(Message::FamilyAgeChanged)
                        .width(80),
                    text_input("메모", &self.family_note_input)
                        .on_input(Message::FamilyNoteChanged)
                        .width(160),
                    button(text("추가")).on_press(Message::AddFamilyMember),
                ]
                .spacing(10),
            );
        } else {
            family = family.push(text(msgs.family_full).size(13));
        }

        column![items, totals, delivery, horizontal_rule(1), family]
            .spacing(15)
            .padding(10)
            .into()
    }

    fn view_single_purchase(&self) -> Element<'_, Message> {
        let msgs = get_messages(&self.settings.lang);

        let product = row![
            text(format!("{} {}", FEATURED.brand, FEATURED.name)).size(16),
            horizontal_space(),
            button(text("-")).on_press(Message::SingleQuantityChanged(-1)),
            text(format!("{}", self.single.quantity)).size(15),
            button(text("+")).on_press(Message::SingleQuantityChanged(1)),
        ]
        .spacing(10);

        let case = row![
            text("휴대용 케이스 (+₩4,500)").width(200),
            toggler(self.single.with_case).on_toggle(Message::CaseToggled),
        ]
        .spacing(10);

        let stand = row![
            text("살균 스탠드 (+₩12,000)").width(200),
            toggler(self.single.with_stand).on_toggle(Message::StandToggled),
        ]
        .spacing(10);

        let total = row![
            text(msgs.final_price).size(16),
            horizontal_space(),
            text(format_krw(self.single.total_krw())).size(18),
        ];

        column![product, case, stand, horizontal_rule(1), total]
            .spacing(15)
            .padding(10)
            .into()
    }

    /// Reviews view.
    fn view_reviews(&self) -> Element<'_, Message> {
        let title = text("⭐ 리뷰").size(28);

        let filter_bar = row![
            pick_list(
                AgeGroup::ALL.to_vec(),
                self.review_filter.age_group,
                Message::FilterAgeSelected,
            )
            .placeholder("연령대"),
            pick_list(
                Gender::ALL.to_vec(),
                self.review_filter.gender,
                Message::FilterGenderSelected,
            )
            .placeholder("성별"),
            row![
                text("잇몸 출혈").size(13),
                toggler(self.review_filter.bleeding).on_toggle(Message::FilterBleedingToggled),
            ]
            .spacing(5),
            row![
                text("전동 제외").size(13),
                toggler(self.review_filter.exclude_electric)
                    .on_toggle(Message::FilterExcludeElectricToggled),
            ]
            .spacing(5),
            button(text(format!("초기화 ({})", self.review_filter.active_count())))
                .on_press(Message::ClearFilters)
                .style(button::secondary),
        ]
        .spacing(10);

        let mut list = column![].spacing(8);
        let reviews = filtered_reviews(&self.review_filter);
        if reviews.is_empty() {
            list = list.push(text("조건에 맞는 리뷰가 없어요").size(14));
        }
        for review in reviews {
            let stars: String = "★".repeat(usize::from(review.rating));
            list = list.push(
                container(
                    column![
                        row![
                            text(format!(
                                "{} · {} {}",
                                review.author, review.age_group, review.gender
                            ))
                            .size(13),
                            horizontal_space(),
                            text(stars).size(13),
                        ],
                        text(review.body).size(14),
                        text(format!("도움돼요 {}", review.helpful_count)).size(12),
                    ]
                    .spacing(5),
                )
                .width(Length::Fill)
                .padding(10)
                .style(container::bordered_box),
            );
        }

        column![
            title,
            filter_bar,
            scrollable(list).height(Length::Fill),
        ]
        .spacing(15)
        .height(Length::Fill)
        .into()
    }

    /// Q&A view.
    fn view_qna(&self) -> Element<'_, Message> {
        let title = text("💬 Q&A").size(28);

        let tabs = row![
            button(text("의사 답변"))
                .on_press(Message::QnaTabSelected(QuestionKind::Doctor))
                .style(if self.qna_tab == QuestionKind::Doctor {
                    button::primary
                } else {
                    button::secondary
                }),
            button(text("커뮤니티"))
                .on_press(Message::QnaTabSelected(QuestionKind::Community))
                .style(if self.qna_tab == QuestionKind::Community {
                    button::primary
                } else {
                    button::secondary
                }),
        ]
        .spacing(10);

        let mut list = column![].spacing(8);
        for question in questions_for(self.qna_tab) {
            let answer: Element<'_, Message> = match question.answer {
                Some(answer) if question.answer_visible(self.settings.subscribed) => {
                    text(format!("↳ {}", answer)).size(13).into()
                }
                Some(_) => text("🔒 구독 회원 전용 답변입니다").size(13).into(),
                None => text("답변 대기 중").size(13).into(),
            };

            list = list.push(
                container(
                    column![
                        text(question.title).size(15),
                        text(format!("{} · 댓글 {}", question.author, question.reply_count))
                            .size(12),
                        text(question.body).size(13),
                        answer,
                    ]
                    .spacing(5),
                )
                .width(Length::Fill)
                .padding(10)
                .style(container::bordered_box),
            );
        }

        column![title, tabs, scrollable(list).height(Length::Fill)]
            .spacing(15)
            .height(Length::Fill)
            .into()
    }

    /// Settings view.
    fn view_settings(&self) -> Element<'_, Message> {
        let title = text("⚙️ 설정").size(28);

        let lang_picker = row![
            text("언어").width(120),
            pick_list(
                vec![Language::Korean, Language::English],
                Some(self.language),
                Message::LanguageSelected,
            )
            .width(200),
        ]
        .spacing(10);

        let capture_command = labeled_input(
            "촬영 명령",
            &self.settings.capture_command,
            "ffmpeg",
            Message::CaptureCommandChanged,
        );

        let subscribed = row![
            text("구독 중").width(120),
            toggler(self.settings.subscribed).on_toggle(Message::SubscribedToggled),
        ]
        .spacing(10);

        let save_btn = button(text("💾 저장"))
            .on_press(Message::SaveSettings)
            .style(button::success)
            .padding([10, 20]);

        let reset_btn = button(text("🔄 초기화"))
            .on_press(Message::ResetSettings)
            .style(button::secondary)
            .padding([10, 20]);

        let actions = row![save_btn, reset_btn].spacing(10);

        column![
            title,
            vertical_space().height(10),
            lang_picker,
            capture_command,
            subscribed,
            vertical_space().height(20),
            actions,
        ]
        .spacing(15)
        .padding(10)
        .into()
    }

    /// Logs view.
    fn view_logs(&self) -> Element<'_, Message> {
        let title = text("📋 로그").size(28);

        let clear_btn = button(text("🗑️ 로그 지우기"))
            .on_press(Message::ClearLogs)
            .style(button::secondary);

        let header = row![title, horizontal_space(), clear_btn];

        let log_content = self.logger.format_all();
        let log_view = scrollable(text(log_content).size(13)).height(Length::Fill);

        let log_container = container(log_view)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(10)
            .style(container::bordered_box);

        let log_path = self
            .logger
            .log_file_path()
            .map(|p| format!("로그 파일: {}", p.display()))
            .unwrap_or_else(|| "로그 파일: 없음".to_string());

        column![
            header,
            vertical_space().height(10),
            log_container,
            text(log_path).size(12),
        ]
        .spacing(10)
        .height(Length::Fill)
        .into()
    }
}

/// Helper function to create a labeled input row.
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).width(120),
        text_input(placeholder, value).on_input(on_change).width(300),
    ]
    .spacing(10)
    .into()
}

/// Helper function to create a labeled pick_list row.
fn labeled_pick<'a, T>(
    label: &'a str,
    options: Vec<T>,
    selected: Option<T>,
    on_select: impl Fn(T) -> Message + 'a,
) -> Element<'a, Message>
where
    T: ToString + PartialEq + Clone + 'a,
{
    row![
        text(label).width(120),
        pick_list(options, selected, on_select).width(200),
    ]
    .spacing(10)
    .into()
}
