//! BrushFit - toothbrush fitting wizard
//!
//! This is the main entry point for the brushfit CLI tool.

use base64::{engine::general_purpose::STANDARD, Engine};
use brushfit::camera::{CameraSession, CommandFrameSource};
use brushfit::catalog::{format_krw, FEATURED, RANKING};
use brushfit::config::get_messages;
use brushfit::measure::{render_snapshot, CaptureOutcome, MeasureStage, SurfaceRect};
use brushfit::pricing::Subscription;
use brushfit::profile::{AgeGroup, BrushFrequency, GapSpacing, ReplaceCycle, SymptomFrequency};
use brushfit::settings::AppSettings;
use brushfit::wizard::WizardState;
use std::env;
use std::fs;
use std::io::{self, BufRead, Write};

/// Fixed capture surface used by the terminal wizard.
const SURFACE_WIDTH: f64 = 640.0;
const SURFACE_HEIGHT: f64 = 360.0;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (ignore errors if file doesn't exist)
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let mut settings = AppSettings::load();
    if let Ok(lang) = env::var("BRUSHFIT_LANG") {
        settings.lang = lang;
    }
    if let Ok(command) = env::var("CAPTURE_COMMAND") {
        settings.capture_command = command;
    }
    let msgs = get_messages(&settings.lang);

    println!("🪥 BrushFit - {}", msgs.app_title);
    println!("================================================");
    println!("Language: {}", settings.lang);
    println!("Capture command: {}", settings.capture_command);
    println!("================================================\n");

    let stdin = io::stdin();
    let mut wizard = WizardState::new();
    wizard.hand.set_box_width(settings.box_width_px);

    // Step 1: basic info
    println!("📋 {}\n", msgs.step_basic);
    wizard.basic.name = prompt(&stdin, "이름")?;
    wizard.basic.age_group = Some(prompt_choice(&stdin, "연령대", &AgeGroup::ALL)?);
    wizard.basic.brush_frequency =
        Some(prompt_choice(&stdin, "하루 양치 횟수", &BrushFrequency::ALL)?);
    wizard.basic.replace_cycle =
        Some(prompt_choice(&stdin, "칫솔 교체 주기", &ReplaceCycle::ALL)?);
    if wizard
        .basic
        .replace_cycle
        .map(|c| c.exceeds_recommended())
        .unwrap_or(false)
    {
        println!("⚠️ 권장 교체 주기(4주)보다 깁니다");
    }
    wizard.basic.smoking = prompt_yes_no(&stdin, "흡연 여부")?;
    wizard.basic.diabetes = prompt_yes_no(&stdin, "당뇨 여부")?;
    wizard.advance();

    // Step 2: hand measurement
    println!("\n📏 {}\n", msgs.calibration_title);
    println!("{}", msgs.calibration_hint);
    let width_input = prompt(
        &stdin,
        &format!("상자 너비 px (기본 {:.0})", wizard.hand.box_width_px()),
    )?;
    if let Ok(width) = width_input.parse() {
        wizard.hand.set_box_width(width);
    }
    let scale = wizard.hand.commit_calibration()?;
    println!("✅ {}: {:.3} px/mm\n", msgs.calibration_done, scale.px_per_mm());

    println!("{} ({}x{})", msgs.measurement_hint, SURFACE_WIDTH, SURFACE_HEIGHT);
    let surface = SurfaceRect::at_origin(SURFACE_WIDTH, SURFACE_HEIGHT);
    while wizard.hand.stage() == MeasureStage::Measurement {
        let line = prompt(&stdin, "좌표 입력 (x y)")?;
        let mut parts = line.split_whitespace();
        let parsed = match (parts.next(), parts.next()) {
            (Some(x), Some(y)) => x.parse::<f64>().ok().zip(y.parse::<f64>().ok()),
            _ => None,
        };
        let Some((x, y)) = parsed else {
            println!("숫자 두 개를 입력해주세요");
            continue;
        };
        match wizard.hand.capture(x, y, &surface) {
            CaptureOutcome::Recorded => println!("시작점 기록"),
            CaptureOutcome::Resolved => {}
            CaptureOutcome::Ignored => println!("표면 범위를 벗어났습니다"),
        }
    }

    let length = wizard
        .hand
        .length_mm()
        .ok_or_else(|| anyhow::anyhow!("measurement did not resolve"))?;
    println!("\n✅ {}: {:.1} mm", msgs.measurement_result, length);

    let snapshot = render_snapshot(
        SURFACE_WIDTH as u32,
        SURFACE_HEIGHT as u32,
        wizard.hand.points(),
    );
    match STANDARD.decode(&snapshot) {
        Ok(png) => {
            fs::write("measurement.png", png)?;
            println!("🖼️ 스냅샷 저장: measurement.png");
        }
        Err(e) => tracing::warn!(error = %e, "snapshot decode failed"),
    }
    wizard.advance();

    // Step 3: teeth photo (optional)
    println!("\n📷 {}", msgs.step_teeth);
    if prompt_yes_no(&stdin, "치아 사진을 촬영할까요?")? {
        let source = CommandFrameSource::new(
            settings.capture_command.clone(),
            settings.capture_args.clone(),
        );
        let mut camera = CameraSession::open(source);
        let (frame, error) = camera.capture_still_or_fallback();
        match error {
            None => println!("✅ 촬영 완료 ({}x{})", frame.width, frame.height),
            Some(e) => println!("❌ {}: {} (기본 프레임으로 계속)", msgs.capture_failed, e),
        }
        wizard.attach_teeth_frame(frame);
    }
    wizard.advance();

    // Step 4: survey
    println!("\n📝 {}\n", msgs.step_survey);
    wizard.survey.gum_bleeding =
        Some(prompt_choice(&stdin, "잇몸 출혈", &SymptomFrequency::ALL)?);
    wizard.survey.cold_sensitivity =
        Some(prompt_choice(&stdin, "차가운 것에 시림", &SymptomFrequency::ALL)?);
    wizard.survey.gap_spacing = Some(prompt_choice(&stdin, "치간 간격", &GapSpacing::ALL)?);
    wizard.survey.braces = prompt_yes_no(&stdin, "교정 중인가요?")?;
    wizard.survey.implant = prompt_yes_no(&stdin, "임플란트가 있나요?")?;
    wizard.survey.gum_disease_diagnosed = prompt_yes_no(&stdin, "잇몸질환 진단을 받았나요?")?;

    // Results
    let risk = wizard.survey.gum_risk_score(&wizard.basic);
    println!("\n================================================");
    println!("🪥 {}", msgs.recommend_title);
    println!("================================================");
    println!("손 길이: {:.1} mm", length);
    if let Some(reading) = &wizard.teeth {
        println!(
            "앞니 폭: {:.1} mm / 권장 헤드 폭: {:.1} mm",
            reading.front_teeth_width_mm, reading.head_width_mm
        );
    }
    println!("잇몸 위험 점수: {}", risk);
    println!();
    println!(
        "{} {} - {} {}% · {}",
        FEATURED.brand,
        FEATURED.name,
        msgs.fit_label,
        FEATURED.fit_percent,
        format_krw(FEATURED.price_krw)
    );
    println!("  {}", FEATURED.description);
    println!();
    for product in RANKING.iter() {
        println!(
            "  {}. {} ({}%) {}",
            product.rank,
            product.name,
            product.match_percent,
            format_krw(product.price_krw)
        );
    }

    let mut subscription = Subscription::default();
    let _ = subscription.set_delivery_day(settings.delivery_day);
    println!();
    println!("{}: {}", msgs.monthly_total, format_krw(subscription.monthly_total_krw()));
    println!("{}: -{}", msgs.discount, format_krw(subscription.discount_krw()));
    println!("{}: {}", msgs.final_price, format_krw(subscription.final_monthly_krw()));
    println!("{}: 매월 {}일", msgs.delivery_day, subscription.delivery_day);

    settings.box_width_px = wizard.hand.box_width_px();
    if let Err(e) = settings.save() {
        tracing::warn!(error = %e, "failed to persist settings");
    }

    Ok(())
}

/// Read one trimmed line after printing a label.
fn prompt(stdin: &io::Stdin, label: &str) -> anyhow::Result<String> {
    print!("{}: ", label);
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Numbered single choice; re-prompts until a valid index arrives.
fn prompt_choice<T: Copy + std::fmt::Display>(
    stdin: &io::Stdin,
    label: &str,
    options: &[T],
) -> anyhow::Result<T> {
    println!("{}:", label);
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {}", i + 1, option);
    }
    loop {
        let input = prompt(stdin, "선택")?;
        if let Some(choice) = input
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| options.get(i))
        {
            return Ok(*choice);
        }
        println!("1-{} 사이 번호를 입력해주세요", options.len());
    }
}

fn prompt_yes_no(stdin: &io::Stdin, label: &str) -> anyhow::Result<bool> {
    let input = prompt(stdin, &format!("{} (y/n)", label))?;
    Ok(matches!(input.to_lowercase().as_str(), "y" | "yes"))
}
