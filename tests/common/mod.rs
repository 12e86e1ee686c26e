#![allow(dead_code)]

use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use subscription_section::i18n::Translator;
use subscription_section::payment::{PlanDetails, SubscriptionProps};
use subscription_section::ui::format::Locale;
use subscription_section::ui::{
    ManagementAction, ManagementProps, ManagementView, PaymentFlow, PaymentOutcome,
    SubscriptionSection,
};
use tempfile::TempDir;

/// Temporary directory holding a config file
pub struct TestEnvironment {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestEnvironment {
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        Ok(Self {
            temp_dir,
            config_path,
        })
    }

    pub fn write_config(&self, contents: &str) -> Result<&PathBuf> {
        std::fs::write(&self.config_path, contents)?;
        Ok(&self.config_path)
    }
}

/// Expiry date `days` from now, as an RFC 3339 string.
///
/// Adds an hour of slack so the clock moving during the test does not
/// change the rounded day count.
pub fn expiry_in_days(days: i64) -> String {
    (Utc::now() + Duration::days(days) - Duration::hours(1)).to_rfc3339()
}

pub fn fixed_now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-04-15T10:00:00Z")
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap()
}

/// Section whose success callback records every plan id it receives
pub fn recording_section(props: SubscriptionProps) -> (SubscriptionSection, Arc<Mutex<Vec<String>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let section = SubscriptionSection::new(props, move |plan_id: &str| {
        sink.lock().unwrap().push(plan_id.to_string());
    });
    (section, calls)
}

/// Management view that replays a fixed list of per-frame results
#[derive(Default)]
pub struct ScriptedManagementView {
    pub script: VecDeque<Option<ManagementAction>>,
    pub seen: Arc<Mutex<Vec<(Option<String>, String)>>>,
}

impl ScriptedManagementView {
    pub fn new(script: impl IntoIterator<Item = Option<ManagementAction>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            seen: Arc::default(),
        }
    }
}

impl ManagementView for ScriptedManagementView {
    fn show(
        &mut self,
        _ctx: &egui::Context,
        props: &ManagementProps<'_>,
        _i18n: &Translator,
    ) -> Option<ManagementAction> {
        self.seen.lock().unwrap().push((
            props.current_plan.map(str::to_string),
            props.expiry_date.to_string(),
        ));
        self.script.pop_front().flatten()
    }
}

#[derive(Default)]
pub struct ScriptedPaymentFlow {
    pub script: VecDeque<Option<PaymentOutcome>>,
}

impl PaymentFlow for ScriptedPaymentFlow {
    fn show(
        &mut self,
        _ctx: &egui::Context,
        _current: &PlanDetails,
        _locale: Locale,
        _i18n: &Translator,
    ) -> Option<PaymentOutcome> {
        self.script.pop_front().flatten()
    }
}

/// Run one headless egui frame with the section in the central panel
pub fn run_frame(ctx: &egui::Context, section: &mut SubscriptionSection) {
    let _ = ctx.run(egui::RawInput::default(), |ctx| {
        egui::CentralPanel::default().show(ctx, |ui| {
            section.ui(ui);
        });
    });
}
