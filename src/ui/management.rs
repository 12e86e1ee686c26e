use crate::i18n::Translator;
use crate::payment::{Plan, PlanId, SubscriptionStatus, PLAN_CATALOG};
use crate::ui::format::{format_date, format_price, Locale};
use egui::{Color32, Context, Grid, RichText, Window};

/// Inputs handed to the management view; the same ones the section received
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagementProps<'a> {
    pub status: SubscriptionStatus,
    pub current_plan: Option<&'a str>,
    pub expiry_date: &'a str,
    pub locale: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManagementAction {
    Close,
    Subscribe(String),
}

/// Child surface where the user reviews or changes their subscription.
///
/// Called once per frame while shown. Returning `Some` ends the view.
pub trait ManagementView {
    fn show(
        &mut self,
        ctx: &Context,
        props: &ManagementProps<'_>,
        i18n: &Translator,
    ) -> Option<ManagementAction>;
}

/// Default management view: a window listing the catalog plans
#[derive(Debug, Default)]
pub struct PlanPickerWindow;

impl PlanPickerWindow {
    pub fn new() -> Self {
        Self
    }

    fn plan_row(
        ui: &mut egui::Ui,
        plan: &Plan,
        props: &ManagementProps<'_>,
        i18n: &Translator,
    ) -> Option<ManagementAction> {
        let is_current = props.current_plan.and_then(|p| p.parse::<PlanId>().ok()) == Some(plan.id);
        let currency = i18n.t("subscription.currency");

        let name = RichText::new(i18n.t(plan.name_key)).strong();
        ui.label(if is_current { name.color(Color32::LIGHT_GREEN) } else { name });
        ui.label(format!(
            "{} {}",
            format_price(f64::from(plan.total_price), props.locale),
            currency
        ));
        ui.label(format!(
            "{} {} / {}",
            format_price(f64::from(plan.monthly_price), props.locale),
            currency,
            i18n.t("subscription.perMonth")
        ));
        match plan.savings {
            Some(savings) if savings > 0 => {
                ui.label(
                    RichText::new(format!(
                        "{}: {} {}",
                        i18n.t("subscription.savings"),
                        format_price(f64::from(savings), props.locale),
                        currency
                    ))
                    .color(Color32::GREEN),
                );
            }
            _ => {
                ui.label("");
            }
        }

        let mut action = None;
        if is_current && props.status == SubscriptionStatus::Active {
            ui.label(RichText::new(i18n.t("subscription.current")).italics());
        } else if ui.button(i18n.t("subscription.subscribe")).clicked() {
            action = Some(ManagementAction::Subscribe(plan.id.to_string()));
        }
        ui.end_row();
        action
    }
}

impl ManagementView for PlanPickerWindow {
    fn show(
        &mut self,
        ctx: &Context,
        props: &ManagementProps<'_>,
        i18n: &Translator,
    ) -> Option<ManagementAction> {
        let mut open = true;
        let mut action = None;

        Window::new(i18n.t("subscription.manage"))
            .collapsible(false)
            .resizable(false)
            .default_width(520.0)
            .open(&mut open)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(format!("{}:", i18n.t("subscription.expiresOn")));
                    ui.label(format_date(Some(props.expiry_date), props.locale));
                });
                ui.separator();

                Grid::new("subscription_plans")
                    .num_columns(5)
                    .spacing([16.0, 8.0])
                    .show(ui, |ui| {
                        for plan in &PLAN_CATALOG {
                            if let Some(chosen) = Self::plan_row(ui, plan, props, i18n) {
                                action = Some(chosen);
                            }
                        }
                    });

                ui.separator();
                if ui.button(i18n.t("subscription.close")).clicked() {
                    action = Some(ManagementAction::Close);
                }
            });

        if !open {
            return Some(ManagementAction::Close);
        }
        action
    }
}
