use crate::i18n::Translator;
use crate::payment::{Plan, PlanDetails, PlanId};
use crate::ui::format::{format_price, Locale};
use egui::{Context, RichText, Window};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    Cancelled,
    Succeeded(String),
}

/// Standalone payment flow. Called once per frame while shown.
pub trait PaymentFlow {
    fn show(
        &mut self,
        ctx: &Context,
        current: &PlanDetails,
        locale: Locale,
        i18n: &Translator,
    ) -> Option<PaymentOutcome>;
}

/// Default payment flow: pick a plan and confirm it.
///
/// Confirming only reports the chosen plan; charging happens elsewhere.
#[derive(Debug, Default)]
pub struct PaymentDialog {
    selected: Option<PlanId>,
}

impl PaymentDialog {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PaymentFlow for PaymentDialog {
    fn show(
        &mut self,
        ctx: &Context,
        current: &PlanDetails,
        locale: Locale,
        i18n: &Translator,
    ) -> Option<PaymentOutcome> {
        let selected = *self
            .selected
            .get_or_insert_with(|| current.id.parse().unwrap_or(PlanId::OneMonth));
        let mut choice = selected;
        let mut open = true;
        let mut outcome = None;

        Window::new(i18n.t("payment.title"))
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                for id in PlanId::ALL {
                    ui.radio_value(&mut choice, id, i18n.t(Plan::get(id).name_key));
                }
                ui.separator();

                let plan = Plan::get(choice);
                ui.label(
                    RichText::new(format!(
                        "{}: {} {}",
                        i18n.t("payment.total"),
                        format_price(f64::from(plan.total_price), locale),
                        i18n.t("subscription.currency")
                    ))
                    .strong(),
                );

                ui.horizontal(|ui| {
                    if ui.button(i18n.t("payment.confirm")).clicked() {
                        outcome = Some(PaymentOutcome::Succeeded(choice.to_string()));
                    }
                    if ui.button(i18n.t("payment.cancel")).clicked() {
                        outcome = Some(PaymentOutcome::Cancelled);
                    }
                });
            });

        self.selected = Some(choice);
        if !open {
            outcome = Some(PaymentOutcome::Cancelled);
        }
        if outcome.is_some() {
            // Start from the current plan again next time the dialog opens
            self.selected = None;
        }
        outcome
    }
}
