use crate::i18n::Translator;
use crate::payment::{resolve_plan, PlanDetails, SubscriptionProps, SubscriptionStatus};
use crate::ui::format::{
    days_until_expiry_at, format_date, format_price, is_expiring_soon, Locale,
};
use crate::ui::management::{ManagementAction, ManagementProps, ManagementView, PlanPickerWindow};
use crate::ui::payment_dialog::{PaymentDialog, PaymentFlow, PaymentOutcome};
use chrono::{DateTime, Utc};
use egui::{Color32, RichText};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Visibility of a child view owned by the section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

impl Visibility {
    pub fn is_shown(&self) -> bool {
        matches!(self, Self::Shown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionEvent {
    PaymentSucceeded { plan_id: String },
}

pub type PaymentSuccessCallback = Box<dyn FnMut(&str) + Send>;

/// Everything the card displays, derived from props and the clock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub status: SubscriptionStatus,
    pub plan: PlanDetails,
    pub total_price: String,
    pub monthly_price: String,
    pub savings: Option<String>,
    pub expiry_date: String,
    pub days_until_expiry: i64,
    pub expiring_soon: bool,
}

/// Subscription status card with a management view and a payment flow.
///
/// Holds no subscription data of its own: props come from the parent and
/// subscribe outcomes go straight back up through `on_payment_success`.
pub struct SubscriptionSection {
    props: SubscriptionProps,
    i18n: Translator,
    locale: Locale,
    show_payment: Visibility,
    show_management: Visibility,
    on_payment_success: PaymentSuccessCallback,
    management: Box<dyn ManagementView>,
    payment: Box<dyn PaymentFlow>,
}

impl SubscriptionSection {
    pub fn new<F>(props: SubscriptionProps, on_payment_success: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Self {
            props,
            i18n: Translator::default(),
            locale: Locale::default(),
            show_payment: Visibility::Hidden,
            show_management: Visibility::Hidden,
            on_payment_success: Box::new(on_payment_success),
            management: Box::new(PlanPickerWindow::new()),
            payment: Box::new(PaymentDialog::new()),
        }
    }

    /// Report successful subscriptions as events on `tx`
    pub fn with_event_sender(
        props: SubscriptionProps,
        tx: mpsc::UnboundedSender<SubscriptionEvent>,
    ) -> Self {
        Self::new(props, move |plan_id: &str| {
            let event = SubscriptionEvent::PaymentSucceeded {
                plan_id: plan_id.to_string(),
            };
            if tx.send(event).is_err() {
                warn!("Subscription event receiver dropped");
            }
        })
    }

    pub fn with_translator(mut self, i18n: Translator) -> Self {
        self.i18n = i18n;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_management_view(mut self, view: impl ManagementView + 'static) -> Self {
        self.management = Box::new(view);
        self
    }

    pub fn with_payment_flow(mut self, flow: impl PaymentFlow + 'static) -> Self {
        self.payment = Box::new(flow);
        self
    }

    pub fn props(&self) -> &SubscriptionProps {
        &self.props
    }

    /// Replace the props, e.g. after the parent reloaded the subscription
    pub fn set_props(&mut self, props: SubscriptionProps) {
        self.props = props;
    }

    pub fn summary(&self) -> SectionSummary {
        self.summary_at(Utc::now())
    }

    pub fn summary_at(&self, now: DateTime<Utc>) -> SectionSummary {
        let plan = resolve_plan(self.props.current_plan.as_deref(), &self.i18n);
        let days = days_until_expiry_at(&self.props.expiry_date, now);

        SectionSummary {
            status: self.props.status,
            total_price: format_price(f64::from(plan.total_price), self.locale),
            monthly_price: format_price(f64::from(plan.monthly_price), self.locale),
            savings: plan
                .savings
                .filter(|s| *s > 0)
                .map(|s| format_price(f64::from(s), self.locale)),
            expiry_date: format_date(Some(&self.props.expiry_date), self.locale),
            days_until_expiry: days,
            expiring_soon: is_expiring_soon(days),
            plan,
        }
    }

    pub fn management_visibility(&self) -> Visibility {
        self.show_management
    }

    pub fn payment_visibility(&self) -> Visibility {
        self.show_payment
    }

    pub fn open_management(&mut self) {
        self.show_management = Visibility::Shown;
        debug!("Subscription management opened");
    }

    pub fn close_management(&mut self) {
        self.show_management = Visibility::Hidden;
        debug!("Subscription management closed");
    }

    /// Subscribe action from the management view
    pub fn handle_subscribe(&mut self, plan_id: &str) {
        info!("Subscribed to plan: {}", plan_id);
        self.show_management = Visibility::Hidden;
        (self.on_payment_success)(plan_id);
    }

    pub fn open_payment(&mut self) {
        self.show_payment = Visibility::Shown;
        debug!("Payment dialog opened");
    }

    pub fn close_payment(&mut self) {
        self.show_payment = Visibility::Hidden;
        debug!("Payment dialog closed");
    }

    pub fn handle_payment_success(&mut self, plan_id: &str) {
        info!("Payment succeeded for plan: {}", plan_id);
        self.show_payment = Visibility::Hidden;
        (self.on_payment_success)(plan_id);
    }

    fn apply_management_action(&mut self, action: ManagementAction) {
        match action {
            ManagementAction::Close => self.close_management(),
            ManagementAction::Subscribe(plan_id) => self.handle_subscribe(&plan_id),
        }
    }

    fn apply_payment_outcome(&mut self, outcome: PaymentOutcome) {
        match outcome {
            PaymentOutcome::Cancelled => self.close_payment(),
            PaymentOutcome::Succeeded(plan_id) => self.handle_payment_success(&plan_id),
        }
    }

    fn status_color(status: SubscriptionStatus) -> Color32 {
        match status {
            SubscriptionStatus::Active => Color32::from_rgb(46, 160, 67),
            SubscriptionStatus::Expired => Color32::from_rgb(218, 54, 51),
            SubscriptionStatus::Pending => Color32::from_rgb(210, 153, 34),
        }
    }

    /// Draw the card and any child view that is currently shown
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let summary = self.summary();
        let i18n = self.i18n;
        let mut manage_clicked = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.heading(i18n.t("subscription.title"));
                ui.label(
                    RichText::new(i18n.t(summary.status.label_key()))
                        .color(Color32::WHITE)
                        .background_color(Self::status_color(summary.status)),
                );
            });
            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("{}:", i18n.t("subscription.currentPlan")));
                ui.label(RichText::new(&summary.plan.name).strong());
            });

            if summary.plan.total_price > 0 {
                let currency = i18n.t("subscription.currency");
                ui.label(RichText::new(format!("{} {}", summary.total_price, currency)).size(20.0));
                ui.label(format!(
                    "{} {} / {}",
                    summary.monthly_price,
                    currency,
                    i18n.t("subscription.perMonth")
                ));
                if let Some(savings) = &summary.savings {
                    ui.label(
                        RichText::new(format!("{}: {} {}", i18n.t("subscription.savings"), savings, currency))
                            .color(Color32::GREEN),
                    );
                }
            }

            if !summary.expiry_date.is_empty() {
                ui.horizontal(|ui| {
                    ui.label(format!("📅 {}:", i18n.t("subscription.expiresOn")));
                    ui.label(summary.expiry_date.as_str());
                });
                if summary.days_until_expiry > 0 {
                    ui.label(format!("{} {}", summary.days_until_expiry, i18n.t("subscription.daysLeft")));
                }
            }

            if summary.expiring_soon {
                ui.colored_label(
                    Color32::from_rgb(210, 153, 34),
                    format!("⚠ {}", i18n.t("subscription.expiringSoon")),
                );
            }

            ui.add_space(8.0);
            if ui.button(i18n.t("subscription.manage")).clicked() {
                manage_clicked = true;
            }
        });

        if manage_clicked {
            self.open_management();
        }

        let ctx = ui.ctx().clone();

        if self.show_management.is_shown() {
            let props = ManagementProps {
                status: self.props.status,
                current_plan: self.props.current_plan.as_deref(),
                expiry_date: &self.props.expiry_date,
                locale: self.locale,
            };
            let action = self.management.show(&ctx, &props, &self.i18n);
            if let Some(action) = action {
                self.apply_management_action(action);
            }
        }

        if self.show_payment.is_shown() {
            let outcome = self.payment.show(&ctx, &summary.plan, self.locale, &self.i18n);
            if let Some(outcome) = outcome {
                self.apply_payment_outcome(outcome);
            }
        }
    }
}
