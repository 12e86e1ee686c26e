use anyhow::Result;
use eframe::egui;
use subscription_section::config::AppConfig;
use subscription_section::i18n::Translator;
use subscription_section::ui::{SubscriptionEvent, SubscriptionSection};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("subscription_section=debug")),
        )
        .init();

    info!("Starting subscription section...");

    let config = AppConfig::load_default()?;
    info!(
        "Display language {:?}, locale {:?}",
        config.display.language, config.display.locale
    );

    // Stand-in for the parent view: it only needs to hear about new plans
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<SubscriptionEvent>();
    tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            match event {
                SubscriptionEvent::PaymentSucceeded { plan_id } => {
                    info!("Parent notified of new plan: {}", plan_id);
                }
            }
        }
    });

    let section = SubscriptionSection::with_event_sender(config.demo.props(), event_tx)
        .with_translator(Translator::new(config.display.language))
        .with_locale(config.display.locale);

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([460.0, 380.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Subscription",
        native_options,
        Box::new(move |_cc| Ok(Box::new(SectionApp { section }))),
    )
    .map_err(|e| anyhow::anyhow!("UI error: {}", e))?;

    info!("Subscription section closed");
    Ok(())
}

struct SectionApp {
    section: SubscriptionSection,
}

impl eframe::App for SectionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("actions").show(ctx, |ui| {
            if ui.button("💳 Buy a plan").clicked() {
                self.section.open_payment();
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.section.ui(ui);
        });

        // Days-left only changes with the clock
        ctx.request_repaint_after(std::time::Duration::from_secs(60));
    }
}
