pub mod format;
pub mod management;
pub mod payment_dialog;
pub mod subscription_section;

pub use management::{ManagementAction, ManagementProps, ManagementView, PlanPickerWindow};
pub use payment_dialog::{PaymentDialog, PaymentFlow, PaymentOutcome};
pub use subscription_section::{SectionSummary, SubscriptionEvent, SubscriptionSection, Visibility};
