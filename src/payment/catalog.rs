use super::PlanId;
use crate::i18n::Translator;

/// A catalog entry. Prices are in the smallest currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: PlanId,
    pub name_key: &'static str,
    pub duration_months: u32,
    pub total_price: u32,
    pub monthly_price: u32,
    pub savings: Option<u32>,
}

pub const PLAN_CATALOG: [Plan; 3] = [
    Plan {
        id: PlanId::OneMonth,
        name_key: "subscription.oneMonth",
        duration_months: 1,
        total_price: 99_990,
        monthly_price: 99_990,
        savings: None,
    },
    Plan {
        id: PlanId::SixMonths,
        name_key: "subscription.sixMonths",
        duration_months: 6,
        total_price: 539_990,
        monthly_price: 89_998,
        savings: Some(180_000),
    },
    Plan {
        id: PlanId::OneYear,
        name_key: "subscription.oneYear",
        duration_months: 12,
        total_price: 959_990,
        monthly_price: 79_999,
        savings: Some(599_900),
    },
];

impl Plan {
    pub fn get(id: PlanId) -> &'static Plan {
        match id {
            PlanId::OneMonth => &PLAN_CATALOG[0],
            PlanId::SixMonths => &PLAN_CATALOG[1],
            PlanId::OneYear => &PLAN_CATALOG[2],
        }
    }

    pub fn details(&self, i18n: &Translator) -> PlanDetails {
        PlanDetails {
            id: self.id.as_str().to_string(),
            name: i18n.t(self.name_key),
            duration_months: self.duration_months,
            total_price: self.total_price,
            monthly_price: self.monthly_price,
            savings: self.savings,
        }
    }
}

/// A plan resolved for display, with its name already translated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanDetails {
    pub id: String,
    pub name: String,
    pub duration_months: u32,
    pub total_price: u32,
    pub monthly_price: u32,
    pub savings: Option<u32>,
}

impl PlanDetails {
    pub fn is_catalog_plan(&self) -> bool {
        self.id.parse::<PlanId>().is_ok()
    }

    pub fn has_savings(&self) -> bool {
        self.savings.is_some_and(|s| s > 0)
    }
}

/// Resolve the caller's plan identifier into something displayable.
///
/// Never fails: unknown or missing identifiers get a zero-priced entry named
/// after the identifier itself, "Free Trial" for trial ids, or the localized
/// "none" label.
pub fn resolve_plan(current_plan: Option<&str>, i18n: &Translator) -> PlanDetails {
    if let Some(id) = current_plan.and_then(|p| p.parse::<PlanId>().ok()) {
        return Plan::get(id).details(i18n);
    }

    let raw = current_plan.filter(|p| !p.is_empty());
    let name = match raw {
        Some(p) if p.contains("trial") => "Free Trial".to_string(),
        Some(p) => p.to_string(),
        None => i18n
            .lookup("subscription.none")
            .filter(|s| !s.is_empty())
            .unwrap_or("None")
            .to_string(),
    };

    PlanDetails {
        id: raw.unwrap_or("unknown").to_string(),
        name,
        duration_months: 0,
        total_price: 0,
        monthly_price: 0,
        savings: Some(0),
    }
}
