pub mod catalog;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub use catalog::{resolve_plan, Plan, PlanDetails, PLAN_CATALOG};

/// Purchasable subscription durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanId {
    #[serde(rename = "1-month")]
    OneMonth,
    #[serde(rename = "6-months")]
    SixMonths,
    #[serde(rename = "1-year")]
    OneYear,
}

impl PlanId {
    pub const ALL: [PlanId; 3] = [PlanId::OneMonth, PlanId::SixMonths, PlanId::OneYear];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1-month",
            Self::SixMonths => "6-months",
            Self::OneYear => "1-year",
        }
    }
}

impl fmt::Display for PlanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown subscription plan: {0}")]
pub struct UnknownPlan(pub String);

impl FromStr for PlanId {
    type Err = UnknownPlan;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1-month" => Ok(Self::OneMonth),
            "6-months" => Ok(Self::SixMonths),
            "1-year" => Ok(Self::OneYear),
            other => Err(UnknownPlan(other.to_string())),
        }
    }
}

/// Subscription status as reported by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    #[default]
    Active,
    Expired,
    Pending,
}

impl SubscriptionStatus {
    /// Translation key for the status badge
    pub fn label_key(&self) -> &'static str {
        match self {
            Self::Active => "subscription.status.active",
            Self::Expired => "subscription.status.expired",
            Self::Pending => "subscription.status.pending",
        }
    }
}

/// Read-only inputs owned by the parent view.
///
/// `current_plan` stays a raw string: the backend may hand out identifiers
/// that are not in the catalog (trial plans, retired plans).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionProps {
    pub status: SubscriptionStatus,
    pub expiry_date: String,
    #[serde(default)]
    pub current_plan: Option<String>,
}

impl SubscriptionProps {
    pub fn new(status: SubscriptionStatus, expiry_date: impl Into<String>) -> Self {
        Self {
            status,
            expiry_date: expiry_date.into(),
            current_plan: None,
        }
    }

    pub fn with_plan(mut self, plan: impl Into<String>) -> Self {
        self.current_plan = Some(plan.into());
        self
    }

    /// The current plan when it is one of the catalog plans
    pub fn known_plan(&self) -> Option<PlanId> {
        self.current_plan.as_deref().and_then(|p| p.parse().ok())
    }
}
