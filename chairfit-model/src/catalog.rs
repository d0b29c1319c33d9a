use chrono::NaiveDate;

use crate::goal::GoalId;
use crate::profile::{AgeRange, BodyType, Plan};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Archetype {
    pub title: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeeklyPoint {
    pub date: NaiveDate,
    pub weight_kg: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Testimonial {
    pub name: &'static str,
    pub age: u8,
    pub occupation: &'static str,
    pub quote: &'static str,
    pub age_group: AgeRange,
    pub body_types: &'static [BodyType],
    pub goals: &'static [GoalId],
}

impl Testimonial {
    pub fn fits_body_type(&self, body_type: BodyType) -> bool {
        self.body_types.contains(&body_type)
    }

    pub fn shares_goal(&self, goals: &[GoalId]) -> bool {
        self.goals.iter().any(|g| goals.contains(g))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricingPlan {
    pub plan: Plan,
    pub title: &'static str,
    /// Monthly price in centavos.
    pub price_cents: u32,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

impl PricingPlan {
    pub fn display_price(&self) -> String {
        format!("R${},{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
