use chairfit_model::{catalog::PricingPlan, profile::Plan};

pub const PLANS: [PricingPlan; 3] = [
    PricingPlan {
        plan: Plan::Starter,
        title: "Essential",
        price_cents: 1990,
        features: &["Core method", "21-day plan", "Email support"],
        recommended: false,
    },
    PricingPlan {
        plan: Plan::Premium,
        title: "Complete",
        price_cents: 2790,
        features: &[
            "Advanced method",
            "21-day plan",
            "VIP community",
            "Progress coaching",
            "Exclusive bonuses",
        ],
        recommended: true,
    },
    PricingPlan {
        plan: Plan::Vip,
        title: "Total Transformation",
        price_cents: 4790,
        features: &[
            "Everything in Complete",
            "One-to-one consultation",
            "Personalised analysis",
            "Nutrition plan",
            "Lifetime access",
        ],
        recommended: false,
    },
];

pub fn lookup(plan: Plan) -> &'static PricingPlan {
    match plan {
        Plan::Starter => &PLANS[0],
        Plan::Premium => &PLANS[1],
        Plan::Vip => &PLANS[2],
    }
}

/// Plan preselected on the sales page.
pub fn recommended() -> &'static PricingPlan {
    PLANS.iter().find(|p| p.recommended).unwrap_or(&PLANS[1])
}
