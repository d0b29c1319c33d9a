use chairfit_model::{
    catalog::Archetype,
    goal::GoalId,
    profile::{
        AgeRange, AvailableTime, BodyType, ChairYogaExperience, DreamBody, ExerciseStyle, Profile,
    },
};
use log::debug;

pub const DEFAULT_ARCHETYPE: Archetype = Archetype {
    title: "Dedicated Yogi",
    icon: "🌟",
};

struct Rule {
    archetype: Archetype,
    matches: fn(&Profile) -> bool,
}

/// Evaluated top to bottom; the first rule that matches decides.
const RULES: [Rule; 10] = [
    Rule {
        archetype: Archetype {
            title: "Wellness Seeker",
            icon: "🌿",
        },
        matches: |p| p.has_goal(GoalId::ManageMood) || p.has_goal(GoalId::BalanceHormones),
    },
    Rule {
        archetype: Archetype {
            title: "Body Transformer",
            icon: "🔥",
        },
        matches: |p| p.has_goal(GoalId::LoseWeight) && p.dream_body == Some(DreamBody::Fit),
    },
    Rule {
        archetype: Archetype {
            title: "Mobility Master",
            icon: "🌊",
        },
        matches: |p| p.has_goal(GoalId::ImproveMobility),
    },
    Rule {
        archetype: Archetype {
            title: "Balanced Achiever",
            icon: "⚖️",
        },
        matches: |p| p.dream_body == Some(DreamBody::Athletic) || p.prefers(ExerciseStyle::Strength),
    },
    Rule {
        archetype: Archetype {
            title: "Vitality Seeker",
            icon: "💫",
        },
        matches: |p| p.has_goal(GoalId::ImproveHeart) || p.age_range == Some(AgeRange::Over65),
    },
    Rule {
        archetype: Archetype {
            title: "Mindful Mover",
            icon: "🧘",
        },
        matches: |p| {
            p.chair_yoga_experience == Some(ChairYogaExperience::Regular)
                || p.prefers(ExerciseStyle::Yoga)
        },
    },
    Rule {
        archetype: Archetype {
            title: "Busy Optimizer",
            icon: "⏱️",
        },
        matches: |p| {
            matches!(
                p.available_time,
                Some(AvailableTime::LessThan15 | AvailableTime::From15To30)
            )
        },
    },
    Rule {
        archetype: Archetype {
            title: "Glow Enthusiast",
            icon: "✨",
        },
        matches: |p| p.has_goal(GoalId::EnhanceSkin),
    },
    Rule {
        archetype: Archetype {
            title: "Harmony Seeker",
            icon: "☯️",
        },
        matches: |p| p.dream_body == Some(DreamBody::Content),
    },
    Rule {
        archetype: Archetype {
            title: "Curvy Confident",
            icon: "💪",
        },
        matches: |p| matches!(p.body_type, Some(BodyType::Curvy | BodyType::Plus)),
    },
];

pub fn all() -> impl Iterator<Item = Archetype> {
    RULES.iter().map(|rule| rule.archetype)
}

pub fn matching(profile: &Profile) -> Archetype {
    let archetype = RULES
        .iter()
        .find(|rule| (rule.matches)(profile))
        .map(|rule| rule.archetype)
        .unwrap_or(DEFAULT_ARCHETYPE);
    debug!("Matched archetype {}", archetype.title);
    archetype
}
