use chairfit_model::{
    catalog::Testimonial,
    goal::GoalId,
    profile::{AgeRange, BodyType, Profile},
};
use log::debug;

pub const SHOWN: usize = 4;

pub const TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        name: "Márcia Silva",
        age: 56,
        occupation: "Retired teacher",
        quote: "I thought arthritis would keep me away from yoga. I do every exercise on my office chair and lost 5 kg in 6 weeks!",
        age_group: AgeRange::From55To64,
        body_types: &[BodyType::Average, BodyType::Plus],
        goals: &[GoalId::LoseWeight, GoalId::ImproveMobility],
    },
    Testimonial {
        name: "Roberto Almeida",
        age: 42,
        occupation: "Systems analyst",
        quote: "Ten hours a day sitting meant constant back pain. Two weeks into the method the pain was gone and my energy shot up.",
        age_group: AgeRange::From35To44,
        body_types: &[BodyType::Average],
        goals: &[GoalId::ImproveMobility, GoalId::ManageMood],
    },
    Testimonial {
        name: "Carlos Mendes",
        age: 61,
        occupation: "Retired",
        quote: "My blood pressure was always high. After a month on the programme my doctor was impressed, all without leaving my chair.",
        age_group: AgeRange::From55To64,
        body_types: &[BodyType::Average, BodyType::Plus],
        goals: &[GoalId::ImproveHeart, GoalId::ImproveMobility],
    },
    Testimonial {
        name: "Patrícia Lopes",
        age: 38,
        occupation: "Entrepreneur",
        quote: "With three small kids I never had time to exercise. Now I practise while I work, even in video calls. 7 kg down and far less anxiety.",
        age_group: AgeRange::From35To44,
        body_types: &[BodyType::Average, BodyType::Curvy],
        goals: &[GoalId::LoseWeight, GoalId::ManageMood],
    },
    Testimonial {
        name: "Helena Moreira",
        age: 70,
        occupation: "Retired",
        quote: "At 70 I thought my flexibility was gone for good. Today I play with my grandchildren without joint pain.",
        age_group: AgeRange::Over65,
        body_types: &[BodyType::Average, BodyType::Plus],
        goals: &[GoalId::ImproveMobility, GoalId::ImproveHeart],
    },
    Testimonial {
        name: "Sandra Ribeiro",
        age: 49,
        occupation: "Accountant",
        quote: "I went down three dress sizes with no crazy diets, just the chair exercises and the programme's eating tips.",
        age_group: AgeRange::From45To54,
        body_types: &[BodyType::Plus, BodyType::Curvy],
        goals: &[GoalId::LoseWeight, GoalId::EnhanceSkin],
    },
];

/// Replaces `current` with the entries that satisfy `keep`, unless none do.
fn narrow<'a>(
    current: Vec<&'a Testimonial>,
    keep: impl Fn(&Testimonial) -> bool,
) -> Vec<&'a Testimonial> {
    let narrowed: Vec<_> = current.iter().copied().filter(|t| keep(t)).collect();
    if narrowed.is_empty() {
        current
    } else {
        narrowed
    }
}

/// Picks the stories closest to the user's profile, always returning
/// [`SHOWN`] entries when the pool is big enough.
pub fn select<'a>(pool: &'a [Testimonial], profile: &Profile) -> Vec<&'a Testimonial> {
    let mut filtered: Vec<_> = pool.iter().collect();

    if let Some(age_range) = profile.age_range {
        filtered = narrow(filtered, |t| t.age_group == age_range);
    }

    if let Some(body_type) = profile.body_type {
        if filtered.len() > 2 {
            filtered = narrow(filtered, |t| t.fits_body_type(body_type));
        }
    }

    let goals: Vec<GoalId> = profile.selected_goals().map(|g| g.id).collect();
    if !goals.is_empty() && filtered.len() > 2 {
        filtered = narrow(filtered, |t| t.shares_goal(&goals));
    }

    let mut result: Vec<_> = filtered.into_iter().take(SHOWN).collect();
    if result.len() < SHOWN {
        let missing = SHOWN - result.len();
        let padding: Vec<_> = pool
            .iter()
            .filter(|t| !result.iter().any(|r| std::ptr::eq(*r, *t)))
            .take(missing)
            .collect();
        result.extend(padding);
    }
    debug!(
        "Selected testimonials: {:?}",
        result.iter().map(|t| t.name).collect::<Vec<_>>()
    );
    result
}
