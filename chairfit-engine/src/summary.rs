use std::fmt;

use chairfit_model::profile::{
    AvailableTime, BodyType, ChairYogaExperience, DreamBody, ExerciseStyle, Profile,
};
use itertools::Itertools;

use crate::bmi::Bmi;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitnessLevel {
    Moderate,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    pub fn from_experience(experience: Option<ChairYogaExperience>) -> Self {
        match experience {
            Some(ChairYogaExperience::Regular) => FitnessLevel::Advanced,
            Some(ChairYogaExperience::Tried) => FitnessLevel::Intermediate,
            _ => FitnessLevel::Moderate,
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

const DEFAULT_RECOMMENDATIONS: [&str; 3] = [
    "Three weekly sessions of 20-30 minutes adapted to your profile",
    "A mix of strength and flexibility moves for all-round balance",
    "Personalised progression based on your history and goals",
];

pub fn recommendations(profile: &Profile) -> Vec<&'static str> {
    let mut recommendations = Vec::new();
    if profile.body_mass_index.is_some_and(|bmi| bmi > 25.0) {
        recommendations.push("Low-impact training that protects your joints while building strength");
    }
    if profile.prefers(ExerciseStyle::Yoga) {
        recommendations.push("Chair yoga for flexibility, balance and calm");
    }
    if profile.prefers(ExerciseStyle::Strength) {
        recommendations.push("Bodyweight strength work to tone and empower");
    }

    if recommendations.is_empty() {
        DEFAULT_RECOMMENDATIONS.to_vec()
    } else {
        recommendations
    }
}

pub fn message(profile: &Profile) -> String {
    let mut sentences = vec!["You are ready to transform your life!".to_owned()];

    if let Some(age_range) = profile.age_range {
        sentences.push(format!(
            "In your age group ({}), every step counts towards a stronger you.",
            age_range
        ));
    }

    let experience = match profile.chair_yoga_experience {
        Some(ChairYogaExperience::Never) => "starting yoga from scratch",
        Some(ChairYogaExperience::Tried) => "with a touch of yoga behind you",
        _ => "already experienced with yoga",
    };
    sentences.push(format!(
        "Being {}, your plan will be unique, safe and built to grow with you.",
        experience
    ));

    sentences.push(
        match profile.available_time {
            Some(AvailableTime::LessThan15) => {
                "Short on time, we go straight to the point with quick, powerful workouts."
            }
            Some(AvailableTime::From15To30) => {
                "Your routine comes alive with short sessions that deliver real results."
            }
            _ => "With time to spare, your transformation will be complete and consistent.",
        }
        .to_owned(),
    );

    let goals = profile
        .selected_goals()
        .map(|g| g.title.to_lowercase())
        .join(", ");
    if !goals.is_empty() {
        sentences.push(format!("Full focus on: {}. Let's make it happen!", goals));
    }

    if profile.body_type == Some(BodyType::Plus) && profile.dream_body == Some(DreamBody::Fit) {
        sentences.push(
            "Steady progress with workouts that respect and challenge your body.".to_owned(),
        );
    }

    let dream = if profile.dream_body == Some(DreamBody::Fit) {
        "a strong, defined body"
    } else {
        "the body of your dreams"
    };
    sentences.push(format!(
        "It's time to achieve {}. Let's go together, step by step!",
        dream
    ));

    sentences.join(" ")
}

/// Everything the profile summary screen shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Summary {
    pub bmi: Option<Bmi>,
    pub fitness_level: FitnessLevel,
    pub recommendations: Vec<&'static str>,
    pub message: String,
}

pub fn summarize(profile: &Profile) -> Summary {
    Summary {
        bmi: profile.body_mass_index.map(Bmi::new),
        fitness_level: FitnessLevel::from_experience(profile.chair_yoga_experience),
        recommendations: recommendations(profile),
        message: message(profile),
    }
}
