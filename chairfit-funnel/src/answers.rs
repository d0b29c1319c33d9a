use std::collections::BTreeSet;

use chairfit_engine::pricing;
use chairfit_model::{
    goal::GoalId,
    profile::{
        AgeRange, AvailableTime, BodyType, ChairYogaExperience, DreamBody, ExerciseStyle, Plan,
        Profile, Sex,
    },
};
use log::info;
use serde::Deserialize;

use crate::{
    checkout::{PaymentDetails, Receipt},
    session::{BodyMetrics, Funnel, FunnelError, Screen},
};

/// A complete set of answers for one pass through the funnel, as stored in
/// an answer file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answers {
    pub age_range: Option<AgeRange>,
    pub sex: Option<Sex>,
    #[serde(default)]
    pub goals: Vec<GoalId>,
    pub body_type: Option<BodyType>,
    pub dream_body: Option<DreamBody>,
    pub chair_yoga_experience: Option<ChairYogaExperience>,
    #[serde(default)]
    pub exercise_style: BTreeSet<ExerciseStyle>,
    pub available_time: Option<AvailableTime>,
    pub body_metrics: BodyMetrics,
    pub email: String,
    pub plan: Option<Plan>,
    pub payment: PaymentDetails,
}

impl Answers {
    /// Copies the quiz answers that precede the height/weight screen.
    pub fn apply_quiz(&self, profile: &mut Profile) {
        profile.age_range = self.age_range;
        profile.sex = self.sex;
        for goal in &self.goals {
            profile.set_goal(*goal, true);
        }
        profile.body_type = self.body_type;
        profile.dream_body = self.dream_body;
        profile.chair_yoga_experience = self.chair_yoga_experience;
        profile.exercise_style = self.exercise_style.clone();
        profile.available_time = self.available_time;
    }
}

/// Walks a fresh funnel through every screen using `answers`.
pub async fn replay(funnel: &mut Funnel, answers: &Answers) -> Result<Receipt, FunnelError> {
    answers.apply_quiz(funnel.profile_mut());

    let bmi = funnel.submit_body_metrics(answers.body_metrics)?;
    info!("BMI {}", bmi);

    while funnel.screen().is_informational() {
        match funnel.screen() {
            Screen::ProfileSummary => {
                info!("Fitness level {}", funnel.summary().fitness_level)
            }
            Screen::PlanProjection => {
                let projection = funnel.projection();
                info!(
                    "Projected {} kg by {}",
                    projection.target_weight_kg, projection.target_date
                )
            }
            Screen::PlanReady => info!("Archetype {}", funnel.archetype().title),
            _ => {}
        }
        funnel.proceed()?;
    }

    let plan = answers.plan.unwrap_or(pricing::recommended().plan);
    funnel.submit_sales(&answers.email, plan)?;
    funnel.checkout(answers.payment.clone()).await
}
