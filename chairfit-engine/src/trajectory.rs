use chairfit_model::{
    catalog::WeeklyPoint,
    goal::GoalId,
    profile::{AgeRange, BodyType, Profile},
};
use chrono::{Days, Months, NaiveDate};
use log::debug;

use crate::round1;

/// Height assumed when turning a BMI back into a weight.
pub const ESTIMATED_HEIGHT_M: f64 = 1.7;
const ESTIMATED_HEIGHT_SQUARED: f64 = ESTIMATED_HEIGHT_M * ESTIMATED_HEIGHT_M;
const DEFAULT_WEIGHT_KG: f64 = 70.0;
const HEALTHY_BMI_UPPER: f64 = 24.0;
const HEALTHY_BMI_LOWER: f64 = 19.0;
const SENIOR_EXTRA_DAYS: u64 = 14;

#[derive(Clone, Debug, PartialEq)]
pub struct Projection {
    pub current_weight_kg: f64,
    pub target_weight_kg: f64,
    pub start_date: NaiveDate,
    pub target_date: NaiveDate,
    pub weekly_points: Vec<WeeklyPoint>,
}

impl Projection {
    pub fn weight_difference(&self) -> f64 {
        (self.current_weight_kg - self.target_weight_kg).abs()
    }

    pub fn total_days(&self) -> i64 {
        (self.target_date - self.start_date).num_days()
    }

    /// Headline shown above the projection chart.
    pub fn message(&self, profile: &Profile) -> String {
        let date = self.target_date.format("%-d %b %Y");
        if profile.has_goal(GoalId::LoseWeight) {
            format!(
                "We predict you will reach {} kg by {}, losing {} kg in total.",
                self.target_weight_kg,
                date,
                round1(self.weight_difference())
            )
        } else if profile.has_goal(GoalId::ManageMood) || profile.has_goal(GoalId::ImproveHeart) {
            format!(
                "Your plan is set up to improve your overall health by {}, keeping an ideal weight of {} kg.",
                date, self.target_weight_kg
            )
        } else {
            format!(
                "Your personalised programme runs until {}, helping you reach your best shape.",
                date
            )
        }
    }
}

pub fn current_weight(bmi: Option<f64>) -> f64 {
    bmi.map(|bmi| (bmi * ESTIMATED_HEIGHT_SQUARED).round())
        .unwrap_or(DEFAULT_WEIGHT_KG)
}

pub fn target_weight(
    bmi: Option<f64>,
    current_weight: f64,
    wants_weight_loss: bool,
    body_type: Option<BodyType>,
) -> f64 {
    match bmi {
        Some(bmi) if bmi > 25.0 => {
            (HEALTHY_BMI_UPPER * ESTIMATED_HEIGHT_SQUARED).round()
        }
        Some(bmi) if bmi < 18.5 => {
            (HEALTHY_BMI_LOWER * ESTIMATED_HEIGHT_SQUARED).round()
        }
        Some(_) if wants_weight_loss => (current_weight * 0.95).round(),
        Some(_) => current_weight.round(),
        None if body_type == Some(BodyType::Plus) => 65.0,
        None => 60.0,
    }
}

pub fn horizon_months(weight_difference: f64) -> u32 {
    if weight_difference > 5.0 {
        3
    } else if weight_difference > 2.0 {
        2
    } else {
        1
    }
}

pub fn target_date(
    today: NaiveDate,
    weight_difference: f64,
    age_range: Option<AgeRange>,
) -> NaiveDate {
    let date = today + Months::new(horizon_months(weight_difference));
    if age_range.as_ref().is_some_and(AgeRange::is_senior) {
        date + Days::new(SENIOR_EXTRA_DAYS)
    } else {
        date
    }
}

/// One point per whole week from `start`, moving linearly from `current` to
/// `target` so that the last point lands on the target.
pub fn weekly_points(
    start: NaiveDate,
    total_days: i64,
    current: f64,
    target: f64,
) -> Vec<WeeklyPoint> {
    let weeks = (total_days.max(0) / 7) as u64;
    let step = if weeks == 0 {
        0.0
    } else {
        (current - target) / weeks as f64
    };

    (0..=weeks)
        .map(|week| WeeklyPoint {
            date: start + Days::new(week * 7),
            weight_kg: round1(current - step * week as f64),
        })
        .collect()
}

pub fn project(profile: &Profile, today: NaiveDate) -> Projection {
    let current = current_weight(profile.body_mass_index);
    let target = target_weight(
        profile.body_mass_index,
        current,
        profile.has_goal(GoalId::LoseWeight),
        profile.body_type,
    );
    let target_date = target_date(today, (current - target).abs(), profile.age_range);
    let total_days = (target_date - today).num_days();
    let weekly_points = weekly_points(today, total_days, current, target);
    debug!(
        "Projected {} kg -> {} kg over {} days ({} points)",
        current,
        target,
        total_days,
        weekly_points.len()
    );

    Projection {
        current_weight_kg: current,
        target_weight_kg: target,
        start_date: today,
        target_date,
        weekly_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn profile_with_bmi(bmi: f64) -> Profile {
        Profile {
            body_mass_index: Some(bmi),
            ..Profile::default()
        }
    }

    #[test]
    fn horizon_grows_with_difference() {
        let test_data = [(6.0, 3), (5.0, 2), (3.0, 2), (2.0, 1), (1.0, 1), (0.0, 1)];

        for (i, (difference, months)) in test_data.into_iter().enumerate() {
            assert_eq!(super::horizon_months(difference), months, "Test case #{}", i);
        }
    }

    #[test]
    fn seniors_get_two_extra_weeks() {
        let today = date(2026, 3, 10);
        let base = target_date(today, 6.0, Some(AgeRange::From35To44));
        assert_eq!(base, date(2026, 6, 10));
        assert_eq!(target_date(today, 6.0, None), base);
        assert_eq!(target_date(today, 6.0, Some(AgeRange::Over65)), base + Days::new(14));
        assert_eq!(target_date(today, 6.0, Some(AgeRange::From55To64)), base + Days::new(14));
    }

    #[test]
    fn target_weight_policy() {
        let test_data = [
            (Some(30.0), false, None, 69.0),
            (Some(25.1), true, None, 69.0),
            (Some(17.0), false, None, 55.0),
            (Some(22.0), true, None, 61.0),
            (Some(22.0), false, None, 64.0),
            (None, false, Some(BodyType::Plus), 65.0),
            (None, true, Some(BodyType::Slim), 60.0),
            (None, false, None, 60.0),
        ];

        for (i, (bmi, loss, body_type, expected)) in test_data.into_iter().enumerate() {
            let current = current_weight(bmi);
            assert_eq!(
                target_weight(bmi, current, loss, body_type),
                expected,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn current_weight_defaults_without_bmi() {
        assert_eq!(current_weight(None), 70.0);
        assert_eq!(current_weight(Some(24.2)), 70.0);
        assert_eq!(current_weight(Some(30.0)), 87.0);
        // 1.7 * 1.7 is just below 2.89, so 50 * 1.7^2 stays under 144.5.
        assert_eq!(current_weight(Some(50.0)), 144.0);
    }

    #[test]
    fn weekly_points_span_current_to_target() {
        let today = date(2026, 1, 15);
        let profile = profile_with_bmi(30.0);
        let projection = project(&profile, today);

        assert_eq!(projection.current_weight_kg, 87.0);
        assert_eq!(projection.target_weight_kg, 69.0);
        assert_eq!(projection.target_date, date(2026, 4, 15));
        assert_eq!(projection.total_days(), 90);

        let points = &projection.weekly_points;
        assert_eq!(points.len() as i64, projection.total_days() / 7 + 1);
        assert_eq!(points.first().unwrap().weight_kg, 87.0);
        assert_eq!(points.first().unwrap().date, today);
        assert!((points.last().unwrap().weight_kg - 69.0).abs() < 0.05);
        assert_eq!(points[1].date, date(2026, 1, 22));
        assert!(points.windows(2).all(|w| w[0].weight_kg >= w[1].weight_kg));
    }

    #[test]
    fn maintenance_projection_is_flat() {
        let profile = profile_with_bmi(22.0);
        let projection = project(&profile, date(2026, 5, 1));

        assert_eq!(projection.weight_difference(), 0.0);
        assert_eq!(projection.target_date, date(2026, 6, 1));
        assert_eq!(projection.weekly_points.len(), 5);
        assert!(projection
            .weekly_points
            .iter()
            .all(|p| p.weight_kg == 64.0));
    }

    #[test]
    fn message_depends_on_goals() {
        let today = date(2026, 10, 19);
        let mut profile = profile_with_bmi(30.0);
        profile.set_goal(GoalId::LoseWeight, true);
        let projection = project(&profile, today);
        assert_eq!(
            projection.message(&profile),
            "We predict you will reach 69 kg by 19 Jan 2027, losing 18 kg in total."
        );

        profile.set_goal(GoalId::LoseWeight, false);
        profile.set_goal(GoalId::ImproveHeart, true);
        assert!(projection.message(&profile).starts_with("Your plan is set up"));

        profile.set_goal(GoalId::ImproveHeart, false);
        assert!(projection.message(&profile).starts_with("Your personalised programme"));
    }
}
