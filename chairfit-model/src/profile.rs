use std::collections::BTreeSet;

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::goal::{Goal, GoalId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum AgeRange {
    #[strum(serialize = "18-24")]
    From18To24,
    #[strum(serialize = "25-34")]
    From25To34,
    #[strum(serialize = "35-44")]
    From35To44,
    #[strum(serialize = "45-54")]
    From45To54,
    #[strum(serialize = "55-64")]
    From55To64,
    #[strum(serialize = "65+")]
    Over65,
}

impl AgeRange {
    /// Older users get a slightly longer horizon on their projected plan.
    pub fn is_senior(&self) -> bool {
        matches!(self, AgeRange::From55To64 | AgeRange::Over65)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum BodyType {
    Slim,
    Average,
    Curvy,
    Plus,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum DreamBody {
    Fit,
    Athletic,
    Content,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum ChairYogaExperience {
    Never,
    Tried,
    Regular,
}

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum ExerciseStyle {
    Yoga,
    Strength,
    Stretching,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
pub enum AvailableTime {
    #[strum(serialize = "less15")]
    LessThan15,
    #[strum(serialize = "15to30")]
    From15To30,
    #[strum(serialize = "more30")]
    MoreThan30,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "lowercase")]
pub enum Plan {
    Starter,
    Premium,
    Vip,
}

/// Everything the user answered during one funnel session.
///
/// Quiz answers that the user may skip are optional; derived values are
/// recomputed from this struct whenever they are needed and never stored,
/// except for the body mass index committed by the height/weight screen.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Profile {
    pub height_cm: u16,
    pub weight_kg: u16,
    pub target_weight_kg: u16,
    pub age_range: Option<AgeRange>,
    pub sex: Option<Sex>,
    pub goals: Vec<Goal>,
    pub body_type: Option<BodyType>,
    pub dream_body: Option<DreamBody>,
    pub chair_yoga_experience: Option<ChairYogaExperience>,
    pub exercise_style: BTreeSet<ExerciseStyle>,
    pub available_time: Option<AvailableTime>,
    pub email: String,
    pub selected_plan: Option<Plan>,
    pub body_mass_index: Option<f64>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            height_cm: 170,
            weight_kg: 70,
            target_weight_kg: 60,
            age_range: None,
            sex: None,
            goals: Goal::catalog(),
            body_type: None,
            dream_body: None,
            chair_yoga_experience: None,
            exercise_style: BTreeSet::new(),
            available_time: None,
            email: String::new(),
            selected_plan: None,
            body_mass_index: None,
        }
    }
}

impl Profile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_goal(&self, id: GoalId) -> bool {
        self.goals.iter().any(|g| g.id == id && g.selected)
    }

    pub fn selected_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| g.selected)
    }

    /// Marks a goal as (de)selected. Goals missing from the list, e.g. after
    /// deserializing a partial answer file, are appended from the catalog.
    pub fn set_goal(&mut self, id: GoalId, selected: bool) {
        match self.goals.iter_mut().find(|g| g.id == id) {
            Some(goal) => goal.selected = selected,
            None => {
                let mut goal = Goal::from(id);
                goal.selected = selected;
                self.goals.push(goal);
            }
        }
    }

    pub fn prefers(&self, style: ExerciseStyle) -> bool {
        self.exercise_style.contains(&style)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn parses_answer_ids() {
        assert_eq!(AgeRange::from_str("65+"), Ok(AgeRange::Over65));
        assert_eq!(AgeRange::from_str("55-64"), Ok(AgeRange::From55To64));
        assert_eq!(AvailableTime::from_str("15to30"), Ok(AvailableTime::From15To30));
        assert_eq!(BodyType::from_str("plus"), Ok(BodyType::Plus));
        assert_eq!(Plan::Vip.to_string(), "vip");
        assert!(AgeRange::from_str("70+").is_err());
    }

    #[test]
    fn only_two_oldest_ranges_are_senior() {
        let seniors: Vec<_> = <AgeRange as strum::IntoEnumIterator>::iter()
            .filter(AgeRange::is_senior)
            .collect();
        assert_eq!(seniors, vec![AgeRange::From55To64, AgeRange::Over65]);
    }

    #[test]
    fn new_profile_has_no_selected_goals() {
        let profile = Profile::new();
        assert_eq!(profile.goals.len(), 6);
        assert_eq!(profile.selected_goals().count(), 0);
        assert_eq!(profile.body_mass_index, None);
    }

    #[test]
    fn set_goal_toggles_and_appends() {
        let mut profile = Profile::new();
        profile.set_goal(GoalId::LoseWeight, true);
        assert!(profile.has_goal(GoalId::LoseWeight));
        profile.set_goal(GoalId::LoseWeight, false);
        assert!(!profile.has_goal(GoalId::LoseWeight));

        profile.goals.clear();
        profile.set_goal(GoalId::EnhanceSkin, true);
        assert_eq!(profile.goals.len(), 1);
        assert!(profile.has_goal(GoalId::EnhanceSkin));
    }
}
