use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr)]
#[cfg_attr(
    feature = "serde",
    derive(serde_with::SerializeDisplay, serde_with::DeserializeFromStr)
)]
#[strum(serialize_all = "kebab-case")]
pub enum GoalId {
    LoseWeight,
    ManageMood,
    BalanceHormones,
    ImproveMobility,
    ImproveHeart,
    EnhanceSkin,
}

impl GoalId {
    fn details(&self) -> (&'static str, &'static str, &'static str) {
        match self {
            GoalId::LoseWeight => (
                "Lose weight",
                "Burn fat and reach a healthier weight",
                "🔥",
            ),
            GoalId::ManageMood => (
                "Manage mood",
                "Reduce stress and anxiety with mindful movement",
                "😊",
            ),
            GoalId::BalanceHormones => (
                "Balance hormones",
                "Support a steadier energy level through the day",
                "🌸",
            ),
            GoalId::ImproveMobility => (
                "Improve mobility",
                "Move freely and relieve joint and back pain",
                "🤸",
            ),
            GoalId::ImproveHeart => (
                "Improve heart health",
                "Strengthen circulation and blood pressure",
                "❤️",
            ),
            GoalId::EnhanceSkin => (
                "Enhance skin",
                "Glow from better circulation and rest",
                "✨",
            ),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub description: String,
    pub icon: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub selected: bool,
}

impl Goal {
    /// All goals offered by the quiz, in display order, none selected.
    pub fn catalog() -> Vec<Goal> {
        GoalId::iter().map(Goal::from).collect()
    }
}

impl From<GoalId> for Goal {
    fn from(id: GoalId) -> Self {
        let (title, description, icon) = id.details();
        Self {
            id,
            title: title.to_owned(),
            description: description.to_owned(),
            icon: icon.to_owned(),
            selected: false,
        }
    }
}
